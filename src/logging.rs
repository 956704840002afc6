//! Logging setup for the command line front-ends
//!
//! Installs a `tracing` subscriber with:
//! - an `EnvFilter` built from the configured level
//! - a stderr layer (compact text or JSON)
//! - an optional daily-rolling file layer

use crate::config::LoggingConfig;
use crate::error::{HomeError, Result};
use std::path::Path;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Build the filter for the given configuration
pub fn env_filter(config: &LoggingConfig, debug: bool) -> EnvFilter {
    if debug {
        return EnvFilter::new("debug");
    }

    EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize logging with the given configuration
pub fn init_logging(config: &LoggingConfig, debug: bool) -> Result<()> {
    let stderr_layer = if config.json_format {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed()
    };

    let file_layer = match &config.file {
        Some(file_path) => {
            let directory = file_path.parent().unwrap_or_else(|| Path::new("."));
            if !directory.as_os_str().is_empty() {
                std::fs::create_dir_all(directory)?;
            }

            let file_name = file_path
                .file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("home-controller.log"));
            let file_appender = tracing_appender::rolling::daily(directory, file_name);

            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter(config, debug))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| HomeError::config(format!("Failed to initialize logging: {e}")))
}
