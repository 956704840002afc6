//! Check that a home controller backend answers on every endpoint
//!
//! By default only the read-only status endpoints are queried. With
//! `--include-actions` every device action is sent as well, which
//! switches real devices.

use anyhow::Context;
use clap::Parser;
use home_controller_rust::{
    create_client, logging,
    verify::{verify_endpoints, VerifyOptions},
    AppConfig,
};
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "home-controller-verify")]
#[command(about = "Check every endpoint of a home controller backend")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Backend base URL, overrides HOME_CONTROLLER_URL (e.g. http://192.168.1.50:8000)
    #[arg(long)]
    base_url: Option<String>,

    /// TOML configuration file
    #[arg(long, env = "HOME_CONTROLLER_CONFIG")]
    config: Option<PathBuf>,

    /// Also send every device action (switches real devices)
    #[arg(long)]
    include_actions: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(base_url) = &args.base_url {
        config = config.with_base_url(base_url)?;
    }
    logging::init_logging(&config.logging, args.debug)?;

    if args.include_actions {
        warn!("sending every device action to {}", config.backend.base_url);
    }

    let client = create_client(&config.backend)?;
    let report = verify_endpoints(
        client.as_ref(),
        VerifyOptions {
            include_actions: args.include_actions,
        },
    )
    .await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\n🔍 Home Controller API check: {}", report.base_url);
        println!("{}", "=".repeat(60));
        for check in &report.checks {
            let mark = if check.passed { "✓" } else { "✗" };
            println!("{mark} {} {}", check.method, check.path);
            if !check.passed {
                println!("  {}", check.detail);
            }
        }
        println!("{}", "=".repeat(60));
        println!(
            "{} passed, {} failed ({} total)",
            report.passed(),
            report.failed(),
            report.checks.len()
        );
    }

    if !report.all_passed() {
        std::process::exit(1);
    }
    Ok(())
}
