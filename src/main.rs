//! Home controller command line client
//!
//! Sends one device command to the backend and prints the response
//! message, or lists what the backend supports.

use anyhow::Context;
use clap::{Parser, Subcommand};
use home_controller_rust::{
    catalog::{Action, ClimateAction, Domain, LightAction},
    create_client, logging,
    runner::{ActionRunner, RunOutcome},
    AppConfig, HomeClient,
};
use std::path::PathBuf;
use tracing::debug;

/// Home controller command line client
#[derive(Parser, Debug)]
#[command(name = "home-controller")]
#[command(about = "Control the air conditioner and light through the home controller backend")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL, overrides HOME_CONTROLLER_URL (e.g. http://192.168.1.50:8000)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// TOML configuration file
    #[arg(long, global = true, env = "HOME_CONTROLLER_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Air conditioner control
    Ac {
        #[arg(value_enum)]
        action: ClimateAction,
    },
    /// Light control
    Light {
        #[arg(value_enum)]
        action: LightAction,
    },
    /// Show the controls the backend reports
    Status,
    /// List every supported action
    List,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<AppConfig> {
        let config = AppConfig::load(self.config.as_deref()).context("Failed to load configuration")?;
        match &self.base_url {
            Some(base_url) => Ok(config.with_base_url(base_url)?),
            None => Ok(config),
        }
    }
}

fn print_catalog(json: bool) -> anyhow::Result<()> {
    let actions: Vec<Action> = Action::all().collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&actions)?);
        return Ok(());
    }

    for domain in [Domain::Climate, Domain::Lighting] {
        println!("{}", domain.title());
        for action in actions.iter().filter(|a| a.domain() == domain) {
            println!("  {:<18} POST {:<22} {}", action.cli_name(), action.path(), action.description());
        }
    }
    Ok(())
}

async fn show_status(client: &dyn HomeClient, json: bool) -> anyhow::Result<()> {
    let status = client.climate_status().await?;
    let modes = client.light_modes().await?;

    if json {
        let value = serde_json::json!({ "ac": status, "light_modes": modes });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("AC modes:          {}", status.available_modes.join(", "));
        println!("AC temperature:    {}", status.available_temp_controls.join(", "));
        println!("AC timer:          {}", status.available_timer_controls.join(", "));
        println!("Light modes:       {}", modes.join(", "));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::List = cli.command {
        return print_catalog(cli.json);
    }

    let config = cli.load_config()?;
    logging::init_logging(&config.logging, cli.debug)?;
    debug!("using backend at {}", config.backend.base_url);

    let client = create_client(&config.backend)?;

    let action = match cli.command {
        Command::Ac { action } => Action::from(action),
        Command::Light { action } => Action::from(action),
        Command::Status => return show_status(client.as_ref(), cli.json).await,
        Command::List => return print_catalog(cli.json),
    };

    let runner = ActionRunner::new(client);
    let notice = match runner.run(action).await {
        RunOutcome::Finished(notice) => notice,
        RunOutcome::Busy => anyhow::bail!("another action is still in progress"),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&notice)?);
    } else if notice.success {
        println!("✅ {}", notice.message);
    } else {
        println!("❌ {}", notice.message);
    }

    if !notice.success {
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_base_url_env_is_left_to_config_layer() {
        temp_env::with_vars(
            [
                ("HOME_CONTROLLER_URL", Some("http://10.0.0.2:9000/")),
                ("HOME_CONTROLLER_CONFIG", None),
            ],
            || {
                let cli = Cli::try_parse_from(["home-controller", "ac", "aircon-on"]).unwrap();
                assert_eq!(cli.base_url, None);

                let config = cli.load_config().unwrap();
                assert_eq!(config.backend.base_url, "http://10.0.0.2:9000");
            },
        );
    }

    #[test]
    #[serial]
    fn test_base_url_flag_overrides_env() {
        temp_env::with_vars(
            [
                ("HOME_CONTROLLER_URL", Some("http://10.0.0.2:9000")),
                ("HOME_CONTROLLER_CONFIG", None),
            ],
            || {
                let cli = Cli::try_parse_from([
                    "home-controller",
                    "--base-url",
                    "http://192.168.1.50:8000/",
                    "light",
                    "dark",
                ])
                .unwrap();

                let config = cli.load_config().unwrap();
                assert_eq!(config.backend.base_url, "http://192.168.1.50:8000");
            },
        );
    }
}
