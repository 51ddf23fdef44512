//! Handles settings for the application. Configuration is read from an
//! optional TOML file (`config/bankops.toml` unless `--config` is given) and
//! from `BANKOPS_*` environment variables. Command line flags win over both.
use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/bankops";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log_level: String,
    pub first_account_id: u64,
    pub first_operation_id: u64,
    /// Pretty-print the JSON report.
    pub pretty: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            first_account_id: 1,
            first_operation_id: 1,
            pretty: true,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "bankops")]
#[command(about = "Replay a scenario of bank operations and print the resulting state")]
pub struct Args {
    /// Scenario file (JSON).
    pub scenario: PathBuf,
    /// Optional config file path (TOML).
    #[arg(long)]
    pub config: Option<String>,
    /// Override log level (e.g. `debug`).
    #[arg(long, env = "BANKOPS_LOG_LEVEL")]
    pub log_level: Option<String>,
    /// Print the report on a single line.
    #[arg(long)]
    pub compact: bool,
}

impl Settings {
    pub fn load(args: &Args) -> Result<Self> {
        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let mut settings: Settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("BANKOPS"))
            .build()?
            .try_deserialize()?;

        if let Some(level) = &args.log_level {
            settings.log_level = level.clone();
        }
        if args.compact {
            settings.pretty = false;
        }

        Ok(settings)
    }
}
