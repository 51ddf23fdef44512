use std::fs;

use bank_core::Bank;
use clap::Parser;

use crate::{
    error::Result,
    script::{Runner, Scenario},
    settings::{Args, Settings},
};

mod error;
mod script;
mod settings;

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::load(&args)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "bankops={level},bank_core={level}",
            level = settings.log_level
        ))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(scenario = %args.scenario.display(), "loading scenario");
    let scenario: Scenario = serde_json::from_str(&fs::read_to_string(&args.scenario)?)?;

    let bank = Bank::builder()
        .first_account_id(settings.first_account_id)
        .first_operation_id(settings.first_operation_id)
        .build();
    let report = Runner::new(bank).run(scenario)?;

    let output = if settings.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{output}");

    Ok(())
}
