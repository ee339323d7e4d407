use anyhow::Context;
use clap::Parser;

use candyworld_app::{AppConfig, Cli, run_query};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    candyworld_observability::init();

    let command = cli.command_or_default();
    let config = AppConfig::from_env();
    let store = config.build_store().context("failed to load catalog")?;

    tracing::info!(products = store.len(), ?command, "answering query");
    let output = run_query(&store, &command)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
