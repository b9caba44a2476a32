#![warn(clippy::all, rust_2018_idioms)]

use anyhow::Context as _;
use clap::Parser as _;
use fintrak_client_core::{Client, FileStorage};

fn main() -> anyhow::Result<()> {
    let cli = fintrak_cli::cli::Cli::parse();
    let configuration =
        fintrak_cli::configuration::get_configuration().context("failed to read configuration")?;

    if let Err(e) = fintrak_cli::tracing::init(&cli, &configuration.tracing) {
        eprintln!("Failed to start tracing: {e}");
    }

    let storage_path = cli
        .storage
        .clone()
        .unwrap_or_else(|| configuration.storage.path.clone());
    let client = Client::new(Box::new(FileStorage::new(storage_path)));

    let output = fintrak_cli::commands::run(cli.command, &client)?;
    println!("{output}");
    Ok(())
}
