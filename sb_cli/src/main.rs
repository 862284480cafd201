use crate::cli::{Cli, Commands};
use crate::client::CliClient;
use crate::error::Result;
use clap::Parser;
use std::time::Duration;
mod cli;
mod client;
mod commands;
mod error;
mod form;
mod utils;

#[tokio::main]
async fn main() {
    if let Err(err) = try_main().await {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }
}

async fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let cli_client = CliClient::new(&cli.url, Duration::from_secs(cli.timeout))?;

    match cli.command.unwrap_or(Commands::Form) {
        Commands::Form => commands::form::handle(&cli_client).await?,
        Commands::Predict(args) => commands::predict::handle(&cli_client, args.into()).await?,
        Commands::Health => commands::health::handle(&cli_client).await?,
    }

    Ok(())
}
