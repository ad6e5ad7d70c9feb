//! stockcast CLI application.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;
use stockcast_config::load_config;
use stockcast_monitor::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Execute command
    match cli.command {
        Commands::Forecast(args) => {
            let config = load_config(&cli.config)
                .with_context(|| format!("Failed to load configuration from {:?}", cli.config))?;

            // Setup logging
            let log_level = cli
                .log_level
                .map(|l| l.as_str().to_string())
                .unwrap_or_else(|| config.logging.level.clone());
            let json = cli.json_logs || config.logging.is_json();
            let _guard = setup_logging(&log_level, json, config.logging.file.as_deref().map(Path::new))
                .context("Failed to open log file")?;

            cli::commands::forecast::run(args, &config).await
        }
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config).await,
    }
}
