//! Validate configuration command.

use anyhow::{Context, Result};
use std::path::Path;
use stockcast_config::load_config;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);
    if !config_path.exists() {
        println!("File not found, using built-in defaults and environment overrides");
    }

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Default symbol: {}", config.forecast.default_symbol);
            println!(
                "Horizon: {} days (allowed {}..={})",
                config.forecast.default_horizon,
                config.forecast.min_horizon,
                config.forecast.max_horizon
            );
            println!("Provider: {}", config.provider.base_url);
            println!();
            println!("Resolved configuration:");
            println!("{}", config.to_toml().context("Failed to render configuration")?);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
