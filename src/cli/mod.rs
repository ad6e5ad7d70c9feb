//! CLI definitions.

pub mod commands;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stockcast")]
#[command(author, version, about = "Forecast stock closing prices with a lagged-close linear regression")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (overrides the configuration file)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch history and forecast closing prices
    Forecast(ForecastArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(clap::Args)]
pub struct ForecastArgs {
    /// Ticker symbol (defaults to forecast.default_symbol)
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Business days to forecast (defaults to forecast.default_horizon)
    #[arg(short, long)]
    pub days: Option<usize>,

    /// End date of the history window, exclusive (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Read history from a CSV file instead of Yahoo Finance
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Save the report (in the chosen format) to a file
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Show the interactive table and chart panel
    #[arg(long)]
    pub tui: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_forecast_args() {
        let cli = Cli::parse_from([
            "stockcast",
            "forecast",
            "--symbol",
            "BBCA.JK",
            "--days",
            "10",
            "--end-date",
            "2024-06-01",
            "--output",
            "json",
        ]);

        let Commands::Forecast(args) = cli.command else {
            panic!("expected forecast command");
        };
        assert_eq!(args.symbol.as_deref(), Some("BBCA.JK"));
        assert_eq!(args.days, Some(10));
        assert_eq!(args.end_date, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert!(args.output == OutputFormat::Json);
        assert!(!args.tui);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["stockcast", "forecast"]);
        assert_eq!(cli.config, PathBuf::from("config/default.toml"));
        assert!(cli.log_level.is_none());

        let Commands::Forecast(args) = cli.command else {
            panic!("expected forecast command");
        };
        assert!(args.symbol.is_none());
        assert!(args.days.is_none());
        assert!(args.output == OutputFormat::Text);
    }
}
