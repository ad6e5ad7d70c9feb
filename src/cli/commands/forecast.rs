//! Forecast command implementation.

use anyhow::{bail, Context, Result};
use chrono::Local;
use stockcast_config::AppConfig;
use stockcast_core::error::StockcastError;
use stockcast_core::traits::DataSource;
use stockcast_core::types::ForecastRequest;
use stockcast_data::{CsvSource, YahooConfig, YahooSource};
use stockcast_engine::ForecastPipeline;
use stockcast_monitor::ForecastPanel;
use stockcast_report::ForecastReport;
use tracing::info;

use crate::cli::{ForecastArgs, OutputFormat};

pub async fn run(args: ForecastArgs, config: &AppConfig) -> Result<()> {
    let request = build_request(&args, config)?;
    info!("Starting forecast: {}", request);

    let source = create_source(&args, config)?;
    let pipeline = ForecastPipeline::new(source.as_ref());

    let outcome = match pipeline.run(&request).await {
        Ok(outcome) => outcome,
        Err(StockcastError::Forecast(e)) => bail!("{}", e.user_message()),
        Err(e) => return Err(e.into()),
    };

    let report = ForecastReport::from(outcome);

    if args.tui {
        ForecastPanel::new(250)
            .run(&report)
            .context("Failed to run forecast panel")?;
    } else {
        println!("{}", render(&report, args.output)?);
    }

    // Save if requested
    if let Some(save_path) = &args.save {
        std::fs::write(save_path, render(&report, args.output)?)
            .with_context(|| format!("Failed to write {}", save_path.display()))?;
        info!("Report saved to {:?}", save_path);
    }

    Ok(())
}

fn build_request(args: &ForecastArgs, config: &AppConfig) -> Result<ForecastRequest> {
    let settings = &config.forecast;

    let symbol = args
        .symbol
        .clone()
        .unwrap_or_else(|| settings.default_symbol.clone());
    let symbol = symbol.trim().to_uppercase();
    if symbol.is_empty() {
        bail!("Symbol must not be empty");
    }

    let days = args.days.unwrap_or(settings.default_horizon);
    if !settings.accepts(days) {
        bail!(
            "--days must be between {} and {}, got {}",
            settings.min_horizon,
            settings.max_horizon,
            days
        );
    }

    let end_date = args.end_date.unwrap_or_else(|| Local::now().date_naive());

    Ok(ForecastRequest::new(symbol, days, end_date))
}

fn create_source(args: &ForecastArgs, config: &AppConfig) -> Result<Box<dyn DataSource>> {
    if let Some(data_path) = &args.data {
        let source = CsvSource::new(data_path).with_context(|| {
            format!(
                "Data file '{}' does not exist. Provide a CSV file (e.g. --data ./data/DCII.JK.csv)",
                data_path.display()
            )
        })?;
        return Ok(Box::new(source));
    }

    let source = YahooSource::new(YahooConfig {
        base_url: config.provider.base_url.clone(),
        user_agent: config.provider.user_agent.clone(),
    })
    .context("Failed to create Yahoo Finance client")?;
    Ok(Box::new(source))
}

fn render(report: &ForecastReport, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => report.summary(),
        OutputFormat::Json => report.to_json()?,
        OutputFormat::Csv => report.forecast_to_csv()?,
    })
}
