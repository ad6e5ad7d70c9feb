//! One forecast run: fetch history, fit, project.

use stockcast_core::error::{DataError, StockcastError};
use stockcast_core::traits::DataSource;
use stockcast_core::types::{ForecastRequest, PriceSeries};
use tracing::{info, warn};

use crate::forecast::{forecast, ForecastSequence};

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct ForecastOutcome {
    /// Parameters of the run
    pub request: ForecastRequest,
    /// Observed history the model was fit on
    pub history: PriceSeries,
    /// Projected closes
    pub forecast: ForecastSequence,
}

/// Runs a [`ForecastRequest`] against a data source.
pub struct ForecastPipeline<'a> {
    source: &'a dyn DataSource,
}

impl<'a> ForecastPipeline<'a> {
    /// Create a pipeline over a data source.
    pub fn new(source: &'a dyn DataSource) -> Self {
        Self { source }
    }

    /// Fetch the history window and forecast from it.
    ///
    /// Source failures are treated as an empty history, so the caller
    /// sees [`stockcast_core::ForecastError::DataUnavailable`].
    pub async fn run(&self, request: &ForecastRequest) -> Result<ForecastOutcome, StockcastError> {
        info!(
            "Fetching {} from {} ({} .. {})",
            request.symbol,
            self.source.name(),
            request.start_date(),
            request.end_date
        );

        let history = self.fetch_or_empty(request).await;
        info!("Loaded {} bars for {}", history.len(), request.symbol);

        let forecast = forecast(&history, request.horizon_days)?;
        info!(
            "Projected {} business days for {}",
            forecast.len(),
            request.symbol
        );

        Ok(ForecastOutcome {
            request: request.clone(),
            history,
            forecast,
        })
    }

    async fn fetch_or_empty(&self, request: &ForecastRequest) -> PriceSeries {
        let fetched: Result<PriceSeries, DataError> = self
            .source
            .daily_bars(&request.symbol, request.start_date(), request.end_date)
            .await;

        match fetched {
            Ok(series) => series,
            Err(e) => {
                warn!("Data source {} failed: {}", self.source.name(), e);
                PriceSeries::empty(request.symbol.clone())
            }
        }
    }
}
