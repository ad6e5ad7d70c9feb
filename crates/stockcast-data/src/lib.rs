//! Daily price history sources.

mod csv_source;
mod yahoo;

pub use csv_source::CsvSource;
pub use yahoo::{YahooConfig, YahooSource};

use chrono::NaiveDate;
use stockcast_core::error::DataError;
use stockcast_core::types::PriceSeries;
use stockcast_core::DataSource;

/// Load a symbol's bars in `[start, end)` from a CSV file.
pub async fn load_csv(
    path: &str,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<PriceSeries, DataError> {
    let source = CsvSource::new(path)?;
    source.daily_bars(symbol, start, end).await
}
