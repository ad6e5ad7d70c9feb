//! Data source trait definitions.

use crate::error::DataError;
use crate::types::PriceSeries;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for daily price history providers.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch daily bars.
    ///
    /// # Arguments
    /// * `symbol` - The symbol to fetch
    /// * `start` - First date of the range (inclusive)
    /// * `end` - Last date of the range (exclusive)
    ///
    /// # Returns
    /// A series ordered from oldest to newest. An unknown symbol or an
    /// empty range yields an empty series, not an error.
    async fn daily_bars(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries, DataError>;

    /// Get the data source name.
    fn name(&self) -> &str;
}
