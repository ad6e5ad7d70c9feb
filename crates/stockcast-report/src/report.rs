//! Forecast report generation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stockcast_core::types::PriceSeries;
use stockcast_engine::{ForecastOutcome, ForecastSequence};

use crate::SummaryStats;

/// Complete forecast report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastReport {
    /// Ticker symbol
    pub symbol: String,
    /// Number of projected business days
    pub horizon_days: usize,
    /// End of the history window (exclusive)
    pub end_date: NaiveDate,
    /// Observed history
    pub history: PriceSeries,
    /// Projected closes and the fitted model
    pub forecast: ForecastSequence,
    /// Statistics
    pub stats: SummaryStats,
}

impl From<ForecastOutcome> for ForecastReport {
    fn from(outcome: ForecastOutcome) -> Self {
        let stats = SummaryStats::compute(&outcome.history, &outcome.forecast);
        Self {
            symbol: outcome.request.symbol,
            horizon_days: outcome.request.horizon_days,
            end_date: outcome.request.end_date,
            history: outcome.history,
            forecast: outcome.forecast,
            stats,
        }
    }
}

impl ForecastReport {
    /// Chart title.
    pub fn title(&self) -> String {
        format!(
            "{} price forecast for the next {} days (linear regression)",
            self.symbol, self.horizon_days
        )
    }

    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str("                  STOCK PRICE FORECAST                      \n");
        s.push_str("═══════════════════════════════════════════════════════════\n\n");

        s.push_str(&format!("  {}\n\n", self.title()));

        s.push_str(&format!(
            "PREDICTED CLOSE, NEXT {} DAYS\n",
            self.horizon_days
        ));
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str("  Date            Predicted Close\n");
        for point in self.forecast.points() {
            s.push_str(&format!(
                "  {}      {:>15.2}\n",
                point.date, point.predicted_close
            ));
        }
        s.push('\n');

        s.push_str("STATISTICS\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!(
            "  Mean Actual Price:    {:.2}\n",
            self.stats.mean_actual
        ));
        s.push_str(&format!(
            "  Mean Predicted Price: {:.2}\n",
            self.stats.mean_predicted
        ));
        s.push_str(&format!(
            "  Last Actual Close:    {:.2}\n",
            self.stats.last_actual
        ));
        s.push_str(&format!(
            "  Projected Change:     {:+.2}%\n",
            self.stats.projected_change_pct
        ));
        s.push('\n');

        s.push_str("MODEL\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!(
            "  close[t] = {:.4} + {:.4} * close[t-1]\n",
            self.stats.intercept, self.stats.slope
        ));
        s.push_str(&format!(
            "  History:              {} bars",
            self.stats.history_points
        ));
        if let (Some(first), Some(last)) = (self.history.first(), self.history.last()) {
            s.push_str(&format!(" ({} .. {})", first.date, last.date));
        }
        s.push('\n');
        s.push('\n');

        s.push_str("═══════════════════════════════════════════════════════════\n");

        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV (forecast table only).
    pub fn forecast_to_csv(&self) -> Result<String, csv::Error> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["date", "predicted_close"])?;
        for point in self.forecast.points() {
            writer.write_record([point.date.to_string(), point.predicted_close.to_string()])?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
