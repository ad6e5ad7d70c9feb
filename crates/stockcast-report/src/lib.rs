//! Forecast reports: summary statistics, text table, JSON and CSV export.

mod report;
mod statistics;

pub use report::ForecastReport;
pub use statistics::SummaryStats;
