//! Logging setup and the terminal forecast panel.

mod logging;
mod panel;

pub use logging::setup_logging;
pub use panel::ForecastPanel;
