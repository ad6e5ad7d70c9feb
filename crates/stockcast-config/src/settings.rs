//! Configuration structures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub forecast: ForecastSettings,
    #[serde(default)]
    pub provider: ProviderSettings,
}

/// Invalid combination of settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("forecast.min_horizon must be at least 1")]
    ZeroMinHorizon,

    #[error("forecast.min_horizon ({min}) exceeds forecast.max_horizon ({max})")]
    InvertedHorizon { min: usize, max: usize },

    #[error("forecast.default_horizon ({value}) is outside {min}..={max}")]
    DefaultHorizonOutOfRange { value: usize, min: usize, max: usize },

    #[error("logging.format must be 'pretty' or 'json', got '{0}'")]
    UnknownLogFormat(String),
}

impl AppConfig {
    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let f = &self.forecast;
        if f.min_horizon == 0 {
            return Err(SettingsError::ZeroMinHorizon);
        }
        if f.min_horizon > f.max_horizon {
            return Err(SettingsError::InvertedHorizon {
                min: f.min_horizon,
                max: f.max_horizon,
            });
        }
        if !f.accepts(f.default_horizon) {
            return Err(SettingsError::DefaultHorizonOutOfRange {
                value: f.default_horizon,
                min: f.min_horizon,
                max: f.max_horizon,
            });
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(SettingsError::UnknownLogFormat(self.logging.format.clone()));
        }
        Ok(())
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "stockcast".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Whether JSON log lines are requested.
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

/// Forecast input defaults and bounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ForecastSettings {
    pub default_symbol: String,
    pub default_horizon: usize,
    pub min_horizon: usize,
    pub max_horizon: usize,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            default_symbol: "DCII.JK".to_string(),
            default_horizon: 5,
            min_horizon: 1,
            max_horizon: 30,
        }
    }
}

impl ForecastSettings {
    /// Check if a horizon lies within the configured bounds.
    pub fn accepts(&self, horizon_days: usize) -> bool {
        (self.min_horizon..=self.max_horizon).contains(&horizon_days)
    }
}

/// Market-data provider settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProviderSettings {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com".to_string(),
            user_agent: "Mozilla/5.0 (compatible; stockcast)".to_string(),
        }
    }
}
