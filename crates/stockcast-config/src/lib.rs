//! Configuration management.

mod settings;

pub use settings::{
    AppConfig, AppSettings, ForecastSettings, LoggingConfig, ProviderSettings, SettingsError,
};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
///
/// The file is optional; every setting has a default. Environment
/// variables such as `STOCKCAST__FORECAST__DEFAULT_SYMBOL` override it.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("STOCKCAST")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app: AppConfig = config.try_deserialize()?;
    app.validate()
        .map_err(|e| ConfigError::Message(e.to_string()))?;
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("stockcast-{}-{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = load_config(Path::new("/no/such/stockcast.toml")).unwrap();
        assert_eq!(config.forecast, ForecastSettings::default());
        assert_eq!(config.app.name, "stockcast");
    }

    #[test]
    fn test_file_overrides() {
        let path = temp_path("overrides");
        fs::write(
            &path,
            "[forecast]\ndefault_symbol = \"BBCA.JK\"\ndefault_horizon = 10\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.forecast.default_symbol, "BBCA.JK");
        assert_eq!(config.forecast.default_horizon, 10);
        assert_eq!(config.forecast.max_horizon, 30);
        assert_eq!(config.logging.level, "debug");

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let path = temp_path("invalid");
        fs::write(&path, "[forecast]\ndefault_horizon = 99\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("default_horizon"));

        fs::remove_file(path).ok();
    }
}
