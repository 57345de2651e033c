use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// A single configuration validation finding.
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// A user-friendly summary of all errors.
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Application configuration, stored as TOML in the platform config dir.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Locations to fetch forecasts for, e.g. "Munich, Germany".
    #[serde(default)]
    pub locations: Vec<String>,

    /// Number of forecast days requested from the provider.
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,

    /// First hour of the daytime window kept from the hourly feed.
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,

    /// Last hour (inclusive) of the daytime window.
    #[serde(default = "default_end_hour")]
    pub end_hour: u32,

    /// Path to the SQLite forecast store.
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    #[serde(default)]
    pub calendar: CalendarConfig,

    #[serde(default)]
    pub api: ApiConfig,
}

/// Calendar sync settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Target calendar, usually "primary".
    pub calendar_id: String,

    /// Environment variable holding the Calendar API access token.
    pub token_env: String,
}

/// Upstream API endpoints, overridable for self-hosted mirrors and tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub forecast_url: String,
    pub geocode_url: String,
}

fn default_forecast_days() -> u8 {
    7
}

fn default_start_hour() -> u32 {
    6
}

fn default_end_hour() -> u32 {
    22
}

fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("weathercal").join("forecasts.db"))
        .unwrap_or_else(|| PathBuf::from("forecasts.db"))
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            calendar_id: "primary".to_string(),
            token_env: "WEATHERCAL_TOKEN".to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            forecast_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            geocode_url: "https://geocoding-api.open-meteo.com/v1/search".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locations: Vec::new(),
            forecast_days: default_forecast_days(),
            start_hour: default_start_hour(),
            end_hour: default_end_hour(),
            database_path: default_database_path(),
            calendar: CalendarConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating a default file if it doesn't
    /// exist yet.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, creating a default file if
    /// it doesn't exist yet.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        Ok(config)
    }

    /// Load configuration and validate it.
    ///
    /// Returns the config along with any validation warnings. Returns an
    /// error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config_path = Self::config_path()?;
        Self::load_validated_from(&config_path)
    }

    /// Load configuration from an explicit path and validate it.
    pub fn load_validated_from(config_path: &Path) -> Result<(Self, ValidationResult)> {
        let config = Self::load_from(config_path)?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.api.forecast_url, "api.forecast_url", &mut result);
        self.validate_url(&self.api.geocode_url, "api.geocode_url", &mut result);

        if self.forecast_days == 0 {
            result.add_error("forecast_days", "Must request at least one forecast day");
        } else if self.forecast_days > 16 {
            result.add_warning(
                "forecast_days",
                "Open-Meteo serves at most 16 forecast days",
            );
        }

        if self.end_hour > 23 {
            result.add_error("end_hour", "Hour must be 0-23");
        }
        if self.start_hour >= self.end_hour {
            result.add_error(
                "start_hour",
                "Daytime window start must come before its end",
            );
        }

        if self.calendar.calendar_id.is_empty() {
            result.add_error("calendar.calendar_id", "Calendar id must not be empty");
        }
        if self.calendar.token_env.is_empty() {
            result.add_error(
                "calendar.token_env",
                "Token environment variable name must not be empty",
            );
        }

        if self.locations.is_empty() {
            result.add_warning(
                "locations",
                "No locations configured; pass --location on the command line",
            );
        }

        result
    }

    fn validate_url(&self, value: &str, field: &str, result: &mut ValidationResult) {
        match Url::parse(value) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => {
                result.add_error(field, format!("Unsupported URL scheme '{}'", url.scheme()));
            }
            Err(e) => {
                result.add_error(field, format!("Invalid URL: {e}"));
            }
        }
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to an explicit path, creating parent directories.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Path to the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("weathercal").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn default_config_passes_validation() {
        let config = Config::default();
        let result = config.validate();
        assert!(result.is_valid(), "{}", result.error_summary());
        // No locations yet, which is a warning rather than an error.
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn zero_forecast_days_is_rejected() {
        let config = Config {
            forecast_days: 0,
            ..Config::default()
        };
        assert!(!config.validate().is_valid());
    }

    #[test]
    fn inverted_daytime_window_is_rejected() {
        let config = Config {
            start_hour: 22,
            end_hour: 6,
            ..Config::default()
        };
        assert!(!config.validate().is_valid());
    }

    #[test]
    fn malformed_api_url_is_rejected() {
        let mut config = Config::default();
        config.api.forecast_url = "not a url".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.error_summary().contains("api.forecast_url"));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let mut config = Config::default();
        config.api.geocode_url = "ftp://example.com/search".to_string();
        assert!(!config.validate().is_valid());
    }

    #[test]
    fn load_creates_default_file_on_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weathercal").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.forecast_days, 7);
        assert_eq!(config.calendar.calendar_id, "primary");
    }

    #[test]
    fn save_and_reload_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.locations = vec!["Munich, Germany".to_string()];
        config.forecast_days = 3;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.locations, vec!["Munich, Germany".to_string()]);
        assert_eq!(loaded.forecast_days, 3);
    }
}
