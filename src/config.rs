//! Application configuration loaded from environment variables.

use crate::models::Coordinate;
use crate::services::geolocation::DEFAULT_GEOLOCATION_TIMEOUT;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// JSON file holding the local session
    pub store_path: PathBuf,
    /// GeoJSON business catalog (built-in demo catalog when unset)
    pub catalog_path: Option<PathBuf>,
    /// Upper bound on the startup position lookup
    pub geolocation_timeout: Duration,
    /// Position reported by the geolocation provider, if any
    pub home_location: Option<Coordinate>,
    /// Identity registered when no session is stored
    pub demo_user: Option<DemoUser>,
}

/// Name and email used to seed an empty store.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoUser {
    pub name: String,
    pub email: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(".comunidade/session.json"),
            catalog_path: None,
            geolocation_timeout: DEFAULT_GEOLOCATION_TIMEOUT,
            home_location: None,
            demo_user: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let geolocation_timeout = match var("GEOLOCATION_TIMEOUT_MS") {
            Some(raw) => Duration::from_millis(
                raw.parse()
                    .map_err(|_| ConfigError::Invalid("GEOLOCATION_TIMEOUT_MS", raw))?,
            ),
            None => defaults.geolocation_timeout,
        };

        let home_location = match (var("HOME_LAT"), var("HOME_LNG")) {
            (Some(lat), Some(lng)) => Some(Coordinate::new(
                lat.parse().map_err(|_| ConfigError::Invalid("HOME_LAT", lat))?,
                lng.parse().map_err(|_| ConfigError::Invalid("HOME_LNG", lng))?,
            )),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("HOME_LNG")),
            (None, Some(_)) => return Err(ConfigError::Missing("HOME_LAT")),
        };

        let demo_user = match (var("DEMO_NAME"), var("DEMO_EMAIL")) {
            (Some(name), Some(email)) => Some(DemoUser { name, email }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("DEMO_EMAIL")),
            (None, Some(_)) => return Err(ConfigError::Missing("DEMO_NAME")),
        };

        Ok(Self {
            store_path: var("STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.store_path),
            catalog_path: var("CATALOG_PATH").map(PathBuf::from),
            geolocation_timeout,
            home_location,
            demo_user,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).expect("Config should load");
        assert_eq!(config, Config::default());
        assert_eq!(config.geolocation_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_config_from_vars() {
        let config = config_from(&[
            ("STORE_PATH", "/tmp/session.json"),
            ("CATALOG_PATH", "data/businesses.geojson"),
            ("GEOLOCATION_TIMEOUT_MS", "2500"),
            ("HOME_LAT", "-22.9068"),
            ("HOME_LNG", "-43.1729"),
            ("DEMO_NAME", "Ana"),
            ("DEMO_EMAIL", "ana@x.com"),
        ])
        .expect("Config should load");

        assert_eq!(config.store_path, PathBuf::from("/tmp/session.json"));
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("data/businesses.geojson"))
        );
        assert_eq!(config.geolocation_timeout, Duration::from_millis(2500));
        assert_eq!(config.home_location, Some(Coordinate::new(-22.9068, -43.1729)));
        assert_eq!(config.demo_user.map(|d| d.email), Some("ana@x.com".to_string()));
    }

    #[test]
    fn test_half_configured_home_location() {
        assert_eq!(
            config_from(&[("HOME_LAT", "1.0")]),
            Err(ConfigError::Missing("HOME_LNG"))
        );
    }

    #[test]
    fn test_half_configured_demo_user() {
        assert_eq!(
            config_from(&[("DEMO_NAME", "Ana")]),
            Err(ConfigError::Missing("DEMO_EMAIL"))
        );
        assert_eq!(
            config_from(&[("DEMO_EMAIL", "ana@x.com")]),
            Err(ConfigError::Missing("DEMO_NAME"))
        );
    }

    #[test]
    fn test_invalid_timeout() {
        assert_eq!(
            config_from(&[("GEOLOCATION_TIMEOUT_MS", "soon")]),
            Err(ConfigError::Invalid("GEOLOCATION_TIMEOUT_MS", "soon".to_string()))
        );
    }
}
