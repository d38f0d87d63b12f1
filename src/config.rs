//! Runtime Configuration
//!
//! Settings are read once from environment variables at startup. Every key
//! has a default, so an empty environment yields a working configuration.

use std::time::Duration;
use thiserror::Error;

use crate::climate::Hemisphere;

pub const DEFAULT_GEOCODE_BASE_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_USER_AGENT: &str = concat!("enviro_sim/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_GEOCODE_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Options for the environmental predictor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PredictorConfig {
    /// Hemisphere used for season lookup. Locations are not inspected.
    pub hemisphere: Hemisphere,
}

/// Reverse-geocoding client settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GEOCODE_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_GEOCODE_TIMEOUT_SECS),
        }
    }
}

impl GeocodeConfig {
    /// Read `GEOCODE_BASE_URL`, `GEOCODE_USER_AGENT` and `GEOCODE_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, ConfigError> {
        let lookup = |key: &str| std::env::var(key).ok();
        Self::from_lookup(&lookup)
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = match lookup("GEOCODE_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "GEOCODE_TIMEOUT_SECS",
                value: raw,
            })?,
            None => DEFAULT_GEOCODE_TIMEOUT_SECS,
        };

        let base_url = lookup("GEOCODE_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_GEOCODE_BASE_URL.to_string());

        let user_agent = lookup("GEOCODE_USER_AGENT")
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        Ok(Self {
            base_url,
            user_agent,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Full server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub predictor: PredictorConfig,
    pub geocode: GeocodeConfig,
}

impl ServerConfig {
    /// Read from the process environment
    ///
    /// Keys: `PORT`, `HEMISPHERE`, `GEOCODE_BASE_URL`, `GEOCODE_USER_AGENT`,
    /// `GEOCODE_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let hemisphere = match lookup("HEMISPHERE") {
            Some(raw) => raw.parse()?,
            None => Hemisphere::default(),
        };

        Ok(Self {
            port,
            predictor: PredictorConfig { hemisphere },
            geocode: GeocodeConfig::from_lookup(&lookup)?,
        })
    }
}
