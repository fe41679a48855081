//! Player configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8001";
pub const DEFAULT_ROLL_DELAY_MS: u64 = 1000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SHINOBI_API_URL is not a valid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("{key} must be a non-negative integer, got {value}")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Base URL of the engine; `/api/..` paths are joined onto it
    pub api_url: Url,
    /// Artificial pause before an attribute roll resolves
    pub roll_delay: Duration,
    pub request_timeout: Duration,
}

impl PlayerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("SHINOBI_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let roll_delay_ms = number(&lookup, "SHINOBI_ROLL_DELAY_MS", DEFAULT_ROLL_DELAY_MS)?;
        let timeout_secs = number(
            &lookup,
            "SHINOBI_REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;

        Ok(Self {
            api_url: Url::parse(api_url.trim())?,
            roll_delay: Duration::from_millis(roll_delay_ms),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn number(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: u64,
) -> Result<u64, ConfigError> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = PlayerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.api_url.as_str(), "http://localhost:8001/");
        assert_eq!(config.roll_delay, Duration::from_millis(1000));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn values_are_read_from_lookup() {
        let config = PlayerConfig::from_lookup(|key| match key {
            "SHINOBI_API_URL" => Some("https://ninja.example/".to_string()),
            "SHINOBI_ROLL_DELAY_MS" => Some("0".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.api_url.host_str(), Some("ninja.example"));
        assert_eq!(config.roll_delay, Duration::ZERO);
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(PlayerConfig::from_lookup(|key| (key == "SHINOBI_API_URL")
            .then(|| "not a url".to_string()))
        .is_err());
        assert!(matches!(
            PlayerConfig::from_lookup(|key| (key == "SHINOBI_ROLL_DELAY_MS")
                .then(|| "soon".to_string())),
            Err(ConfigError::InvalidNumber { .. })
        ));
    }
}
