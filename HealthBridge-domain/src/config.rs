use std::env;

use thiserror::Error;
use tracing::info;

use crate::mapper::DEFAULT_FETCH_CONCURRENCY;
use crate::platform::Platform;

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// HEALTH_PLATFORM is not ios, android or auto
    #[error("Invalid HEALTH_PLATFORM: {0}")]
    InvalidPlatform(String),

    /// HEALTH_FETCH_CONCURRENCY is not a positive integer
    #[error("Invalid HEALTH_FETCH_CONCURRENCY: {0}")]
    InvalidConcurrency(String),
}

/// Gateway configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    /// Platform override; `None` uses the platform the binary runs on
    pub platform: Option<Platform>,
    /// Maximum number of fields fetched at once
    pub fetch_concurrency: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            platform: None,
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
        }
    }
}

impl GatewayConfig {
    /// Read the configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Read the configuration through `lookup`
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let platform = match lookup("HEALTH_PLATFORM") {
            None => None,
            Some(value) if value.trim().eq_ignore_ascii_case("auto") || value.trim().is_empty() => None,
            Some(value) => Some(value.parse::<Platform>().map_err(|_| ConfigError::InvalidPlatform(value))?),
        };

        let fetch_concurrency = match lookup("HEALTH_FETCH_CONCURRENCY") {
            None => DEFAULT_FETCH_CONCURRENCY,
            Some(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidConcurrency(value)),
            },
        };

        let config = GatewayConfig { platform, fetch_concurrency };
        info!(
            "Gateway configuration: platform={}, fetch_concurrency={}",
            config.platform().as_str(),
            config.fetch_concurrency
        );
        Ok(config)
    }

    /// The platform to serve
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config, GatewayConfig::default());
        assert_eq!(config.platform(), Platform::current());
    }

    #[test]
    fn test_platform_override() {
        let config = GatewayConfig::from_vars(vars(&[("HEALTH_PLATFORM", "android")])).unwrap();
        assert_eq!(config.platform(), Platform::Android);

        let auto = GatewayConfig::from_vars(vars(&[("HEALTH_PLATFORM", "auto")])).unwrap();
        assert_eq!(auto.platform, None);

        assert_eq!(
            GatewayConfig::from_vars(vars(&[("HEALTH_PLATFORM", "symbian")])),
            Err(ConfigError::InvalidPlatform("symbian".to_string()))
        );
    }

    #[test]
    fn test_fetch_concurrency() {
        let config = GatewayConfig::from_vars(vars(&[("HEALTH_FETCH_CONCURRENCY", "3")])).unwrap();
        assert_eq!(config.fetch_concurrency, 3);

        assert!(GatewayConfig::from_vars(vars(&[("HEALTH_FETCH_CONCURRENCY", "0")])).is_err());
        assert!(GatewayConfig::from_vars(vars(&[("HEALTH_FETCH_CONCURRENCY", "many")])).is_err());
    }
}
