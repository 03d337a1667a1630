//! # Configuration State
//!
//! Configuration loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. `RUST_LOG` (log filter only, read by `init_tracing`)
//! 2. Environment variables (`COUPON_*`)
//! 3. Defaults (this file)
//!
//! Read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use serde::Serialize;

/// Default tracing filter when neither `RUST_LOG` nor `COUPON_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,coupon=debug";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Tracing filter directive, e.g. `info,coupon_store=debug`.
    pub log_filter: String,

    /// JSON file of coupon inputs to create at startup.
    pub seed_file: Option<PathBuf>,

    /// Pretty-print the JSON dump.
    pub pretty: bool,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            seed_file: None,
            pretty: true,
        }
    }
}

impl ConfigState {
    /// Loads configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `COUPON_LOG`: tracing filter
    /// - `COUPON_SEED_FILE`: path to a JSON seed file
    /// - `COUPON_PRETTY`: `true` / `false`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(filter) = lookup("COUPON_LOG") {
            config.log_filter = filter;
        }

        if let Some(path) = lookup("COUPON_SEED_FILE").filter(|p| !p.is_empty()) {
            config.seed_file = Some(PathBuf::from(path));
        }

        if let Some(pretty) = lookup("COUPON_PRETTY") {
            config.pretty = pretty
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("COUPON_PRETTY".to_string()))?;
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(config.pretty);
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("COUPON_LOG", "warn"),
            ("COUPON_SEED_FILE", "seed.json"),
            ("COUPON_PRETTY", "false"),
        ]))
        .unwrap();

        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.seed_file, Some(PathBuf::from("seed.json")));
        assert!(!config.pretty);
    }

    #[test]
    fn test_invalid_bool() {
        let err = ConfigState::from_lookup(lookup(&[("COUPON_PRETTY", "yes")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for COUPON_PRETTY");
    }
}
