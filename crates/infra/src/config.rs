//! Configuration loading and representation.
//!
//! Values come from environment variables. Parsing goes through a lookup function so
//! tests can supply their own map instead of mutating the process environment.

use thiserror::Error;

pub const STORE_VAR: &str = "STOCKROOM_STORE";
pub const DATABASE_URL_VAR: &str = "STOCKROOM_DATABASE_URL";
pub const SEED_VAR: &str = "STOCKROOM_SEED_SAMPLE_DATA";

pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl ConfigError {
    pub fn invalid(var: &'static str, value: impl Into<String>, reason: &'static str) -> Self {
        Self::Invalid {
            var,
            value: value.into(),
            reason,
        }
    }
}

/// Which `ItemStore` implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Sqlite,
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Sqlite => "sqlite",
            StoreBackend::Memory => "memory",
        }
    }
}

impl core::str::FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(StoreBackend::Sqlite),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            _ => Err(ConfigError::invalid(STORE_VAR, s, "expected one of: sqlite, memory")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Only used by the SQLite backend.
    pub database_url: String,
    /// Insert the sample catalogue on startup.
    pub seed_sample_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Sqlite,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            seed_sample_data: true,
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let backend = match lookup(STORE_VAR) {
            Some(v) => v.parse()?,
            None => defaults.backend,
        };
        let database_url = lookup(DATABASE_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.database_url);
        let seed_sample_data = match lookup(SEED_VAR) {
            Some(v) => parse_bool(SEED_VAR, &v)?,
            None => defaults.seed_sample_data,
        };

        Ok(Self {
            backend,
            database_url,
            seed_sample_data,
        })
    }
}

/// Accepts the usual spellings of a boolean flag.
pub fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(var, value, "expected a boolean")),
    }
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
    fn defaults_to_seeded_in_memory_sqlite() {
        let cfg = StoreConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, StoreConfig::default());
        assert_eq!(cfg.backend, StoreBackend::Sqlite);
        assert_eq!(cfg.database_url, "sqlite::memory:");
        assert!(cfg.seed_sample_data);
    }

    #[test]
    fn reads_overrides() {
        let cfg = StoreConfig::from_lookup(lookup(&[
            (STORE_VAR, "Memory"),
            (DATABASE_URL_VAR, "sqlite://inventory.db"),
            (SEED_VAR, "off"),
        ]))
        .unwrap();
        assert_eq!(cfg.backend, StoreBackend::Memory);
        assert_eq!(cfg.database_url, "sqlite://inventory.db");
        assert!(!cfg.seed_sample_data);
    }

    #[test]
    fn rejects_unknown_backend_and_bad_flag() {
        let err = StoreConfig::from_lookup(lookup(&[(STORE_VAR, "postgres")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: STORE_VAR, .. }));

        let err = StoreConfig::from_lookup(lookup(&[(SEED_VAR, "maybe")])).unwrap_err();
        assert!(err.to_string().contains(SEED_VAR));
    }
}
