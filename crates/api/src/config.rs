//! Server configuration from the environment.

use std::net::SocketAddr;

use stockroom_infra::{ConfigError, StoreConfig};

pub const BIND_ADDR_VAR: &str = "STOCKROOM_BIND_ADDR";
pub const BASE_PATH_VAR: &str = "STOCKROOM_BASE_PATH";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
pub const DEFAULT_BASE_PATH: &str = "/api/items";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Mount point of the item routes, normalized: leading `/`, no trailing `/`.
    /// Empty means the routes are served from the root.
    pub base_path: String,
    pub store: StoreConfig,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::invalid(BIND_ADDR_VAR, bind_addr.clone(), "expected host:port"))?;

        let base_path = match lookup(BASE_PATH_VAR) {
            Some(v) => normalize_base_path(&v)?,
            None => DEFAULT_BASE_PATH.to_string(),
        };

        Ok(Self {
            bind_addr,
            base_path,
            store: StoreConfig::from_lookup(&lookup)?,
        })
    }
}

pub fn normalize_base_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if !trimmed.starts_with('/') {
        return Err(ConfigError::invalid(BASE_PATH_VAR, raw, "must start with '/'"));
    }
    if trimmed.contains(':') || trimmed.contains('*') {
        return Err(ConfigError::invalid(BASE_PATH_VAR, raw, "must not contain route parameters"));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
