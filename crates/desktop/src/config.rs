//! Client configuration from the environment.

pub const API_URL_VAR: &str = "STOCKROOM_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api/items";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}={value:?}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopConfig {
    /// Items collection endpoint, without a trailing `/`.
    pub api_url: String,
}

impl DesktopConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let url = reqwest::Url::parse(raw.trim()).map_err(|e| ConfigError {
            var: API_URL_VAR,
            value: raw.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError {
                var: API_URL_VAR,
                value: raw,
                reason: "expected an http(s) url".to_string(),
            });
        }

        Ok(Self {
            api_url: url.as_str().trim_end_matches('/').to_string(),
        })
    }
}
