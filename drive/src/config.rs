//! Backend origin configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when no override is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("API base URL is empty")]
    EmptyBaseUrl,
    #[error("API base URL must start with http:// or https://, got `{0}`")]
    InvalidScheme(String),
}

/// Typed client configuration. Every request path is appended to `base_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Validate and normalize a raw base URL.
    ///
    /// Surrounding whitespace and trailing slashes are removed so that
    /// `base_url + "/files/my-files"` never produces a double slash.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the value is empty or not an HTTP(S) URL.
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let base_url = raw.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidScheme(base_url.to_owned()));
        }
        Ok(Self { base_url: base_url.to_owned() })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}
