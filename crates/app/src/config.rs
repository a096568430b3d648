//! Client configuration.
//!
//! The API base location is fixed per deployment. The host serving the
//! client may override the default by emitting
//! `<meta name="techblog-api-url" content="…">` in `index.html`.

/// Base URL used when no override is provided.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// `name` of the `<meta>` element carrying the API base URL override.
pub const API_URL_META: &str = "techblog-api-url";

/// Settings the client needs at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Build a configuration for the given API base URL.
    ///
    /// Surrounding whitespace and trailing slashes are stripped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] unless `api_base_url` is an
    /// absolute `http://` or `https://` URL with a host.
    pub fn new(api_base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = api_base_url.trim().trim_end_matches('/');
        let host = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"));
        match host {
            Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(Self {
                api_base_url: trimmed.to_string(),
            }),
            _ => Err(ConfigError::InvalidApiUrl(api_base_url.to_string())),
        }
    }

    /// Build a configuration from an optional override, falling back to the
    /// default when the override is absent or invalid.
    #[must_use]
    pub fn from_override(api_base_url: Option<&str>) -> Self {
        match api_base_url.map(Self::new) {
            Some(Ok(config)) => config,
            Some(Err(err)) => {
                tracing::warn!(%err, "ignoring API URL override");
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// API base URL without a trailing slash.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The API base URL is not an absolute HTTP(S) URL.
    #[error("invalid API base URL `{0}`, expected http:// or https://")]
    InvalidApiUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_local_json_server() {
        assert_eq!(ClientConfig::default().api_base_url(), "http://localhost:3000");
    }

    #[test]
    fn should_strip_trailing_slashes() {
        let config = ClientConfig::new(" https://api.example.com/v1// ").unwrap();
        assert_eq!(config.api_base_url(), "https://api.example.com/v1");
    }

    #[test]
    fn should_reject_relative_or_schemeless_urls() {
        assert!(ClientConfig::new("/api").is_err());
        assert!(ClientConfig::new("localhost:3000").is_err());
        assert!(ClientConfig::new("http://").is_err());
        assert!(ClientConfig::new("ftp://example.com").is_err());
    }

    #[test]
    fn should_fall_back_to_default_when_override_is_invalid() {
        let config = ClientConfig::from_override(Some("nope"));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn should_use_valid_override() {
        let config = ClientConfig::from_override(Some("http://10.0.0.2:4000"));
        assert_eq!(config.api_base_url(), "http://10.0.0.2:4000");
    }
}
