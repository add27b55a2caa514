//! Client configuration.

use url::Url;

/// The production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.vrchat.cloud/api/1";

/// Connection settings for a [`crate::Client`].
///
/// The defaults point at the production host; tests point `base_url` at a
/// local mock server instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL every operation path is appended to.
    pub base_url: Url,
    /// Value of the identifying `User-Agent` header. The API rejects
    /// requests without one.
    pub user_agent: String,
}

impl Config {
    /// Creates a configuration for the given base URL with the default
    /// user agent.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }
}

impl Default for Config {
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            user_agent: concat!("vrchat-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_default_points_at_production() {
        let config = Config::default();
        assert_eq!(config.base_url.as_str(), "https://api.vrchat.cloud/api/1");
        assert!(config.user_agent.starts_with("vrchat-rs/"));
    }

    #[test]
    fn test_config_new_keeps_default_user_agent() {
        let url = Url::parse("http://localhost:8080/").unwrap();
        let config = Config::new(url.clone());
        assert_eq!(config.base_url, url);
        assert_eq!(config.user_agent, Config::default().user_agent);
    }
}
