//! Analytics backend configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnalyticsConfig {
    /// Backend origin, e.g. `https://console.example.com`. The read endpoint
    /// path is appended by the client.
    #[serde(default)]
    pub base_url: String,

    /// Optional bearer token sent with every request.
    #[serde(default)]
    pub api_token: String,

    /// Request timeout. Unset means the transport default applies.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl AnalyticsConfig {
    /// Check if the analytics config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }

    /// Return `self` if configured, otherwise a [`ConfigError::NotConfigured`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when `base_url` is empty, and
    /// [`ConfigError::InvalidValue`] when it lacks an `http(s)://` scheme.
    pub fn require(&self) -> Result<&Self, ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "analytics",
                key: "base_url",
                env: "YARD_ANALYTICS__BASE_URL",
            });
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "analytics.base_url",
                reason: format!("expected an http(s) URL, got '{}'", self.base_url),
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = AnalyticsConfig::default();
        assert!(!config.is_configured());
        assert!(config.timeout_secs.is_none());
        assert!(matches!(
            config.require(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }

    #[test]
    fn missing_base_url_names_env_override() {
        let err = AnalyticsConfig::default().require().unwrap_err();
        assert_eq!(
            err.to_string(),
            "[analytics] base_url is not set (add it to .switchyard/config.toml or export YARD_ANALYTICS__BASE_URL)"
        );
    }

    #[test]
    fn require_rejects_missing_scheme() {
        let config = AnalyticsConfig {
            base_url: "console.example.com".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.require(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn require_accepts_https_url() {
        let config = AnalyticsConfig {
            base_url: "https://console.example.com".into(),
            ..Default::default()
        };
        assert!(config.require().is_ok());
    }
}
