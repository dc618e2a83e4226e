//! # yard-analytics
//!
//! Read-only client for the usage analytics endpoint.
//!
//! One request, one typed response: `GET {base_url}/_api/analytics` with
//! `timeRange` and `project` query parameters, decoded into an
//! [`AnalyticsDataResponse`]. There is no caching, retrying, or client-side
//! pagination.

mod error;
mod http;

pub use error::AnalyticsError;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use yard_config::AnalyticsConfig;
use yard_core::entities::AnalyticsDataResponse;

use crate::http::check_response;

/// Path of the analytics read endpoint, relative to the backend origin.
pub const ANALYTICS_PATH: &str = "/_api/analytics";

/// Parameters of one analytics read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsQuery {
    /// Backend-defined range label (`24h`, `7d`, `30d`, ...).
    pub time_range: String,
    /// Project id, or the backend's "all projects" value.
    pub project: String,
}

impl AnalyticsQuery {
    pub fn new(time_range: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            time_range: time_range.into(),
            project: project.into(),
        }
    }
}

/// HTTP client for the analytics backend.
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    http: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl AnalyticsClient {
    /// Create a client for `base_url` with transport defaults (no timeout,
    /// no authentication).
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, AnalyticsError> {
        Self::build(base_url.into(), None, None)
    }

    /// Create a client from the `[analytics]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Config`] if the section is missing or its
    /// base URL is not http(s), and [`AnalyticsError::Http`] if the client
    /// cannot be built.
    pub fn from_config(config: &AnalyticsConfig) -> Result<Self, AnalyticsError> {
        let config = config.require()?;
        let token = (!config.api_token.is_empty()).then(|| config.api_token.clone());
        Self::build(
            config.base_url.clone(),
            token,
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    fn build(
        base_url: String,
        api_token: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, AnalyticsError> {
        let mut builder = reqwest::Client::builder().user_agent("switchyard/0.1");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for `query`.
    #[must_use]
    pub fn analytics_url(&self, query: &AnalyticsQuery) -> String {
        format!(
            "{}{ANALYTICS_PATH}?timeRange={}&project={}",
            self.base_url,
            urlencoding::encode(&query.time_range),
            urlencoding::encode(&query.project),
        )
    }

    /// Fetch aggregated analytics for a time range and project.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError`] if the request fails, the backend returns a
    /// non-success status, or the body is not a valid analytics bundle.
    pub async fn get_analytics_data(
        &self,
        query: &AnalyticsQuery,
    ) -> Result<AnalyticsDataResponse, AnalyticsError> {
        let url = self.analytics_url(query);
        tracing::debug!(%url, "fetching analytics");

        let mut request = self.http.get(&url);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }
        let resp = check_response(request.send().await?).await?;

        let body = resp.text().await?;
        let data: AnalyticsDataResponse =
            serde_json::from_str(&body).map_err(|e| AnalyticsError::Parse(e.to_string()))?;
        tracing::debug!(
            rows = data.analytics.len(),
            providers = data.providers.len(),
            models = data.models.len(),
            "analytics received"
        );
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn url_encodes_query_parameters() {
        let client = AnalyticsClient::new("https://console.example.com/").unwrap();
        let url = client.analytics_url(&AnalyticsQuery::new("7d", "proj 1&x"));
        assert_eq!(
            url,
            "https://console.example.com/_api/analytics?timeRange=7d&project=proj%201%26x"
        );
    }

    #[test]
    fn from_config_requires_base_url() {
        let err = AnalyticsClient::from_config(&AnalyticsConfig::default()).unwrap_err();
        assert!(matches!(err, AnalyticsError::Config(_)), "{err}");
    }

    #[test]
    fn from_config_rejects_non_http_url() {
        let config = AnalyticsConfig {
            base_url: "console.example.com".into(),
            ..AnalyticsConfig::default()
        };
        assert!(AnalyticsClient::from_config(&config).is_err());
    }

    #[test]
    fn from_config_keeps_token() {
        let config = AnalyticsConfig {
            base_url: "http://localhost:3000".into(),
            api_token: "secret".into(),
            timeout_secs: Some(5),
        };
        let client = AnalyticsClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.api_token.as_deref(), Some("secret"));
    }

    #[test]
    fn query_serializes_with_wire_names() {
        let json = serde_json::to_value(AnalyticsQuery::new("30d", "all")).unwrap();
        assert_eq!(json, serde_json::json!({"timeRange": "30d", "project": "all"}));
    }
}
