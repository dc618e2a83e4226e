//! Analytics client error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// The response body was not a valid analytics bundle.
    #[error("parse error: {0}")]
    Parse(String),

    /// The backend returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error(transparent)]
    Config(#[from] yard_config::ConfigError),
}
