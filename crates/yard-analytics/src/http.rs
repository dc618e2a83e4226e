//! Response status handling for analytics requests.

use crate::error::AnalyticsError;

/// Returns the response unchanged on success.
///
/// - **429** → [`AnalyticsError::RateLimited`], honouring `Retry-After`
///   (falls back to 60 s if absent or unparseable).
/// - **Other non-success** → [`AnalyticsError::Api`] with the response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, AnalyticsError> {
    if resp.status() == 429 {
        return Err(AnalyticsError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        return Err(AnalyticsError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(60)
}
