//! Client behaviour against a local HTTP server.

use std::sync::mpsc;
use std::thread;

use pretty_assertions::assert_eq;
use yard_analytics::{AnalyticsClient, AnalyticsError, AnalyticsQuery};
use yard_config::AnalyticsConfig;

const FIXTURE: &str = r##"{
    "analytics": [
        {"period": "2026-10-14", "requests": 120, "tokens": 48000, "cost": 1.25, "latency": 420.5, "errors": 2},
        {"period": "2026-10-15", "projectId": "p1", "requests": 80, "tokens": 30000, "cost": 0.75, "latency": 380.0, "errors": 0}
    ],
    "providers": [
        {"provider": "openai", "requests": 150, "cost": 1.5, "color": "#10a37f"},
        {"provider": "anthropic", "requests": 50, "cost": 0.5, "color": "#d97757"}
    ],
    "models": [
        {"model": "gpt-4o", "requests": 150, "tokens": 60000, "cost": 1.5, "avgLatency": 410.0}
    ],
    "projects": [
        {"id": "p1", "name": "Checkout"}
    ]
}"##;

/// What the server saw.
struct Seen {
    url: String,
    authorization: Option<String>,
}

/// Serve exactly one request with `status`, `headers` and `body`.
fn serve_once(
    status: u16,
    headers: &'static [(&'static str, &'static str)],
    body: &'static str,
) -> (String, mpsc::Receiver<Seen>) {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let request = server.recv().unwrap();
        let authorization = request
            .headers()
            .iter()
            .find(|h| h.field.equiv("Authorization"))
            .map(|h| h.value.to_string());
        tx.send(Seen {
            url: request.url().to_string(),
            authorization,
        })
        .unwrap();

        let mut response = tiny_http::Response::from_string(body).with_status_code(status);
        for (name, value) in headers {
            response.add_header(tiny_http::Header::from_bytes(*name, *value).unwrap());
        }
        request.respond(response).unwrap();
    });

    (format!("http://127.0.0.1:{port}"), rx)
}

#[tokio::test]
async fn fetches_and_decodes_analytics_bundle() {
    let (base_url, seen) = serve_once(200, &[("Content-Type", "application/json")], FIXTURE);
    let client = AnalyticsClient::new(base_url).unwrap();

    let data = client
        .get_analytics_data(&AnalyticsQuery::new("7d", "p1"))
        .await
        .unwrap();

    let seen = seen.recv().unwrap();
    assert_eq!(seen.url, "/_api/analytics?timeRange=7d&project=p1");
    assert_eq!(seen.authorization, None);

    assert_eq!(data.analytics.len(), 2);
    assert_eq!(data.analytics[1].project_id.as_deref(), Some("p1"));
    assert_eq!(data.providers[1].provider, "anthropic");
    assert_eq!(data.models[0].avg_latency, 410.0);
    assert_eq!(data.total_requests(), 200.0);
    assert_eq!(data.project_name("p1"), Some("Checkout"));
}

#[tokio::test]
async fn sends_bearer_token_from_config() {
    let (base_url, seen) = serve_once(200, &[], FIXTURE);
    let config = AnalyticsConfig {
        base_url,
        api_token: "tok_123".into(),
        timeout_secs: Some(10),
    };
    let client = AnalyticsClient::from_config(&config).unwrap();

    client
        .get_analytics_data(&AnalyticsQuery::new("24h", "all"))
        .await
        .unwrap();

    let seen = seen.recv().unwrap();
    assert_eq!(seen.authorization.as_deref(), Some("Bearer tok_123"));
}

#[tokio::test]
async fn non_success_status_is_an_api_error() {
    let (base_url, _seen) = serve_once(403, &[], "forbidden");
    let client = AnalyticsClient::new(base_url).unwrap();

    let err = client
        .get_analytics_data(&AnalyticsQuery::new("7d", "p1"))
        .await
        .unwrap_err();

    let AnalyticsError::Api { status, message } = err else {
        panic!("expected api error, got {err:?}");
    };
    assert_eq!(status, 403);
    assert_eq!(message, "forbidden");
}

#[tokio::test]
async fn rate_limit_reports_retry_after() {
    let (base_url, _seen) = serve_once(429, &[("Retry-After", "15")], "");
    let client = AnalyticsClient::new(base_url).unwrap();

    let err = client
        .get_analytics_data(&AnalyticsQuery::new("7d", "p1"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AnalyticsError::RateLimited {
            retry_after_secs: 15
        }
    ));
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let (base_url, _seen) = serve_once(200, &[], r#"{"analytics": "nope"}"#);
    let client = AnalyticsClient::new(base_url).unwrap();

    let err = client
        .get_analytics_data(&AnalyticsQuery::new("7d", "p1"))
        .await
        .unwrap_err();

    assert!(matches!(err, AnalyticsError::Parse(_)), "{err}");
}
