//! Shared helpers for integration tests: a wiremock server that answers
//! everything, and clients pointed at it.

#![allow(dead_code)]

use securitytrails_api_client::{ClientConfig, SecurityTrailsClient};
use serde_json::json;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Install a test-writer subscriber once; `RUST_LOG` overrides the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

/// Mock server answering every request with `{"success": true}`.
pub async fn catch_all_server() -> MockServer {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;
    server
}

/// Base URL mimicking the real `/v1` prefix.
pub fn host(server: &MockServer) -> String {
    format!("{}/v1", server.uri())
}

/// Client for `server` authenticated with `key`.
pub fn client(server: &MockServer, key: &str) -> SecurityTrailsClient {
    SecurityTrailsClient::with_config(ClientConfig::new(key).with_host(host(server)))
        .expect("client should build")
}

/// Client for `server` with no API key configured.
pub fn anonymous_client(server: &MockServer) -> SecurityTrailsClient {
    SecurityTrailsClient::with_config(ClientConfig::default().with_host(host(server)))
        .expect("client should build")
}

/// The only request the server received.
pub async fn single_request(server: &MockServer) -> wiremock::Request {
    let mut requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}

/// Path plus `?query` of a recorded request.
pub fn path_and_query(request: &wiremock::Request) -> String {
    match request.url.query() {
        Some(q) => format!("{}?{q}", request.url.path()),
        None => request.url.path().to_string(),
    }
}

/// Header value of a recorded request as text.
pub fn header<'a>(request: &'a wiremock::Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|v| v.to_str().ok())
}
