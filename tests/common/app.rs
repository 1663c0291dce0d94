#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use wiremock::MockServer;

use gingr_dashboard::AppState;
use gingr_dashboard::config::Config;
use gingr_dashboard::server;

pub const TEST_API_KEY: &str = "test-api-key";

/// The dashboard router wired to a mock Gingr server.
pub struct TestApp {
    pub router: Router,
    pub gingr: MockServer,
}

impl TestApp {
    pub async fn new() -> Self {
        let gingr = MockServer::start().await;
        let router = router_for(&gingr.uri());
        Self { router, gingr }
    }

    /// Point the router somewhere that refuses connections.
    pub async fn unreachable() -> Self {
        let gingr = MockServer::start().await;
        let router = router_for("http://127.0.0.1:9");
        Self { router, gingr }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let resp = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = resp.status();
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    pub async fn requests(&self) -> Vec<wiremock::Request> {
        self.gingr.received_requests().await.unwrap_or_default()
    }
}

fn router_for(base_url: &str) -> Router {
    let config = Config {
        host: "127.0.0.1".into(),
        port: 0,
        gingr_base_url: base_url.into(),
        gingr_api_key: TEST_API_KEY.into(),
    };
    server::router(AppState::new(config, reqwest::Client::new()))
}

/// All values of a repeated query parameter.
pub fn query_values(req: &wiremock::Request, name: &str) -> Vec<String> {
    req.url
        .query_pairs()
        .filter(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
        .collect()
}

pub fn body_text(req: &wiremock::Request) -> String {
    String::from_utf8_lossy(&req.body).into_owned()
}
