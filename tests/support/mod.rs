//! Stub Jupiter endpoints for integration tests.
//!
//! An axum router answers every request with a canned response looked up by
//! (method, path) and records what it received, so tests can assert on what
//! was (or was not) sent.
#![allow(dead_code)]

use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use jupiter_gateway::{GatewayConfig, JupiterGateway};
use reqwest::Url;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Query string exactly as it arrived on the wire.
    pub query: String,
    pub body: String,
}

impl RecordedRequest {
    /// Decoded value of a query parameter.
    pub fn query_param(&self, key: &str) -> Option<String> {
        let url = Url::parse(&format!("http://stub/?{}", self.query)).ok()?;
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

struct StubState {
    routes: HashMap<(String, String), (u16, String)>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct StubServer {
    pub base_url: String,
    state: Arc<StubState>,
}

impl StubServer {
    pub async fn spawn(routes: Vec<(&str, &str, u16, String)>) -> Self {
        let state = Arc::new(StubState {
            routes: routes
                .into_iter()
                .map(|(method, path, status, body)| ((method.to_string(), path.to_string()), (status, body)))
                .collect(),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(respond).with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub server");
        let addr = listener.local_addr().expect("stub server address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    /// Config with every endpoint pointed at this server.
    pub fn config(&self) -> GatewayConfig {
        GatewayConfig {
            price_api_url: self.base_url.clone(),
            token_api_url: self.base_url.clone(),
            quote_api_url: format!("{}/v4", self.base_url),
            request_timeout_secs: None,
        }
    }

    pub fn gateway(&self) -> JupiterGateway {
        let http = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        JupiterGateway::with_http_client(self.config(), http)
    }
}

async fn respond(State(state): State<Arc<StubState>>, method: Method, uri: Uri, body: String) -> Response {
    let method = method.to_string();
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().unwrap_or_default().to_string(),
        body,
    });

    let (status, payload) = state
        .routes
        .get(&(method, path))
        .cloned()
        .unwrap_or((404, r#"{"error":"not found"}"#.to_string()));
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], payload).into_response()
}
