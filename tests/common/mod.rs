//! Shared utilities for integration tests: a programmable mock Gengo API.

#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use gengo_client::sign::{HmacSigner, Signer};
use gengo_client::{ClientConfig, GengoClient};

pub const PUBLIC_KEY: &str = "test-public";
pub const PRIVATE_KEY: &str = "test-private";

/// One request as the mock saw it.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub content_type: Option<String>,
    pub user_agent: Option<String>,
    pub accept: Option<String>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    /// Fields of a urlencoded form body.
    pub fn form(&self) -> Vec<(String, String)> {
        url::form_urlencoded::parse(&self.body).into_owned().collect()
    }

    /// First value of `name` in the query string or form body.
    pub fn field(&self, name: &str) -> Option<String> {
        let form = self.form();
        self.query
            .iter()
            .chain(form.iter())
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    /// The `data` form field parsed as JSON.
    pub fn data(&self) -> Value {
        let data = self.field("data").expect("request has no data field");
        serde_json::from_str(&data).expect("data field is not JSON")
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// True when `api_sig` is the HMAC of `ts` under the test private key.
    pub fn has_valid_signature(&self, fields: &[(String, String)]) -> bool {
        let get = |name: &str| fields.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone());
        match (get("api_key"), get("ts"), get("api_sig")) {
            (Some(key), Some(ts), Some(sig)) => {
                key == PUBLIC_KEY && HmacSigner::new(PRIVATE_KEY).sign(&ts) == sig
            }
            _ => false,
        }
    }
}

type Responder = Arc<dyn Fn(&CapturedRequest) -> (u16, String) + Send + Sync>;

#[derive(Clone)]
struct MockState {
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
    respond: Responder,
}

/// Handle to a running mock server.
pub struct MockGengo {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockGengo {
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }

    pub fn last(&self) -> CapturedRequest {
        self.requests().pop().expect("mock received no request")
    }

    /// A client for this mock with the test key pair.
    pub fn client(&self) -> GengoClient {
        let config = ClientConfig::new(PUBLIC_KEY, PRIVATE_KEY).with_base_url(self.base_url.clone());
        GengoClient::new(config).unwrap()
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let request = CapturedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: url::form_urlencoded::parse(uri.query().unwrap_or("").as_bytes())
            .into_owned()
            .collect(),
        content_type: header("content-type"),
        user_agent: header("user-agent"),
        accept: header("accept"),
        body: body.to_vec(),
    };

    let (status, body) = (state.respond)(&request);
    state.captured.lock().unwrap().push(request);
    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        body,
    )
}

/// Start a mock Gengo API on an ephemeral port. Every request is recorded
/// and answered by `respond`.
pub async fn start_mock_gengo<F>(respond: F) -> MockGengo
where
    F: Fn(&CapturedRequest) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let captured = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        captured: captured.clone(),
        respond: Arc::new(respond),
    };
    let app = Router::new().fallback(handle).with_state(state);

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockGengo {
        base_url: format!("http://{addr}/v2"),
        captured,
    }
}

/// `200` with an ok envelope around `payload`.
pub fn ok(payload: Value) -> (u16, String) {
    (200, json!({"opstat": "ok", "response": payload}).to_string())
}

/// `200` with an error envelope.
pub fn api_error(code: i64, msg: &str) -> (u16, String) {
    (200, json!({"opstat": "error", "err": {"code": code, "msg": msg}}).to_string())
}
