//! Stub API gateway for client integration tests.
//!
//! Serves canned answers keyed by `"METHOD /path"` on an ephemeral local
//! port and records every request it receives.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{self, HeaderMap, Method, StatusCode, Uri, header};
use axum::response::Response;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use folio_client::ApiClient;
use folio_session::{LoginResponse, SessionStore};
use serde_json::{Value, json};

/// A request as seen by the stub.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
struct Canned {
    status: StatusCode,
    body: String,
    location: Option<String>,
}

#[derive(Clone, Default)]
struct StubState {
    routes: Arc<Mutex<HashMap<String, Canned>>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

pub struct StubGateway {
    pub base_url: String,
    state: StubState,
}

impl StubGateway {
    pub async fn start() -> Self {
        let state = StubState::default();
        let app = Router::new().fallback(answer).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Answer `method path` with `status` and a JSON body.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.insert(method, path, status, body.to_string(), None);
    }

    /// Answer with an empty body.
    pub fn respond_empty(&self, method: &str, path: &str, status: u16) {
        self.insert(method, path, status, String::new(), None);
    }

    pub fn redirect(&self, method: &str, path: &str, status: u16, location: &str) {
        self.insert(method, path, status, String::new(), Some(location.to_string()));
    }

    fn insert(&self, method: &str, path: &str, status: u16, body: String, location: Option<String>) {
        let canned = Canned {
            status: StatusCode::from_u16(status).unwrap(),
            body,
            location,
        };
        self.state
            .routes
            .lock()
            .unwrap()
            .insert(format!("{method} {path}"), canned);
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("no request reached the stub")
    }

    pub fn client(&self, session: &SessionStore) -> ApiClient {
        ApiClient::with_base_url(&self.base_url, session.clone()).unwrap()
    }
}

async fn answer(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    });

    let canned = state
        .routes
        .lock()
        .unwrap()
        .get(&format!("{method} {path}"))
        .cloned()
        .unwrap_or(Canned {
            status: StatusCode::NOT_FOUND,
            body: json!({"message": "no stub for this route"}).to_string(),
            location: None,
        });

    let mut builder = http::Response::builder()
        .status(canned.status)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(location) = canned.location {
        builder = builder.header(header::LOCATION, location);
    }
    builder.body(Body::from(canned.body)).unwrap()
}

/// Unsigned three-segment token carrying `roles` and `user_id`.
pub fn token(roles: &[&str], user_id: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = json!({
        "sub": "reader@example.com",
        "roles": roles,
        "userId": user_id,
        "iat": 1_700_000_000,
        "exp": 4_000_000_000u64,
    });
    let payload = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{payload}.signature")
}

/// Session already holding a token with the given roles.
pub fn session_with(roles: &[&str]) -> SessionStore {
    let session = SessionStore::new();
    session
        .set_auth_data(&LoginResponse::new(token(roles, 7), "reader"))
        .unwrap();
    session
}
