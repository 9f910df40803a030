//! Local stand-in for the API gateway used by command tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{self, Method, StatusCode, Uri, header};
use axum::response::Response;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use folio_core::{FolioConfig, GatewayConfig};
use folio_session::{LoginResponse, SessionStore};
use serde_json::{Value, json};

use super::Context;

#[derive(Clone, Default)]
struct StubState {
    routes: Arc<Mutex<HashMap<String, (StatusCode, String)>>>,
    requests: Arc<Mutex<Vec<String>>>,
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

    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        let body = if body.is_null() { String::new() } else { body.to_string() };
        self.state.routes.lock().unwrap().insert(
            format!("{method} {path}"),
            (StatusCode::from_u16(status).unwrap(), body),
        );
    }

    /// Requests received so far, as `"METHOD /path"`.
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn context(&self, session: SessionStore) -> Context {
        let config = FolioConfig {
            gateway: GatewayConfig::with_base_url(&self.base_url),
            ..FolioConfig::default()
        };
        Context::new(config, session).unwrap()
    }
}

async fn answer(State(state): State<StubState>, method: Method, uri: Uri) -> Response {
    let key = format!("{method} {}", uri.path());
    state.requests.lock().unwrap().push(key.clone());

    let (status, body) = state
        .routes
        .lock()
        .unwrap()
        .get(&key)
        .cloned()
        .unwrap_or((
            StatusCode::NOT_FOUND,
            json!({"message": "no stub for this route"}).to_string(),
        ));

    http::Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Unsigned three-segment token carrying `roles` and `user_id`.
pub fn token(roles: &[&str], user_id: i64) -> String {
    let payload = json!({"sub": "reader@example.com", "roles": roles, "userId": user_id});
    format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload.to_string()))
}

pub fn session_as(username: &str, roles: &[&str], user_id: i64) -> SessionStore {
    let session = SessionStore::new();
    session
        .set_auth_data(&LoginResponse::new(token(roles, user_id), username))
        .unwrap();
    session
}
