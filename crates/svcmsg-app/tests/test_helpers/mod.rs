#![allow(dead_code)]

//! Shared fixtures: an in-process stand-in for the LINE API and app wiring.

use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use url::Url;

use svcmsg_infrastructure::config::{StaticChannelConfigSource, TimeoutConfig};
use svcmsg_infrastructure::http::LineApiClient;
use svcmsg_lib::{build_router, AppState};

pub const TOKEN_PATH: &str = "/oauth2/v3/token";
pub const NOTIFIER_TOKEN_PATH: &str = "/message/v3/notifier/token";
pub const NOTIFIER_SEND_PATH: &str = "/message/v3/notifier/send";

/// One request received by the stub
#[derive(Debug, Clone)]
pub struct StubCall {
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

impl StubCall {
    pub fn json_body(&self) -> Value {
        serde_json::from_str(&self.body).expect("stub call body should be JSON")
    }
}

/// Scripted reply for one LINE endpoint
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Value,
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn status(status: u16, body: Value) -> Self {
        Self {
            status: StatusCode::from_u16(status).expect("valid status"),
            body,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Replies {
    pub token: Reply,
    pub notifier_token: Reply,
    pub send: Reply,
}

impl Default for Replies {
    fn default() -> Self {
        Self {
            token: Reply::ok(json!({"access_token": "svc-tok", "expires_in": 900, "token_type": "Bearer"})),
            notifier_token: Reply::ok(json!({"notificationToken": "ntf-1", "expiresIn": 31536000, "remainingCount": 5, "sessionId": "sess-1"})),
            send: Reply::ok(json!({"remainingCount": 5, "notificationToken": "ntf-1"})),
        }
    }
}

#[derive(Clone)]
struct StubState {
    replies: Replies,
    calls: Arc<Mutex<Vec<StubCall>>>,
}

/// Running stand-in for api.line.me
pub struct LineStub {
    pub base_url: Url,
    calls: Arc<Mutex<Vec<StubCall>>>,
}

impl LineStub {
    pub async fn start(replies: Replies) -> Self {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            replies,
            calls: calls.clone(),
        };

        let app = Router::new()
            .route(TOKEN_PATH, post(handle_token))
            .route(NOTIFIER_TOKEN_PATH, post(handle_notifier_token))
            .route(NOTIFIER_SEND_PATH, post(handle_send))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: Url::parse(&format!("http://{}", addr)).unwrap(),
            calls,
        }
    }

    pub fn calls(&self) -> Vec<StubCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, path: &str) -> Vec<StubCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.path == path)
            .collect()
    }

    pub fn client(&self) -> LineApiClient {
        LineApiClient::with_base_url(self.base_url.clone(), TimeoutConfig::global()).unwrap()
    }
}

async fn handle_token(
    State(state): State<StubState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let reply = state.replies.token.clone();
    record(&state, TOKEN_PATH, None, &headers, &body);
    (reply.status, axum::Json(reply.body))
}

async fn handle_notifier_token(
    State(state): State<StubState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let reply = state.replies.notifier_token.clone();
    record(&state, NOTIFIER_TOKEN_PATH, None, &headers, &body);
    (reply.status, axum::Json(reply.body))
}

async fn handle_send(
    State(state): State<StubState>,
    uri: axum::http::Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let reply = state.replies.send.clone();
    record(
        &state,
        NOTIFIER_SEND_PATH,
        uri.query().map(str::to_string),
        &headers,
        &body,
    );
    (reply.status, axum::Json(reply.body))
}

fn record(state: &StubState, path: &str, query: Option<String>, headers: &HeaderMap, body: &Bytes) {
    state.calls.lock().unwrap().push(StubCall {
        path: path.to_string(),
        query,
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(body).to_string(),
    });
}

pub fn full_config() -> StaticChannelConfigSource {
    StaticChannelConfigSource::new("1657000000", "channel-secret", "reservation_confirm_en")
}

/// App router wired to the stub with the given channel configuration
pub fn app(stub: &LineStub, config: StaticChannelConfigSource) -> Router {
    let state = AppState::new(Arc::new(stub.client()), Arc::new(config), Some("1657000000-AbCdEfGh"));
    build_router(state)
}

/// Serve the app on an ephemeral port, for tests that need a real socket
pub async fn serve_app(router: Router) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{}", addr)).unwrap()
}
