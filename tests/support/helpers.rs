// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::util::ServiceExt as _;

use quill_core::application::RequestContext;
use quill_core::application::dto::{AuthenticatedUser, UserDto};
use quill_core::application::services::{ApplicationServices, Repositories};
use quill_core::infrastructure::util::DefaultSlugGenerator;
use quill_core::presentation::http::{routes::build_router, state::HttpState};

use super::builders::register_command;
use super::mocks::{DummyPasswordHasher, DummyTokenManager, InMemoryStore, TickingClock};

/// Application services wired to one shared in-memory store.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub store: Arc<InMemoryStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let repos = Repositories {
            users: store.clone(),
            article_writes: store.clone(),
            article_reads: store.clone(),
            comments: store.clone(),
            tags: store.clone(),
            favorites: store.clone(),
            follows: store.clone(),
        };

        let services = Arc::new(ApplicationServices::new(
            repos,
            Arc::new(DummyPasswordHasher),
            Arc::new(DummyTokenManager),
            Arc::new(TickingClock::default()),
            Arc::new(DefaultSlugGenerator),
        ));

        Self { services, store }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState::new(Arc::clone(&self.services), Duration::from_secs(5));
        build_router(state, &[])
    }

    /// Registers `username` and resolves its token into an actor.
    pub async fn register(&self, username: &str) -> (UserDto, AuthenticatedUser) {
        let user = self
            .services
            .user_commands
            .register(&ctx(), register_command(username))
            .await
            .expect("registration succeeds");
        let actor = self
            .services
            .token_manager()
            .authenticate(&user.token)
            .await
            .expect("issued token authenticates");
        (user, actor)
    }
}

pub fn ctx() -> RequestContext {
    RequestContext::background()
}

/// Sends one request through the router and decodes the JSON body
/// (`Value::Null` when the body is empty).
pub async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Token {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("valid request");

    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
