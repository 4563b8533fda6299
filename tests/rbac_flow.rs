//! End-to-end behavior of the RBAC gate: a protected operation only ever
//! runs for callers the gate admits, and every denial maps to the right
//! status before the handler is reached.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    routing::get,
};
use tower::ServiceExt;

use demo_api::api::extractors::AuthCtxExtractor;
use demo_api::app::build_router;
use demo_api::auth::gate::RequiredRoles;
use demo_api::auth::identity::StaticIdentityStore;
use demo_api::middleware::require_role;
use demo_api::state::AppState;

fn test_state() -> AppState {
    AppState::new(Arc::new(StaticIdentityStore::demo()), "test-api-key")
}

fn compute_request(auth_header: Option<&str>) -> Request<Body> {
    let builder = Request::builder()
        .method("POST")
        .uri("/compute")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");

    let builder = match auth_header {
        Some(value) => builder.header(header::AUTHORIZATION, value),
        None => builder,
    };

    builder
        .body(Body::from("number1=10&operator=%2B&number2=5"))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn user_role_may_compute() {
    let app = build_router(test_state());

    let response = app
        .oneshot(compute_request(Some("Bearer token-user")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("<strong>15</strong>"), "body: {body}");
}

#[tokio::test]
async fn admin_without_user_role_gets_403() {
    let app = build_router(test_state());

    let response = app
        .oneshot(compute_request(Some("Bearer token-admin")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_string(response).await;
    assert!(body.contains("Insufficient permissions"), "body: {body}");
}

#[tokio::test]
async fn basic_scheme_gets_401() {
    let app = build_router(test_state());

    let response = app
        .oneshot(compute_request(Some("Basic abcdef")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_string(response).await;
    assert!(
        body.contains("Missing or invalid Authorization header"),
        "body: {body}"
    );
}

#[tokio::test]
async fn missing_header_gets_401() {
    let app = build_router(test_state());

    let response = app.oneshot(compute_request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_token_gets_401() {
    let app = build_router(test_state());

    let response = app
        .oneshot(compute_request(Some("Bearer token-ghost")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_string(response).await;
    assert!(body.contains("Invalid access token"), "body: {body}");
}

/// protect() composes around any handler; count invocations to show denied
/// requests never reach the operation and admitted ones reach it exactly once.
#[tokio::test]
async fn operation_runs_only_for_admitted_requests() {
    let hits = Arc::new(AtomicUsize::new(0));
    let state = test_state();

    let h = hits.clone();
    let inner = Router::new().route(
        "/op",
        get(move || {
            let h = h.clone();
            async move {
                h.fetch_add(1, Ordering::SeqCst);
                "ok"
            }
        }),
    );
    let app = require_role::protect(inner, state.clone(), RequiredRoles::new(["user"]))
        .with_state(state);

    let denied = Request::builder()
        .uri("/op")
        .header(header::AUTHORIZATION, "Bearer token-admin")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(denied).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    let admitted = Request::builder()
        .uri("/op")
        .header(header::AUTHORIZATION, "Bearer token-user")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(admitted).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

/// The resolved identity is visible to the downstream operation, and an empty
/// required-role set admits any authenticated identity.
#[tokio::test]
async fn identity_is_attached_for_the_operation() {
    async fn whoami(AuthCtxExtractor(ctx): AuthCtxExtractor) -> String {
        ctx.username
    }

    let state = test_state();
    let inner = Router::new().route("/whoami", get(whoami));
    let app = require_role::protect(inner, state.clone(), RequiredRoles::any_authenticated())
        .with_state(state);

    let request = Request::builder()
        .uri("/whoami")
        .header(header::AUTHORIZATION, "Bearer token-admin")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "tirth");
}
