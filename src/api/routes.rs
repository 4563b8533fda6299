/*
 * Responsibility
 * - URL structure of the demo services
 * - decide here which route groups get the RBAC gate / API-key gate
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::auth::gate::RequiredRoles;
use crate::middleware::{api_key, require_role};
use crate::state::AppState;

use crate::api::handlers::{calculator, health::health, hello::hello, songs};

pub fn routes(state: AppState) -> Router<AppState> {
    // Only callers holding the "user" role may compute.
    let protected = require_role::protect(
        Router::new().route("/compute", post(calculator::compute)),
        state.clone(),
        RequiredRoles::new(["user"]),
    );

    let songs = api_key::apply(
        Router::new().route("/songs/recommend", get(songs::recommend)),
        state,
    );

    Router::new()
        .route("/health", get(health))
        .route("/hello", get(hello))
        .route("/", get(calculator::home))
        .merge(protected)
        .merge(songs)
}
