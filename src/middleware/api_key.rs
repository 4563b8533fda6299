//! Static API-key gate for the song-recommendation demo.
//!
//! Responsibility:
//! - compare the `X-API-Key` header against the configured key (equality,
//!   nothing else)
//! - reject with 401 before the handler runs

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(state, api_key_middleware))
}

async fn api_key_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let presented = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if presented != Some(state.songs_api_key.as_ref()) {
        tracing::warn!("songs request rejected: missing or wrong API key");
        return Err(AppError::unauthorized("Missing or invalid API key"));
    }

    Ok(next.run(req).await)
}
