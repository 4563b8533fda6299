use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};

use crate::state::AppState;

use super::AuthCtx;

/// Extractor for receiving the AuthCtx in a handler.
/// Assumes the require_role middleware already inserted it into the request
/// extensions; if it is absent the route is misconfigured (no gate applied),
/// so respond 401 rather than run the handler unauthenticated.
pub struct AuthCtxExtractor(pub AuthCtx);

impl FromRequestParts<AppState> for AuthCtxExtractor
where
    AppState: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthCtx>()
            .cloned()
            .map(AuthCtxExtractor)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
