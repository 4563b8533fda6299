//! The protected-operation wrapper: run the authorization gate before the
//! handler, attach the resolved identity on success.
//!
//! Responsibility:
//! - extract the raw `Authorization` header and call `auth::gate::authorize`
//! - on denial, short-circuit with the mapped 401/403 before the handler runs
//! - on success, insert `AuthCtx` into the request extensions so handlers can
//!   receive it through the `AuthCtxExtractor`
//!
//! Example:
//! ```ignore
//! let compute = Router::new().route("/compute", post(compute));
//! let compute = middleware::require_role::protect(
//!     compute,
//!     state.clone(),
//!     RequiredRoles::new(["user"]),
//! );
//! ```

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::AuthCtx;
use crate::auth::gate::{self, AuthorizationResult, RequiredRoles};
use crate::error::AppError;
use crate::state::AppState;

/// Wrap `router` so its operations only execute after the gate allows them.
/// `required` is fixed at registration time, not per request.
pub fn protect(router: Router<AppState>, state: AppState, required: RequiredRoles) -> Router<AppState> {
    // axum 0.8's from_fn cannot receive a State extractor on its own, so the
    // state (plus the role set for this route group) is passed explicitly.
    router.route_layer(middleware::from_fn_with_state(
        (state, required),
        require_role_middleware,
    ))
}

async fn require_role_middleware(
    State((state, required)): State<(AppState, RequiredRoles)>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match gate::authorize(state.users.as_ref(), header_value, required.as_slice()) {
        AuthorizationResult::Authorized(identity) => {
            // middleware → extractor hand-off
            req.extensions_mut().insert(AuthCtx::new(identity));
            Ok(next.run(req).await)
        }
        AuthorizationResult::Denied(reason) => {
            tracing::warn!(%reason, "request denied by authorization gate");
            Err(AppError::from(reason))
        }
    }
}
