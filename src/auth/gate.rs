//! The authorization gate: raw `Authorization` header + required roles →
//! allow/deny.
//!
//! Responsibility:
//! - header shape check (`Bearer <token>`), token extraction, store lookup,
//!   role intersection
//! - a pure, synchronous decision over immutable state; no side effects,
//!   no retries
//!
//! Notes:
//! - The HTTP mapping (401/403) lives in `error.rs`; this module only names
//!   the reason.
//! - Token extraction takes the first space-delimited candidate after the
//!   prefix, so a token containing a space can never match the store. Kept
//!   for compatibility with existing clients.

use std::sync::Arc;

use thiserror::Error;

use super::identity::{Identity, IdentityLookup};

const BEARER_PREFIX: &str = "Bearer ";

/// Roles attached to a protected operation at registration time. Fixed for
/// the lifetime of the route; cheap to clone into middleware state.
#[derive(Debug, Clone)]
pub struct RequiredRoles(Arc<[String]>);

impl RequiredRoles {
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(roles.into_iter().map(Into::into).collect())
    }

    /// No required roles: any authenticated identity passes.
    pub fn any_authenticated() -> Self {
        Self(Arc::from(Vec::new()))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Why a request was denied. Closed set; every denial is terminal for the
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DenialReason {
    #[error("Missing or invalid Authorization header")]
    MissingOrMalformedHeader,
    #[error("Invalid access token")]
    InvalidToken,
    #[error("Insufficient permissions")]
    InsufficientPermissions,
}

impl DenialReason {
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingOrMalformedHeader => "Missing or invalid Authorization header",
            Self::InvalidToken => "Invalid access token",
            Self::InsufficientPermissions => "Insufficient permissions",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationResult {
    Authorized(Identity),
    Denied(DenialReason),
}

/// Decide whether a request may proceed.
///
/// - `header_value`: the raw `Authorization` header, if present.
/// - `required_roles`: roles of which the caller must hold at least one.
///   An empty slice means any authenticated identity suffices.
pub fn authorize(
    users: &dyn IdentityLookup,
    header_value: Option<&str>,
    required_roles: &[String],
) -> AuthorizationResult {
    // Expect exactly "Bearer <token>" (case-sensitive, single space).
    let Some(rest) = header_value.and_then(|v| v.strip_prefix(BEARER_PREFIX)) else {
        return AuthorizationResult::Denied(DenialReason::MissingOrMalformedHeader);
    };

    // First space-delimited candidate after the prefix; anything after a
    // further space is ignored.
    let token = rest.split(' ').next().unwrap_or("");

    let Some(identity) = users.lookup(token) else {
        return AuthorizationResult::Denied(DenialReason::InvalidToken);
    };

    if !required_roles.is_empty() && !identity.has_any_role(required_roles) {
        return AuthorizationResult::Denied(DenialReason::InsufficientPermissions);
    }

    AuthorizationResult::Authorized(identity.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::identity::StaticIdentityStore;

    fn store() -> StaticIdentityStore {
        StaticIdentityStore::demo()
    }

    fn roles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn absent_header_is_malformed() {
        let result = authorize(&store(), None, &roles(&["user"]));
        assert_eq!(
            result,
            AuthorizationResult::Denied(DenialReason::MissingOrMalformedHeader)
        );
    }

    #[test]
    fn non_bearer_scheme_is_malformed() {
        for header in ["Basic abcdef", "bearer token-user", "Bearer", ""] {
            let result = authorize(&store(), Some(header), &roles(&["user"]));
            assert_eq!(
                result,
                AuthorizationResult::Denied(DenialReason::MissingOrMalformedHeader),
                "header: {header:?}"
            );
        }
    }

    #[test]
    fn unknown_token_is_invalid() {
        let result = authorize(&store(), Some("Bearer nope"), &roles(&["user"]));
        assert_eq!(
            result,
            AuthorizationResult::Denied(DenialReason::InvalidToken)
        );
    }

    #[test]
    fn empty_token_is_invalid() {
        // "Bearer " with nothing after the space yields the empty candidate.
        let result = authorize(&store(), Some("Bearer "), &roles(&["user"]));
        assert_eq!(
            result,
            AuthorizationResult::Denied(DenialReason::InvalidToken)
        );
    }

    #[test]
    fn disjoint_roles_are_insufficient() {
        let result = authorize(&store(), Some("Bearer token-user"), &roles(&["admin"]));
        assert_eq!(
            result,
            AuthorizationResult::Denied(DenialReason::InsufficientPermissions)
        );
    }

    #[test]
    fn overlapping_roles_are_authorized() {
        let result = authorize(&store(), Some("Bearer token-both"), &roles(&["admin"]));
        match result {
            AuthorizationResult::Authorized(identity) => {
                assert_eq!(identity.username, "personB");
            }
            other => panic!("expected Authorized, got {other:?}"),
        }
    }

    #[test]
    fn empty_required_roles_admit_any_authenticated_identity() {
        let result = authorize(&store(), Some("Bearer token-admin"), &[]);
        assert!(matches!(result, AuthorizationResult::Authorized(_)));
    }

    #[test]
    fn trailing_junk_after_token_is_ignored() {
        // Split-on-space behavior: only the first candidate counts.
        let result = authorize(
            &store(),
            Some("Bearer token-user something-else"),
            &roles(&["user"]),
        );
        assert!(matches!(result, AuthorizationResult::Authorized(_)));
    }

    #[test]
    fn authorize_is_idempotent() {
        let users = store();
        let required = roles(&["user"]);
        let first = authorize(&users, Some("Bearer token-user"), &required);
        let second = authorize(&users, Some("Bearer token-user"), &required);
        assert_eq!(first, second);
    }
}
