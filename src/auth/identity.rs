//! Token → Identity resolution.
//!
//! Responsibility:
//! - `Identity`: the resolved principal (username + role set). Immutable once
//!   constructed; looked up, never mutated.
//! - `IdentityLookup`: the store abstraction the gate depends on. Any mapping
//!   provider can be substituted (e.g. a test double).
//! - `StaticIdentityStore`: a fixed in-memory table built once at startup.
//!
//! Notes:
//! - Tokens are opaque strings compared by exact match. No structural
//!   validation, no signatures. In a real scenario this data would come from
//!   an identity provider.

use std::collections::HashMap;

/// The principal a valid token resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub roles: Vec<String>,
}

impl Identity {
    pub fn new<I, S>(username: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            username: username.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// True if at least one of `required` is among this identity's roles.
    pub fn has_any_role(&self, required: &[String]) -> bool {
        required
            .iter()
            .any(|r| self.roles.iter().any(|mine| mine == r))
    }
}

/// Read-only token lookup. The store is built before the server starts and
/// never written afterwards, so concurrent reads need no locking.
pub trait IdentityLookup: Send + Sync + 'static {
    fn lookup(&self, token: &str) -> Option<&Identity>;
}

/// In-memory identity table keyed by access token.
pub struct StaticIdentityStore {
    users: HashMap<String, Identity>,
}

impl StaticIdentityStore {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Identity)>,
        S: Into<String>,
    {
        Self {
            users: entries
                .into_iter()
                .map(|(token, identity)| (token.into(), identity))
                .collect(),
        }
    }

    /// The demo user table.
    pub fn demo() -> Self {
        Self::new([
            ("token-user", Identity::new("personA", ["user"])),
            ("token-admin", Identity::new("tirth", ["admin"])),
            ("token-both", Identity::new("personB", ["user", "admin"])),
        ])
    }
}

impl IdentityLookup for StaticIdentityStore {
    fn lookup(&self, token: &str) -> Option<&Identity> {
        self.users.get(token)
    }
}
