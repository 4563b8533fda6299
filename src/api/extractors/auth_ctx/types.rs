/*
 * Responsibility
 * - the "authorized context" type as seen from handlers
 * - the require_role middleware resolves it and stores it in the request
 *   extensions; handlers only ever receive this type
 *
 * Notes
 * - header parsing / store lookup / role checks are the gate's job, not
 *   this type's
 * - read-only for the handler, scoped to a single request
 */
use crate::auth::identity::Identity;

/// Context attached to a request that passed the authorization gate.
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub username: String,
    pub roles: Vec<String>,
}

impl AuthCtx {
    pub fn new(identity: Identity) -> Self {
        Self {
            username: identity.username,
            roles: identity.roles,
        }
    }
}
