/*
 * Responsibility
 * - public surface of the RBAC core
 * - identity: token → Identity resolution (the store)
 * - gate: the allow/deny decision function
 */
pub mod gate;
pub mod identity;

pub use gate::{AuthorizationResult, DenialReason, RequiredRoles, authorize};
pub use identity::{Identity, IdentityLookup, StaticIdentityStore};
