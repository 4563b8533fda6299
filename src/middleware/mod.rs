/*
 * Responsibility
 * - public interface of the middleware layer (re-exports)
 * - require_role: RBAC gate applied to a sub-router
 * - api_key: static key check for the songs demo
 * - http: transport-level concerns (request-id, tracing, limits)
 */
pub mod api_key;
pub mod http;
pub mod require_role;
