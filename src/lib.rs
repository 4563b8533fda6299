/*
 * Responsibility
 * - crate root: expose the modules so integration tests can build the
 *   router without going through main()
 */
pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod state;
