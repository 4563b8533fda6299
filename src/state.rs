/*
 * Responsibility
 * - shared context attached to the Router (AppState)
 *   - users: the process-wide identity store (read-only after startup)
 *   - songs_api_key: static key for the song-recommendation demo
 * - Clone is assumed cheap (internals are Arc)
 */
use std::sync::Arc;

use crate::auth::identity::IdentityLookup;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn IdentityLookup>,
    pub songs_api_key: Arc<str>,
}

impl AppState {
    pub fn new(users: Arc<dyn IdentityLookup>, songs_api_key: impl Into<Arc<str>>) -> Self {
        Self {
            users,
            songs_api_key: songs_api_key.into(),
        }
    }
}
