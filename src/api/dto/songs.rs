/*
 * Responsibility
 * - song-recommendation request/response DTO
 */
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub genre: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Song {
    pub title: &'static str,
    pub artist: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub genre: String,
    pub songs: Vec<Song>,
}
