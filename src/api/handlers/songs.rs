/*
 * Responsibility
 * - GET /songs/recommend?genre=… : static lookup keyed by lowercase genre
 * - the API-key gate runs before this handler (routes.rs)
 */
use axum::{Json, extract::Query};

use crate::api::dto::songs::{RecommendQuery, RecommendResponse, Song};
use crate::error::AppError;

pub async fn recommend(
    Query(query): Query<RecommendQuery>,
) -> Result<Json<RecommendResponse>, AppError> {
    let genre = query.genre.trim().to_ascii_lowercase();

    let songs = recommendations(&genre).ok_or_else(|| AppError::not_found("recommendation"))?;

    Ok(Json(RecommendResponse {
        genre,
        songs: songs.to_vec(),
    }))
}

fn recommendations(genre: &str) -> Option<&'static [Song]> {
    const ROCK: &[Song] = &[
        Song {
            title: "Bohemian Rhapsody",
            artist: "Queen",
        },
        Song {
            title: "Stairway to Heaven",
            artist: "Led Zeppelin",
        },
        Song {
            title: "Hotel California",
            artist: "Eagles",
        },
    ];
    const POP: &[Song] = &[
        Song {
            title: "Billie Jean",
            artist: "Michael Jackson",
        },
        Song {
            title: "Shape of You",
            artist: "Ed Sheeran",
        },
        Song {
            title: "Blinding Lights",
            artist: "The Weeknd",
        },
    ];
    const JAZZ: &[Song] = &[
        Song {
            title: "Take Five",
            artist: "The Dave Brubeck Quartet",
        },
        Song {
            title: "So What",
            artist: "Miles Davis",
        },
        Song {
            title: "My Favorite Things",
            artist: "John Coltrane",
        },
    ];

    match genre {
        "rock" => Some(ROCK),
        "pop" => Some(POP),
        "jazz" => Some(JAZZ),
        _ => None,
    }
}
