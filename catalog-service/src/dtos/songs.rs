use crate::models::Song;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use utoipa::{IntoParams, ToSchema};

/// Query parameters for `GET /songs`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SongQuery {
    /// Substring pattern matched against the genre field, case-sensitive,
    /// regex metacharacters active.
    #[param(example = "pop")]
    pub genre: Option<String>,
    /// Strict lower bound; only records with danceability greater than this
    /// match. Defaults to 0.
    #[param(example = 70)]
    pub danceability: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SongResponse {
    pub success: bool,
    pub body: Song,
}

impl SongResponse {
    pub fn found(song: Song) -> Self {
        Self {
            success: true,
            body: song,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SongListResponse {
    pub success: bool,
    pub body: Vec<Song>,
}

impl SongListResponse {
    /// An empty match set is still a success.
    pub fn matched(songs: Vec<Song>) -> Self {
        Self {
            success: true,
            body: songs,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FailureResponse {
    pub success: bool,
    pub body: FailureBody,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FailureBody {
    #[schema(example = "Song not found")]
    pub message: String,
}

impl FailureResponse {
    pub fn song_not_found() -> Self {
        Self::with_message("Song not found".to_string())
    }

    pub fn fault(err: &AppError) -> Self {
        Self::with_message(err.to_string())
    }

    fn with_message(message: String) -> Self {
        Self {
            success: false,
            body: FailureBody { message },
        }
    }
}
