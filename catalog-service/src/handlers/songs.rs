use crate::dtos::{FailureResponse, SongListResponse, SongQuery, SongResponse};
use crate::startup::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

#[utoipa::path(
    get,
    path = "/songs/id/{id}",
    params(("id" = String, Path, description = "Store identifier of the song")),
    responses(
        (status = 200, description = "Song found", body = SongResponse),
        (status = 404, description = "No song with that identifier", body = FailureResponse),
        (status = 500, description = "Store query failed", body = FailureResponse)
    ),
    tag = "Songs"
)]
pub async fn get_song_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.db.find_song(&id).await {
        Ok(Some(song)) => (StatusCode::OK, Json(SongResponse::found(song))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(FailureResponse::song_not_found()),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(song_id = %id, "Song lookup failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureResponse::fault(&e)),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/songs",
    params(SongQuery),
    responses(
        (status = 200, description = "Matching songs; an empty list is still a success", body = SongListResponse),
        (status = 500, description = "Store query failed", body = FailureResponse)
    ),
    tag = "Songs"
)]
pub async fn list_songs(State(state): State<AppState>, Query(params): Query<SongQuery>) -> Response {
    let min_danceability = params.danceability.unwrap_or(0.0);
    match state
        .db
        .filter_songs(params.genre.as_deref(), min_danceability)
        .await
    {
        Ok(songs) => (StatusCode::OK, Json(SongListResponse::matched(songs))).into_response(),
        Err(e) => {
            tracing::error!("Song filter query failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureResponse::fault(&e)),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/songs/artist/{artist_name}",
    params(("artist_name" = String, Path, description = "Substring pattern matched against artist names")),
    responses(
        (status = 200, description = "Songs whose artist matches the pattern", body = SongListResponse),
        (status = 500, description = "Store query failed", body = FailureResponse)
    ),
    tag = "Songs"
)]
pub async fn list_songs_by_artist(
    State(state): State<AppState>,
    Path(artist_name): Path<String>,
) -> Response {
    match state.db.songs_by_artist(&artist_name).await {
        Ok(songs) => (StatusCode::OK, Json(SongListResponse::matched(songs))).into_response(),
        Err(e) => {
            tracing::error!(artist = %artist_name, "Artist query failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureResponse::fault(&e)),
            )
                .into_response()
        }
    }
}
