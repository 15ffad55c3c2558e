use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A track from the song catalog.
///
/// Field names follow the fixture file (camelCase on the wire and in BSON).
/// The store identifier `_id` is distinct from the fixture's numeric catalog
/// number `id`; a fresh `_id` is generated for fixture records, which carry
/// none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    #[serde(rename = "_id", default = "super::new_record_id")]
    pub id: String,
    #[serde(rename = "id")]
    pub track_id: i64,
    pub track_name: String,
    pub artist_name: String,
    pub genre: String,
    pub bpm: i32,
    pub energy: i32,
    pub danceability: i32,
    pub loudness: i32,
    pub liveness: i32,
    pub valence: i32,
    pub length: i32,
    pub acousticness: i32,
    pub speechiness: i32,
    pub popularity: i32,
}
