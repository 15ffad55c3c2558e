//! One-shot fixture reset: purge each collection, then bulk-insert the seed
//! records. Runs before the listener binds, so a request can never observe a
//! partially loaded catalog.

use crate::models::{Song, User};
use crate::services::MongoDb;
use mongodb::bson::doc;
use service_core::error::AppError;

const TOP_MUSIC: &str = include_str!("../../data/top_music.json");

pub async fn reload(db: &MongoDb) -> Result<(), AppError> {
    reload_songs(db).await?;
    reload_users(db).await
}

pub async fn reload_songs(db: &MongoDb) -> Result<(), AppError> {
    let songs = fixture_songs()?;
    db.songs().delete_many(doc! {}, None).await?;
    db.songs().insert_many(&songs, None).await?;
    tracing::info!(count = songs.len(), "Song fixture reloaded");
    Ok(())
}

pub async fn reload_users(db: &MongoDb) -> Result<(), AppError> {
    let users = sample_users();
    db.users().delete_many(doc! {}, None).await?;
    db.users().insert_many(&users, None).await?;
    tracing::info!(count = users.len(), "User seed reloaded");
    Ok(())
}

/// Parse the embedded fixture. Each record gets a fresh store identifier.
pub fn fixture_songs() -> Result<Vec<Song>, AppError> {
    serde_json::from_str(TOP_MUSIC)
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("Malformed song fixture: {}", e)))
}

pub fn sample_users() -> Vec<User> {
    vec![
        User::new("Alice", 34, true, Some("alice@example.com")),
        User::new("Bob", 41, true, None),
        User::new("Charlie", 27, false, Some("charlie@example.com")),
        User::new("Dana", 19, true, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fixture_parses_with_unique_ids() {
        let songs = fixture_songs().unwrap();
        assert!(!songs.is_empty());
        let track_ids: HashSet<i64> = songs.iter().map(|s| s.track_id).collect();
        assert_eq!(track_ids.len(), songs.len());
        let store_ids: HashSet<&str> = songs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(store_ids.len(), songs.len());
    }

    #[test]
    fn every_fixture_song_clears_the_default_danceability_bound() {
        // the default filter is danceability > 0, so the full catalog must
        // survive a bare /songs query
        assert!(fixture_songs().unwrap().iter().all(|s| s.danceability > 0));
    }
}
