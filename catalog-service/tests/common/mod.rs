use catalog_service::config::{Config, DatabaseConfig, ServerConfig};
use catalog_service::models::Song;
use catalog_service::services::MongoDb;
use catalog_service::startup::Application;
use secrecy::Secret;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_reset(false).await
    }

    pub async fn spawn_with_reset(reset_db: bool) -> Self {
        let db_name = format!("catalog_test_{}", Uuid::new_v4());

        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // random port
            },
            database: DatabaseConfig {
                url: Secret::new(
                    std::env::var("TEST_MONGODB_URI")
                        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
                ),
                db_name: db_name.clone(),
            },
            reset_db,
            service_name: "catalog-service".to_string(),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // The readiness gate stays closed until the driver's first heartbeat
        // lands, so poll until a route answers with a success status.
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..100 {
            match client.get(&health_url).send().await {
                Ok(response) if response.status().is_success() => break,
                _ => tokio::time::sleep(tokio::time::Duration::from_millis(50)).await,
            }
        }

        TestApp {
            address,
            db,
            db_name,
        }
    }

    /// Drop the per-test database.
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}

/// A song with plausible audio features; the fields under test are explicit.
#[allow(dead_code)]
pub fn test_song(
    track_id: i64,
    track_name: &str,
    artist_name: &str,
    genre: &str,
    danceability: i32,
) -> Song {
    Song {
        id: Uuid::new_v4().to_string(),
        track_id,
        track_name: track_name.to_string(),
        artist_name: artist_name.to_string(),
        genre: genre.to_string(),
        bpm: 120,
        energy: 60,
        danceability,
        loudness: -6,
        liveness: 10,
        valence: 50,
        length: 200,
        acousticness: 10,
        speechiness: 5,
        popularity: 80,
    }
}
