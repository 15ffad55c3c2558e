use crate::models::{Song, User};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    event::sdam::{SdamEventHandler, ServerHeartbeatFailedEvent, ServerHeartbeatSucceededEvent},
    options::ClientOptions,
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Last known state of the store connection, as reported by the driver's own
/// server-monitoring heartbeats. The readiness gate reads this flag on every
/// request; nothing here probes the server on its own.
#[derive(Clone, Debug, Default)]
pub struct ConnectionStatus(Arc<AtomicBool>);

impl ConnectionStatus {
    pub fn mark_connected(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn mark_disconnected(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_connected(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

struct HeartbeatListener {
    status: ConnectionStatus,
}

impl SdamEventHandler for HeartbeatListener {
    fn handle_server_heartbeat_succeeded_event(&self, _event: ServerHeartbeatSucceededEvent) {
        self.status.mark_connected();
    }

    fn handle_server_heartbeat_failed_event(&self, _event: ServerHeartbeatFailedEvent) {
        self.status.mark_disconnected();
    }
}

/// Store client constructed once at startup and injected into the router
/// state. Cheap to clone.
#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
    status: ConnectionStatus,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        let mut options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            AppError::from(e)
        })?;
        options.app_name = Some("catalog-service".to_string());

        let status = ConnectionStatus::default();
        options.sdam_event_handler = Some(Arc::new(HeartbeatListener {
            status: status.clone(),
        }));

        let client = MongoClient::with_options(options).map_err(AppError::from)?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client initialized");
        Ok(Self { client, db, status })
    }

    /// Handle for the readiness gate.
    pub fn connection_status(&self) -> ConnectionStatus {
        self.status.clone()
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn songs(&self) -> Collection<Song> {
        self.db.collection("songs")
    }

    pub fn users(&self) -> Collection<User> {
        self.db.collection("users")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub async fn find_song(&self, id: &str) -> Result<Option<Song>, AppError> {
        let song = self.songs().find_one(doc! { "_id": id }, None).await?;
        Ok(song)
    }

    pub async fn filter_songs(
        &self,
        genre: Option<&str>,
        min_danceability: f64,
    ) -> Result<Vec<Song>, AppError> {
        let cursor = self
            .songs()
            .find(song_filter(genre, min_danceability), None)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn songs_by_artist(&self, pattern: &str) -> Result<Vec<Song>, AppError> {
        let cursor = self
            .songs()
            .find(doc! { "artistName": { "$regex": pattern } }, None)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.users().find(doc! {}, None).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn find_user(&self, name: &str) -> Result<Option<User>, AppError> {
        let user = self.users().find_one(doc! { "name": name }, None).await?;
        Ok(user)
    }
}

/// Build the songs filter. Genre is forwarded raw as an unanchored,
/// case-sensitive pattern (regex metacharacters stay active); danceability is
/// a strictly-greater-than bound, 0 when the caller gave none.
fn song_filter(genre: Option<&str>, min_danceability: f64) -> Document {
    let mut filter = doc! { "danceability": { "$gt": min_danceability } };
    if let Some(genre) = genre {
        filter.insert("genre", doc! { "$regex": genre });
    }
    filter
}
