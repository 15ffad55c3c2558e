use crate::build_router;
use crate::config::Config;
use crate::services::{fixtures, MongoDb};
use axum::Router;
use secrecy::ExposeSecret;
use service_core::error::AppError;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: MongoDb,
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
    state: AppState,
}

impl Application {
    pub async fn build(config: Config) -> Result<Self, AppError> {
        let db = MongoDb::connect(
            config.database.url.expose_secret(),
            &config.database.db_name,
        )
        .await?;

        // One-shot reset, fully awaited before the listener binds: a request
        // can never observe a partially loaded catalog.
        if config.reset_db {
            fixtures::reload(&db).await?;
        }

        let state = AppState {
            config: config.clone(),
            db,
        };
        let router = build_router(state.clone());

        let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!("Invalid listen address: {}", e)))?;
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();
        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            router,
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn db(&self) -> &MongoDb {
        &self.state.db
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
