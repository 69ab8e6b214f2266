mod config;
mod error;
mod metrics;
mod models;
mod routes;
mod services;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::{fetcher::PlaylistFetcher, session::EditorSession};

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub fetcher: PlaylistFetcher,
    /// The one editing session; every action takes this lock once
    pub session: RwLock<EditorSession>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let fetcher = PlaylistFetcher::new(
            &config.user_agent,
            config.fetch_timeout_ms,
            config.max_m3u_size_mb,
        )?;
        let session = RwLock::new(EditorSession::new(config.playlist_name.clone()));

        Ok(Self {
            config,
            fetcher,
            session,
            start_time: Instant::now(),
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "playlist_editor_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // Load configuration
    let config = Config::from_env();
    let port = config.port;

    tracing::info!("Starting Playlist Editor Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app_env);
    tracing::info!(
        "Xtream credentials will be issued for {}:{}",
        config.xtream_host,
        config.xtream_port
    );

    let state = Arc::new(AppState::new(config)?);
    let app = routes::build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
