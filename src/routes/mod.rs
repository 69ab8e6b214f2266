pub mod channels;
pub mod health;
pub mod playlist;
pub mod users;
pub mod xtream;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    // Uploads share the URL import size limit
    let upload_limit = state.config.max_m3u_size_mb * 1024 * 1024;

    Router::new()
        // Health endpoints
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/metrics", get(health::metrics))
        .route("/ready", get(health::ready))
        .route("/live", get(health::live))
        // Playlist endpoints
        .route("/api/playlist", get(playlist::get_playlist))
        .route("/api/playlist/name", put(playlist::rename_playlist))
        .route("/api/playlist/import/url", post(playlist::import_url))
        .route(
            "/api/playlist/import/file",
            post(playlist::import_file).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/playlist/export", get(playlist::export_playlist))
        // Channel endpoints
        .route(
            "/api/channels",
            get(channels::list_channels).post(channels::save_channel),
        )
        .route(
            "/api/channels/:id",
            put(channels::update_channel).delete(channels::delete_channel),
        )
        // User endpoints
        .route(
            "/api/users",
            get(users::list_users).post(users::create_user),
        )
        .route("/api/users/:id", delete(users::delete_user))
        // Xtream endpoints
        .route("/api/xtream/credentials", get(xtream::get_credentials))
        .route("/api/xtream/channels", get(xtream::get_channels))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
