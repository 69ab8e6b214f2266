use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, JsonRejection},
        State,
    },
    http::header,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::error::AppError;
use crate::metrics;
use crate::models::{ImportResponse, ImportUrlRequest, Playlist, RenameRequest};
use crate::services::m3u_parser::parse_m3u;
use crate::services::xtream::generate_credentials;
use crate::AppState;

/// File name offered for exports
pub const EXPORT_FILE_NAME: &str = "playlist.m3u";

/// Parse the text and make it the session's playlist
async fn load_content(state: &AppState, source: &str, content: &str) -> ImportResponse {
    let channels = parse_m3u(content);
    let total = channels.len();
    metrics::record_import(source, true, total);

    let credentials = generate_credentials(&state.config.xtream_host, state.config.xtream_port);

    let mut session = state.session.write().await;
    session.load(channels, credentials);

    tracing::info!("Loaded {} channels from {}", total, source);

    let playlist = session.playlist();
    ImportResponse {
        success: true,
        name: playlist.name.clone(),
        total,
        channels: playlist.channels.clone(),
    }
}

/// GET /api/playlist - Current playlist
pub async fn get_playlist(State(state): State<Arc<AppState>>) -> Json<Playlist> {
    let session = state.session.read().await;
    Json(session.playlist().clone())
}

/// PUT /api/playlist/name - Relabel the playlist (not written to M3U)
pub async fn rename_playlist(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RenameRequest>, JsonRejection>,
) -> Result<Json<Playlist>, AppError> {
    let Json(payload) = payload?;
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }

    let mut session = state.session.write().await;
    session.rename(payload.name.trim());
    Ok(Json(session.playlist().clone()))
}

/// POST /api/playlist/import/url - Fetch a playlist and load it.
/// One attempt; every failure maps to the same message.
pub async fn import_url(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ImportUrlRequest>, JsonRejection>,
) -> Result<Json<ImportResponse>, AppError> {
    let fetched = match payload {
        Ok(Json(payload)) => state.fetcher.fetch(&payload.url).await.map_err(AppError::from),
        Err(rejection) => Err(AppError::import_json(rejection)),
    };
    let content = match fetched {
        Ok(content) => content,
        Err(e) => {
            metrics::record_import("url", false, 0);
            return Err(e);
        }
    };

    Ok(Json(load_content(&state, "url", &content).await))
}

/// POST /api/playlist/import/file - Load an uploaded file's text.
/// Invalid UTF-8 is replaced rather than rejected.
pub async fn import_file(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ImportResponse>, AppError> {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            metrics::record_import("file", false, 0);
            return Err(AppError::import_body(rejection));
        }
    };

    let content = String::from_utf8_lossy(&body);
    Ok(Json(load_content(&state, "file", &content).await))
}

/// GET /api/playlist/export - Download the playlist as M3U
pub async fn export_playlist(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let content = state.session.read().await.export();
    metrics::EXPORTS_TOTAL.inc();

    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        content,
    )
}
