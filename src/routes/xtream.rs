use axum::{extract::State, Json};
use std::sync::Arc;

use crate::error::AppError;
use crate::services::xtream::{XtreamChannelsResponse, XtreamCredentials};
use crate::AppState;

fn no_credentials() -> AppError {
    AppError::NotFound("No playlist loaded yet".to_string())
}

/// GET /api/xtream/credentials - Credentials issued for the loaded playlist
pub async fn get_credentials(
    State(state): State<Arc<AppState>>,
) -> Result<Json<XtreamCredentials>, AppError> {
    let session = state.session.read().await;
    session
        .credentials()
        .cloned()
        .map(Json)
        .ok_or_else(no_credentials)
}

/// GET /api/xtream/channels - Channels under the Xtream live layout
pub async fn get_channels(
    State(state): State<Arc<AppState>>,
) -> Result<Json<XtreamChannelsResponse>, AppError> {
    let session = state.session.read().await;
    let credentials = session.credentials().cloned().ok_or_else(no_credentials)?;
    let channels = session.xtream_channels().unwrap_or_default();
    let total = channels.len();

    Ok(Json(XtreamChannelsResponse {
        credentials,
        channels,
        total,
    }))
}
