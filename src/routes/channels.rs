use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::error::AppError;
use crate::models::{Channel, ChannelDraft, ChannelsResponse};
use crate::services::m3u_parser::UuidIds;
use crate::AppState;

/// GET /api/channels - Channels in playlist order
pub async fn list_channels(State(state): State<Arc<AppState>>) -> Json<ChannelsResponse> {
    let session = state.session.read().await;
    let channels = session.playlist().channels.clone();
    let total = channels.len();
    Json(ChannelsResponse { channels, total })
}

/// POST /api/channels - Save the edit form.
/// Empty id adds a channel, a known id replaces it.
pub async fn save_channel(
    State(state): State<Arc<AppState>>,
    draft: Result<Json<ChannelDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Channel>), AppError> {
    let Json(draft) = draft?;
    let is_new = draft.id.is_empty();

    let mut session = state.session.write().await;
    let channel = session.save_channel(draft, &mut UuidIds)?;

    let status = if is_new {
        tracing::info!("Channel added: {}", channel.id);
        StatusCode::CREATED
    } else {
        tracing::info!("Channel updated: {}", channel.id);
        StatusCode::OK
    };
    Ok((status, Json(channel)))
}

/// PUT /api/channels/:id - Replace a channel
pub async fn update_channel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    draft: Result<Json<ChannelDraft>, JsonRejection>,
) -> Result<Json<Channel>, AppError> {
    let Json(draft) = draft?;
    let draft = ChannelDraft { id, ..draft };

    let mut session = state.session.write().await;
    let channel = session.save_channel(draft, &mut UuidIds)?;

    tracing::info!("Channel updated: {}", channel.id);
    Ok(Json(channel))
}

/// DELETE /api/channels/:id
pub async fn delete_channel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.session.write().await.delete_channel(&id)?;

    tracing::info!("Channel deleted: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
