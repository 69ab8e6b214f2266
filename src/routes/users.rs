use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::error::AppError;
use crate::models::{CreateUserRequest, CreateUserResponse, UsersResponse};
use crate::AppState;

/// GET /api/users
pub async fn list_users(State(state): State<Arc<AppState>>) -> Json<UsersResponse> {
    let session = state.session.read().await;
    let users = session.users().to_vec();
    let total = users.len();
    Json(UsersResponse { users, total })
}

/// POST /api/users - Create a user from the form
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateUserResponse>), AppError> {
    let Json(payload) = payload?;
    let mut session = state.session.write().await;
    let user = session.create_user(payload, chrono::Utc::now())?;

    let xtream_channels = session.xtream_channels().map(|c| c.len()).unwrap_or(0);
    tracing::info!(
        "User created: {} ({} Xtream channels)",
        user.username,
        xtream_channels
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            user,
            xtream_channels,
        }),
    ))
}

/// DELETE /api/users/:id
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let user = state.session.write().await.delete_user(&id)?;

    tracing::info!("User deleted: {}", user.username);
    Ok(StatusCode::NO_CONTENT)
}
