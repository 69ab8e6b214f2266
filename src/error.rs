use axum::{
    extract::rejection::{BytesRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::services::fetcher::SourceError;
use crate::services::session::SessionError;

/// Message shown for any failed import, whatever the cause
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load playlist. Please check the URL and try again.";

/// Handler error rendered as `{ "error": "..." }`
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{}", LOAD_FAILED_MESSAGE)]
    Source(#[from] SourceError),
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::ChannelNotFound(_) | SessionError::UserNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            SessionError::MissingFields(_) | SessionError::InvalidUser(_) => {
                AppError::BadRequest(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    /// Rejected import request body. Reported like any other failed load.
    pub fn import_json(rejection: JsonRejection) -> Self {
        AppError::Source(SourceError::Request(rejection.body_text()))
    }

    /// Unreadable uploaded file (too large, broken transfer)
    pub fn import_body(rejection: BytesRejection) -> Self {
        AppError::Source(SourceError::Request(rejection.body_text()))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Source(SourceError::Request(_)) => StatusCode::BAD_REQUEST,
            AppError::Source(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Source(ref e) = self {
            tracing::error!("Playlist load failed: {}", e);
        }

        (
            self.status(),
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
