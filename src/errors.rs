use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no audio url available")]
    MissingAudioUrl,
    #[error("invalid request body: {message}")]
    InvalidBody { message: String },
}

impl AppError {
    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::InvalidBody {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Wire shape expected by the calling platform for /voice.
            Self::MissingAudioUrl => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "No audio URL provided. Set audio_url query parameter or AUDIO_URL environment variable."
                })),
            )
                .into_response(),
            Self::InvalidBody { message } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "status": "error",
                    "message": message
                })),
            )
                .into_response(),
        }
    }
}
