//! Axum HTTP handlers for the webhook endpoints.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::event::CallEvent;
use crate::ncco::{self, Action};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct VoiceQuery {
    pub audio_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SetAudioUrlRequest {
    audio_url: String,
}

#[derive(Debug, Serialize)]
pub struct SetAudioUrlResponse {
    pub status: &'static str,
    pub audio_url: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub endpoint: &'static str,
}

/// Answers the platform's call-setup webhook with an instruction document.
/// Accepts GET or POST; any body is ignored.
pub async fn voice(
    State(state): State<AppState>,
    Query(query): Query<VoiceQuery>,
) -> Result<Json<Vec<Action>>, AppError> {
    let configured = state.current_audio_url();
    let resolved = state
        .policy
        .resolve_audio_url(query.audio_url.as_deref(), &configured)
        .ok_or(AppError::MissingAudioUrl)?;

    info!(audio_url = %resolved, "answering call with playback instructions");
    Ok(Json(ncco::play_and_hangup(
        &resolved,
        state.policy.include_pause_step,
    )))
}

/// Accepts call lifecycle notifications. The platform does not expect
/// failure semantics for event delivery, so this handler always returns
/// 200 with an empty body; malformed bodies are logged and treated as an
/// empty event.
pub async fn event(body: Bytes) -> StatusCode {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(err) => {
            if !body.is_empty() {
                warn!(error = %err, "unparsable event payload, treating as empty");
            }
            Value::Object(Default::default())
        }
    };

    let event = CallEvent::from_value(&payload);
    info!(event = %event.event, "call event");
    info!(call_id = %event.call_id, "call id");
    info!(status = %event.status, "call status");
    info!(duration_s = event.duration, "call duration");
    info!(payload = %payload, "full event payload");

    StatusCode::OK
}

/// Overwrites the configured audio URL at runtime.
pub async fn set_audio_url(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SetAudioUrlResponse>, AppError> {
    let request: SetAudioUrlRequest =
        serde_json::from_slice(&body).map_err(|err| AppError::invalid_body(err.to_string()))?;

    info!(audio_url = %request.audio_url, "audio url updated");
    state.replace_audio_url(request.audio_url.clone());

    Ok(Json(SetAudioUrlResponse {
        status: "success",
        audio_url: request.audio_url,
    }))
}

/// Liveness document for deployment platforms.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "online",
        service: env!("CARGO_PKG_NAME"),
        endpoint: "/voice",
    })
}
