//! HTTP transport layer for the voice-platform webhooks.
//!
//! Provides the `/voice`, `/event`, and `/set_audio_url` handlers plus the
//! optional liveness route.

pub mod handlers;
