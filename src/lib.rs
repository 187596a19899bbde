use std::sync::{Arc, RwLock};

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

pub mod config;
pub mod errors;
pub mod event;
pub mod http;
pub mod logging;
pub mod ncco;

use config::Policy;

/// Shared per-process state: the response policy and the single mutable
/// configuration cell holding the current audio URL. Updates are
/// last-write-wins; a concurrent read observes either the old or the new
/// value, never a partial one.
#[derive(Clone)]
pub struct AppState {
    audio_url: Arc<RwLock<String>>,
    pub policy: Arc<Policy>,
}

impl AppState {
    pub fn new(initial_audio_url: String, policy: Policy) -> Self {
        Self {
            audio_url: Arc::new(RwLock::new(initial_audio_url)),
            policy: Arc::new(policy),
        }
    }

    pub fn current_audio_url(&self) -> String {
        self.audio_url
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn replace_audio_url(&self, value: String) {
        *self
            .audio_url
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = value;
    }
}

pub fn build_app(state: AppState) -> Router {
    let mut router = Router::new()
        .route(
            "/voice",
            get(http::handlers::voice).post(http::handlers::voice),
        )
        .route("/event", post(http::handlers::event))
        .route("/set_audio_url", post(http::handlers::set_audio_url));

    if state.policy.include_health_endpoint {
        router = router.route("/", get(http::handlers::health));
    }

    router
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}
