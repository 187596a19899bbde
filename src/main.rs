use sinch_audio_webhook::{build_app, config::Config, logging, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::from_env()?;
    let bind_socket = config.bind_socket()?;

    let state = AppState::new(config.audio_url.clone(), config.policy.clone());
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(bind_socket).await?;

    info!(
        bind_addr = %config.bind_addr,
        bind_port = config.bind_port,
        strict = config.policy.require_explicit_url,
        audio_url_configured = !config.audio_url.is_empty(),
        "webhook server starting"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
