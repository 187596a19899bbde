use std::{env, net::SocketAddr};

use thiserror::Error;

/// Fallback audio file used by the lenient profile when neither the request
/// nor the configured state provides a URL.
pub const FALLBACK_AUDIO_URL: &str = "https://drive.usercontent.google.com/download?id=1lpZ4lgJCayZOIynHQDZtcgkr_E1vH4WC&export=download&authuser=3&confirm=t&uuid=00329742-410d-48cb-abf5-361b6f668431&at=ANTm3cwQnDfROOdJoLg0SUqJ0XWl:1768438701320";

#[derive(Debug, Clone)]
pub struct Config {
    pub audio_url: String,
    pub bind_addr: String,
    pub bind_port: u16,
    pub policy: Policy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid u16")]
    InvalidPort,
    #[error("RESPONDER_PROFILE must be 'lenient' or 'strict', got '{0}'")]
    InvalidProfile(String),
    #[error("invalid bind address or port")]
    InvalidSocket,
}

/// Response policy for the webhook endpoints.
///
/// The two deployment profiles differ only in policy, not mechanism: the
/// lenient one always answers `/voice` with a playable document (falling back
/// to a hardcoded URL) and inserts a pause before hangup; the strict one
/// refuses calls without an explicit URL and exposes a liveness route for the
/// hosting platform.
#[derive(Debug, Clone)]
pub struct Policy {
    pub default_url: Option<String>,
    pub require_explicit_url: bool,
    pub include_health_endpoint: bool,
    pub include_pause_step: bool,
}

impl Policy {
    pub fn lenient() -> Self {
        Self {
            default_url: Some(FALLBACK_AUDIO_URL.to_string()),
            require_explicit_url: false,
            include_health_endpoint: false,
            include_pause_step: true,
        }
    }

    pub fn strict() -> Self {
        Self {
            default_url: None,
            require_explicit_url: true,
            include_health_endpoint: true,
            include_pause_step: false,
        }
    }

    fn from_profile(profile: &str) -> Result<Self, ConfigError> {
        match profile.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::lenient()),
            "strict" => Ok(Self::strict()),
            other => Err(ConfigError::InvalidProfile(other.to_string())),
        }
    }

    /// Resolves the audio URL for a `/voice` request. A present query
    /// parameter overrides the configured state even when it is empty; the
    /// empty check applies to the resolved value, and the default is
    /// consulted only when the policy does not require an explicit URL.
    pub fn resolve_audio_url(&self, from_query: Option<&str>, configured: &str) -> Option<String> {
        let candidate = from_query.unwrap_or(configured);
        if !candidate.is_empty() {
            return Some(candidate.to_string());
        }

        if self.require_explicit_url {
            None
        } else {
            self.default_url.clone()
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let audio_url = env::var("AUDIO_URL").unwrap_or_default();
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
        let bind_port = env::var("PORT")
            .ok()
            .map(|value| value.parse::<u16>().map_err(|_| ConfigError::InvalidPort))
            .transpose()?
            .unwrap_or(5000);
        let policy = env::var("RESPONDER_PROFILE")
            .ok()
            .map(|value| Policy::from_profile(&value))
            .transpose()?
            .unwrap_or_else(Policy::lenient);

        let config = Self {
            audio_url,
            bind_addr,
            bind_port,
            policy,
        };

        let _ = config.bind_socket()?;
        Ok(config)
    }

    pub fn bind_socket(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.bind_port)
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidSocket)
    }
}
