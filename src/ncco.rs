//! Call-control instruction documents (NCCO).
//!
//! The calling platform expects a JSON array of actions to perform during the
//! call. Documents are produced fresh per request and never stored.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Action {
    Stream {
        #[serde(rename = "streamUrl")]
        stream_url: Vec<String>,
    },
    Pause {
        length: u32,
    },
    Hangup,
}

/// Builds the standard playback document: stream the audio file, optionally
/// pause for one second, then hang up.
pub fn play_and_hangup(audio_url: &str, include_pause: bool) -> Vec<Action> {
    let mut actions = vec![Action::Stream {
        stream_url: vec![audio_url.to_string()],
    }];
    if include_pause {
        actions.push(Action::Pause { length: 1 });
    }
    actions.push(Action::Hangup);
    actions
}
