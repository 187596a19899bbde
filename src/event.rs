//! Call lifecycle event records.
//!
//! The platform posts loosely-typed JSON for events such as ringing,
//! answered, and hung up. Field names vary between callback versions, so
//! extraction uses fallback chains and never fails; unknown or missing
//! fields collapse to placeholder values.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallEvent {
    pub event: String,
    pub call_id: String,
    pub status: String,
    pub duration: u64,
}

impl CallEvent {
    pub fn from_value(payload: &Value) -> Self {
        Self {
            event: string_field(payload, &["event"]).unwrap_or_else(|| "unknown".to_string()),
            call_id: string_field(payload, &["callId", "id"])
                .unwrap_or_else(|| "unknown".to_string()),
            status: string_field(payload, &["status", "state"])
                .unwrap_or_else(|| "unknown".to_string()),
            duration: payload.get("duration").and_then(Value::as_u64).unwrap_or(0),
        }
    }
}

/// Returns the first present, non-null field among `keys`, rendered as a
/// string. Non-string scalars keep their JSON rendering.
fn string_field(payload: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| payload.get(*key))
        .filter(|value| !value.is_null())
        .map(|value| match value.as_str() {
            Some(text) => text.to_string(),
            None => value.to_string(),
        })
}
