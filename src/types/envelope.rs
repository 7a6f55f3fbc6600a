//! Uniform API response envelope.
//!
//! Every route answers with a JSON object carrying a required `status`
//! key plus operation-specific payload keys, flattened alongside it.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Envelope `status` discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
    Error,
}

/// Marker payload for message-only envelopes
#[derive(Debug, Serialize)]
pub struct Empty {}

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize = Empty> {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub payload: T,
}

impl Envelope<Empty> {
    /// Message-only success envelope
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: Some(message.into()),
            payload: Empty {},
        }
    }
}

impl<T: Serialize> Envelope<T> {
    /// Success envelope carrying a payload flattened next to `status`
    pub fn with_payload(payload: T) -> Self {
        Self {
            status: Status::Success,
            message: None,
            payload,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_envelope_serializes_flat() {
        let env = Envelope::success("User added");
        let value = serde_json::to_value(&env).unwrap();
        assert_eq!(
            value,
            json!({"status": "success", "message": "User added"})
        );
    }

    #[test]
    fn payload_keys_sit_next_to_status() {
        #[derive(Serialize)]
        struct OrderPlaced {
            order_id: String,
        }

        let env = Envelope::with_payload(OrderPlaced {
            order_id: "abc123".into(),
        });
        let value = serde_json::to_value(&env).unwrap();
        assert_eq!(value, json!({"status": "success", "order_id": "abc123"}));
    }
}
