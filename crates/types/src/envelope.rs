//! Response envelopes.
//!
//! Mutating endpoints that have nothing to return, and every error response,
//! wrap a small `{message, status_code}` record under a `success` or `error`
//! key.

use serde::{Deserialize, Serialize};

/// The `{message, status_code}` record carried inside both envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMessage {
    /// Human-readable outcome description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// HTTP status code echoed in the body.
    pub status_code: i64,
}

/// Body shape of an error response: `{"error": {"message": ..., "status_code": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// The wrapped error record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ResponseMessage>,
}

impl ErrorEnvelope {
    /// Extracts the server-provided message from a raw error body, if the
    /// body matches the documented envelope shape.
    #[must_use]
    pub fn message_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|envelope| envelope.error)
            .and_then(|error| error.message)
    }
}

/// Body shape of a success acknowledgement: `{"success": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessEnvelope {
    /// The wrapped success record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<ResponseMessage>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_envelope_message() {
        let body = r#"{"error":{"message":"Invalid Username or Password","status_code":401}}"#;
        assert_eq!(
            ErrorEnvelope::message_from_body(body).as_deref(),
            Some("Invalid Username or Password")
        );
    }

    #[test]
    fn test_error_envelope_message_absent_on_plain_body() {
        assert_eq!(ErrorEnvelope::message_from_body("service unavailable"), None);
    }

    #[test]
    fn test_success_envelope_roundtrip() {
        let body = r#"{"success":{"message":"OK","status_code":200}}"#;
        let envelope: SuccessEnvelope = serde_json::from_str(body).unwrap();
        let success = envelope.success.clone().unwrap();
        assert_eq!(success.message.as_deref(), Some("OK"));
        assert_eq!(success.status_code, 200);
        let json = serde_json::to_string(&envelope).unwrap();
        assert_eq!(json, body);
    }
}
