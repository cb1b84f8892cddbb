//! Shared error payload shape.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Structured error body returned by downstream services for 4xx/5xx responses.
///
/// Every service behind this client contract replies with the same shape on
/// error paths, whatever the endpoint:
///
/// ```json
/// {"code": "NOT_FOUND", "message": "no such id"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[display("{code}: {message}")]
pub struct ErrorPayload {
    /// Service-defined error identifier (e.g. `NOT_FOUND`, `UNAVAILABLE`).
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

impl ErrorPayload {
    /// Creates a new error payload.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_deserialize() {
        let payload: ErrorPayload =
            serde_json::from_str(r#"{"code":"NOT_FOUND","message":"no such id"}"#)
                .expect("deserialize");
        assert_eq!(payload, ErrorPayload::new("NOT_FOUND", "no such id"));
    }

    #[test]
    fn payload_display() {
        let payload = ErrorPayload::new("UNAVAILABLE", "retry later");
        assert_eq!(payload.to_string(), "UNAVAILABLE: retry later");
    }
}
