//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required or token rejected (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Permission denied (403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rejected by server-side validation (400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether the server answered with a non-success status
    pub fn is_http_status(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized(_)
                | Self::Forbidden(_)
                | Self::NotFound(_)
                | Self::Validation(_)
                | Self::Server { .. }
        )
    }

    /// Server-supplied message for status errors, the full text otherwise
    pub fn message(&self) -> String {
        match self {
            Self::Unauthorized(m)
            | Self::Forbidden(m)
            | Self::NotFound(m)
            | Self::Validation(m)
            | Self::Server { message: m, .. } => m.clone(),
            other => other.to_string(),
        }
    }

    /// Map a non-success status and its body text to an error
    pub(crate) fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            400 => Self::Validation(message),
            _ => Self::Server { status, message },
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Error body returned by the backend (`{"message": "..."}`)
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub message: String,
}

/// Extract a readable message from an error body, falling back to the raw text
pub(crate) fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(err) => err.message,
        Err(_) if body.trim().is_empty() => "Request failed".to_string(),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_mapping() {
        assert!(matches!(
            ClientError::from_status(401, "x".into()),
            ClientError::Unauthorized(_)
        ));
        assert!(matches!(
            ClientError::from_status(400, "x".into()),
            ClientError::Validation(_)
        ));
        let err = ClientError::from_status(502, "bad gateway".into());
        assert!(err.is_http_status());
        assert_eq!(err.to_string(), "Server error (502): bad gateway");
        assert_eq!(err.message(), "bad gateway");
        assert_eq!(
            ClientError::InvalidResponse("eof".into()).message(),
            "Invalid response: eof"
        );
    }

    #[test]
    fn test_error_message_prefers_json_message() {
        assert_eq!(error_message(r#"{"message":"Tutor not found"}"#), "Tutor not found");
        assert_eq!(error_message("plain text"), "plain text");
        assert_eq!(error_message(""), "Request failed");
    }
}
