//! Error taxonomy of every API call made by the frontend.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::validation::ValidationError;

/// Body the API sends with a non-2xx status
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Rejected locally, the network was never contacted
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("no error message"))]
    Rejected { status: u16, message: Option<String> },

    /// The request could not complete or the body could not be read
    #[error("{0}")]
    Transport(String),
}

impl ApiError {
    /// Build a rejection from a raw response body. A body that is not JSON
    /// or carries no `error` field leaves the message empty.
    pub fn rejected(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty());
        ApiError::Rejected { status, message }
    }

    pub fn transport(detail: impl std::fmt::Display) -> Self {
        ApiError::Transport(detail.to_string())
    }

    /// Message for a failed submission; `fallback` is used when the server
    /// gave no reason (e.g. "Failed to create rental").
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Validation(e) => e.message().to_string(),
            ApiError::Rejected {
                message: Some(message),
                ..
            } => format!("Error: {}", message),
            ApiError::Rejected { message: None, .. } => format!("Error: {}", fallback),
            ApiError::Transport(detail) => format!("Network error: {}", detail),
        }
    }

    /// Message for a failed reference-data load, `what` is e.g. "customers"
    pub fn load_message(&self, what: &str) -> String {
        match self {
            ApiError::Transport(detail) => format!("Error loading {}: {}", what, detail),
            _ => format!("Failed to load {}", what),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_uses_body_error() {
        let err = ApiError::rejected(409, r#"{"error":"Duplicate name"}"#);
        assert_eq!(
            err.user_message("Failed to create category"),
            "Error: Duplicate name"
        );
    }

    #[test]
    fn test_rejection_without_error_field_uses_fallback() {
        let err = ApiError::rejected(500, "<html>oops</html>");
        assert_eq!(
            err.user_message("Failed to create rental"),
            "Error: Failed to create rental"
        );
        let err = ApiError::rejected(400, r#"{"message":"nope"}"#);
        assert_eq!(err.user_message("Failed"), "Error: Failed");
    }

    #[test]
    fn test_transport_and_validation_messages() {
        let err = ApiError::transport("Failed to fetch");
        assert_eq!(err.user_message("unused"), "Network error: Failed to fetch");
        assert_eq!(
            err.load_message("customers"),
            "Error loading customers: Failed to fetch"
        );

        let err: ApiError = ValidationError::new("Please select a size").into();
        assert_eq!(err.user_message("unused"), "Please select a size");
    }

    #[test]
    fn test_load_message_for_rejection() {
        let err = ApiError::rejected(503, "");
        assert_eq!(err.load_message("categories"), "Failed to load categories");
    }
}
