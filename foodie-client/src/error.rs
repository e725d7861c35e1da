//! Client error types

use shared::response::ErrorDetail;
use shared::{ApiResponse, FieldErrors, GENERIC_ERROR_MESSAGE};
use thiserror::Error;

/// Client error type
///
/// `Clone` so that one in-flight query result can be handed to every caller
/// that joined it. Foreign errors are therefore kept as their messages.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// Transport failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-2xx response, or a 2xx envelope with `success: false`
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        errors: Vec<ErrorDetail>,
        body: Option<serde_json::Value>,
    },

    /// Form failed client-side validation; nothing was sent
    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// Build an API error from a status and the (possibly non-envelope) body
    pub fn from_body(status: u16, body: Option<serde_json::Value>) -> Self {
        let envelope = body
            .as_ref()
            .and_then(|b| serde_json::from_value::<ApiResponse<serde_json::Value>>(b.clone()).ok());

        let (message, errors) = match envelope {
            Some(env) => (env.display_message().to_string(), env.errors),
            None => (GENERIC_ERROR_MESSAGE.to_string(), Vec::new()),
        };

        ClientError::Api {
            status,
            message,
            errors,
            body,
        }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Message to show the user
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Validation(fields) => fields
                .first_message()
                .unwrap_or(GENERIC_ERROR_MESSAGE)
                .to_string(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Http(e.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Serialization(e.to_string())
    }
}

impl From<FieldErrors> for ClientError {
    fn from(e: FieldErrors) -> Self {
        ClientError::Validation(e)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
