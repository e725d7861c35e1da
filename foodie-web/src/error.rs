//! Unified error handling
//!
//! Page handlers return [`AppError`]; it renders as the same envelope the
//! backend uses:
//!
//! ```json
//! { "success": false, "message": "...", "errors": [{ "message": "...", "code": "name" }] }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use foodie_client::ClientError;
use shared::response::ErrorDetail;
use shared::{ApiResponse, FieldErrors, GENERIC_ERROR_MESSAGE};
use tracing::error;

/// Application error
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Backend rejected the session (401)
    #[error("Authentication required")]
    Unauthorized,

    /// Backend refused the action (403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Page or record does not exist (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Form failed validation; per-field messages (400)
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    Invalid(String),

    /// Backend failed with a message worth showing (status passed through)
    #[error("Backend error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// Internal error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::Invalid(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Unauthorized => ApiResponse::<()>::error("Please sign in first"),
            AppError::Forbidden(msg) | AppError::NotFound(msg) | AppError::Invalid(msg) => {
                ApiResponse::error(msg)
            }
            AppError::Validation(fields) => {
                let details = fields
                    .0
                    .iter()
                    .flat_map(|(field, msgs)| {
                        msgs.iter().map(move |m| ErrorDetail::new(m.clone()).with_code(field.clone()))
                    })
                    .collect();
                ApiResponse::error_with_details("Validation failed", details)
            }
            AppError::Upstream { message, .. } => ApiResponse::error(message),
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                ApiResponse::error(GENERIC_ERROR_MESSAGE)
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<ClientError> for AppError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Validation(fields) => AppError::Validation(fields),
            ClientError::Api { status: 401, .. } => AppError::Unauthorized,
            ClientError::Api { status: 403, message, .. } => AppError::Forbidden(message),
            ClientError::Api { status: 404, message, .. } => AppError::NotFound(message),
            ClientError::Api { status, message, .. } if status < 500 => {
                AppError::Upstream { status, message }
            }
            ClientError::Api { status, message, .. } => {
                error!(status, message = %message, "backend error");
                AppError::Upstream {
                    status: 502,
                    message,
                }
            }
            ClientError::Http(e) => {
                error!(error = %e, "backend unreachable");
                AppError::Upstream {
                    status: 502,
                    message: GENERIC_ERROR_MESSAGE.to_string(),
                }
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<FieldErrors> for AppError {
    fn from(e: FieldErrors) -> Self {
        AppError::Validation(e)
    }
}

/// Result type for page handlers
pub type AppResult<T> = Result<T, AppError>;
