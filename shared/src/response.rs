//! API Response types
//!
//! Every backend response is wrapped in the same envelope:
//! ```json
//! {
//!     "success": true,
//!     "message": "Restaurants fetched successfully",
//!     "data": { ... },
//!     "errors": [{ "message": "...", "code": "..." }]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Fallback message when the server does not supply one
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Individual error entry inside an envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorDetail {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Unified API response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    #[serde(default)]
    pub success: bool,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Response data (absent on most failures)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Detailed errors (failures only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorDetail>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: "Success".to_string(),
            data: Some(data),
            errors: Vec::new(),
        }
    }

    /// Create a successful response with custom message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: Vec::new(),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors: Vec::new(),
        }
    }

    /// Create an error response carrying field/detail errors
    pub fn error_with_details(message: impl Into<String>, errors: Vec<ErrorDetail>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors,
        }
    }

    /// Message to show the user.
    ///
    /// Failed envelopes prefer their first detailed error over the summary.
    pub fn display_message(&self) -> &str {
        if !self.success
            && let Some(first) = self.errors.first()
        {
            return &first.message;
        }
        if self.message.is_empty() {
            GENERIC_ERROR_MESSAGE
        } else {
            &self.message
        }
    }

    /// All detailed error messages of a failed envelope
    pub fn error_messages(&self) -> Vec<String> {
        if self.success {
            return Vec::new();
        }
        self.errors.iter().map(|e| e.message.clone()).collect()
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Total number of items
    pub total: u64,
    /// Current page number (1-based)
    pub page: u32,
    /// Items per page
    pub limit: u32,
    /// Total number of pages
    #[serde(rename = "totalPages", alias = "total_pages")]
    pub total_pages: u32,
}

impl PageMeta {
    pub fn new(total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(limit as u64) as u32
        };
        Self {
            total,
            page,
            limit,
            total_pages,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Paginated list envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, meta: PageMeta) -> Self {
        Self {
            success: true,
            message: "Data fetched successfully".to_string(),
            data,
            meta,
        }
    }
}
