//! Shared types for the Foodie storefront
//!
//! Backend records, the response envelope, pagination and filter helpers,
//! and the validated form schemas used by both the API client and the web
//! shell.

pub mod auth;
pub mod filters;
pub mod forms;
pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use forms::{FieldErrors, FormSchema};
pub use request::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PaginationQuery, paginate};
pub use response::{ApiResponse, ErrorDetail, GENERIC_ERROR_MESSAGE, PageMeta, PaginatedResponse};
