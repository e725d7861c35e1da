//! Auth API DTOs
//!
//! Request/response types for `POST /login` and `POST /register`, and the
//! claims carried inside the access token.

use serde::{Deserialize, Serialize};

use crate::models::Role;

// Sign-in and sign-up bodies are the validated forms themselves
pub use crate::forms::{SignInForm as LoginRequest, SignUpForm as SignupRequest};

/// Login response data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Short-lived access token (JWT)
    pub access: String,
    #[serde(default)]
    pub refresh: String,
}

/// Claims read from the access token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub id: i64,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    /// Expiry, seconds since the Unix epoch
    pub exp: i64,
}

impl SessionClaims {
    pub fn is_expired_at(&self, now_secs: i64) -> bool {
        self.exp <= now_secs
    }
}
