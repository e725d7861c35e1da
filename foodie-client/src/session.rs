//! Session resolution
//!
//! A session is the backend access token plus the claims read from it. The
//! dispatcher asks a [`SessionSource`] for the current session on every call.

use std::sync::RwLock;

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use shared::auth::SessionClaims;
use shared::models::Role;

use crate::{ClientError, ClientResult};

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub claims: SessionClaims,
}

impl Session {
    /// Build a session from a freshly issued access token
    pub fn from_tokens(access: impl Into<String>, refresh: Option<String>) -> ClientResult<Self> {
        let access_token = access.into();
        let claims = decode_claims(&access_token)
            .ok_or_else(|| ClientError::InvalidResponse("access token has no readable claims".into()))?;
        Ok(Self {
            access_token,
            refresh_token: refresh.filter(|r| !r.is_empty()),
            claims,
        })
    }

    pub fn role(&self) -> &Role {
        &self.claims.role
    }

    pub fn user_id(&self) -> i64 {
        self.claims.id
    }

    pub fn is_expired(&self) -> bool {
        self.claims.is_expired_at(chrono::Utc::now().timestamp())
    }
}

/// Read the claims from a JWT payload without verifying the signature.
///
/// Verification is the backend's job; the client only needs the role and
/// expiry to route the user.
pub fn decode_claims(token: &str) -> Option<SessionClaims> {
    // header.payload.signature
    let mut parts = token.split('.');
    let (_, payload, _) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Where the dispatcher gets the current session from
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// Current session; `Ok(None)` when signed out
    async fn session(&self) -> ClientResult<Option<Session>>;
}

/// In-memory session holder
#[derive(Debug, Default)]
pub struct MemorySession {
    inner: RwLock<Option<Session>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            inner: RwLock::new(Some(session)),
        }
    }

    pub fn set(&self, session: Option<Session>) {
        match self.inner.write() {
            Ok(mut guard) => *guard = session,
            Err(poisoned) => *poisoned.into_inner() = session,
        }
    }

    pub fn clear(&self) {
        self.set(None);
    }

    pub fn current(&self) -> Option<Session> {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl SessionSource for MemorySession {
    async fn session(&self) -> ClientResult<Option<Session>> {
        // An expired token is treated as signed out
        Ok(self.current().filter(|s| !s.is_expired()))
    }
}

/// No session at all
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

#[async_trait]
impl SessionSource for Anonymous {
    async fn session(&self) -> ClientResult<Option<Session>> {
        Ok(None)
    }
}

/// Encode claims into an unsigned token with the same shape as a backend JWT
pub fn encode_unsigned_token(claims: &SessionClaims) -> ClientResult<String> {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims)?);
    Ok(format!("{}.{}.unsigned", header, payload))
}
