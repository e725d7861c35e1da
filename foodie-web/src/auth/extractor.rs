//! Request-scoped API client extractor

use axum::{extract::FromRequestParts, http::request::Parts};
use foodie_client::{FoodieClient, Session};

use super::session::{CurrentSession, session_from_headers};
use crate::{AppError, AppState};

/// API client bound to the caller's session, with its own cache
pub struct Api {
    pub client: FoodieClient,
    pub session: Option<Session>,
}

impl FromRequestParts<AppState> for Api {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Set by the session middleware; resolved here when a handler runs without it
        let session = match parts.extensions.get::<CurrentSession>() {
            Some(current) => current.0.clone(),
            None => session_from_headers(&parts.headers, &state.config.session_cookie),
        };

        Ok(Api {
            client: state.client_for(session.clone()),
            session,
        })
    }
}
