//! Route gate middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use shared::models::Role;

use super::session::{CurrentSession, session_from_headers};
use crate::AppState;

/// Sign-in page
pub const SIGNIN_PATH: &str = "/signin";

/// Where wrong-role users are sent
pub const HOME_PATH: &str = "/";

/// Resolve the caller's session and store it as [`CurrentSession`].
///
/// Runs on every route; it never rejects.
pub async fn resolve_session(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let session = session_from_headers(req.headers(), &state.config.session_cookie);
    req.extensions_mut().insert(CurrentSession(session));
    next.run(req).await
}

/// Role gate for one route group
///
/// No session redirects to [`SIGNIN_PATH`], a session with another role
/// redirects to [`HOME_PATH`]. The decision is made per request.
///
/// # Usage
///
/// ```ignore
/// Router::new()
///     .route("/admin", get(admin::dashboard))
///     .route_layer(middleware::from_fn_with_state(Role::Admin, require_role));
/// ```
pub async fn require_role(State(role): State<Role>, req: Request, next: Next) -> Response {
    let session = req
        .extensions()
        .get::<CurrentSession>()
        .and_then(|c| c.session());

    match session {
        None => {
            tracing::info!(uri = %req.uri(), required = %role, "no session, redirecting to sign-in");
            Redirect::temporary(SIGNIN_PATH).into_response()
        }
        Some(s) if s.role() != &role => {
            tracing::warn!(
                uri = %req.uri(),
                user_id = s.user_id(),
                role = %s.role(),
                required = %role,
                "role mismatch, redirecting home"
            );
            Redirect::temporary(HOME_PATH).into_response()
        }
        Some(_) => next.run(req).await,
    }
}
