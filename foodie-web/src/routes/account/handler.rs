//! Account handlers
//!
//! The session lives in an HttpOnly cookie holding the access token.

use axum::{
    Extension, Json,
    extract::State,
    http::{StatusCode, header},
    response::{AppendHeaders, IntoResponse, Response},
};
use foodie_client::ClientError;
use serde::Serialize;
use shared::ApiResponse;
use shared::auth::{LoginRequest, SignupRequest};
use shared::models::{Role, User};

use crate::auth::{Api, CurrentSession, HOME_PATH, clear_session_cookie, session_cookie};
use crate::{AppError, AppResult, AppState};

/// Landing page for a role after sign-in
pub fn home_for(role: &Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::Owner => "/owner",
        Role::Customer => "/dashboard",
        Role::Other(_) => HOME_PATH,
    }
}

#[derive(Debug, Serialize)]
pub struct SigninPage {
    pub signed_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<&'static str>,
}

/// GET /signin
pub async fn signin_page(Extension(current): Extension<CurrentSession>) -> Json<SigninPage> {
    let role = current.session().map(|s| s.role().clone());
    Json(SigninPage {
        signed_in: role.is_some(),
        redirect: role.as_ref().map(home_for),
        role,
    })
}

#[derive(Debug, Serialize)]
pub struct SignedIn {
    pub user_id: i64,
    pub role: Role,
    pub redirect: &'static str,
}

/// POST /signin
pub async fn signin(
    State(state): State<AppState>,
    Api { client, .. }: Api,
    Json(form): Json<LoginRequest>,
) -> AppResult<Response> {
    // Bad credentials keep the backend's message instead of the generic 401
    let session = client.auth().login(&form).await.map_err(|e| match e {
        ClientError::Api { status: 401, message, .. } => AppError::Upstream { status: 401, message },
        other => AppError::from(other),
    })?;
    let cookie = session_cookie(&state.config.session_cookie, &session, state.config.secure_cookies)
        .ok_or_else(|| AppError::Internal("session token is not a valid cookie value".into()))?;

    let body = ApiResponse::ok_with_message(
        SignedIn {
            user_id: session.user_id(),
            role: session.role().clone(),
            redirect: home_for(session.role()),
        },
        "Signed in",
    );
    Ok((AppendHeaders([(header::SET_COOKIE, cookie)]), Json(body)).into_response())
}

/// POST /signup
pub async fn signup(
    Api { client, .. }: Api,
    Json(form): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<User>>)> {
    let user = client.auth().signup(&form).await?;
    tracing::info!(user_id = user.id, "account created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(user, "Account created, please sign in")),
    ))
}

/// POST /signout
pub async fn signout(State(state): State<AppState>) -> impl IntoResponse {
    (
        AppendHeaders([(header::SET_COOKIE, clear_session_cookie(&state.config.session_cookie))]),
        Json(ApiResponse::ok_with_message((), "Signed out")),
    )
}
