//! Auth API
//!
//! Sign-in returns a [`Session`]; storing it (cookie, memory) is up to the
//! caller. The cache is cleared on sign-in so nothing from a previous user
//! survives.

use shared::FormSchema;
use shared::auth::{LoginRequest, LoginResponse, SignupRequest};
use shared::models::User;

use super::write;
use crate::ClientResult;
use crate::cache::QueryClient;
use crate::http::ApiRequest;
use crate::session::Session;

pub struct AuthApi<'a> {
    q: &'a QueryClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(q: &'a QueryClient) -> Self {
        Self { q }
    }

    /// `POST /login`
    pub async fn login(&self, form: &LoginRequest) -> ClientResult<Session> {
        form.check()?;
        let tokens: LoginResponse = write(self.q, ApiRequest::post("/login").json(form)?, &[]).await?;
        self.q.store().clear();
        tracing::info!(email = %form.email, "signed in");
        Session::from_tokens(tokens.access, Some(tokens.refresh))
    }

    /// `POST /register`
    pub async fn signup(&self, form: &SignupRequest) -> ClientResult<User> {
        form.check()?;
        write(self.q, ApiRequest::post("/register").json(form)?, &[]).await
    }
}
