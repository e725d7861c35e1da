//! Users API

use shared::FormSchema;
use shared::forms::ProfileForm;
use shared::models::User;

use super::{read, write};
use crate::ClientResult;
use crate::cache::{Query, QueryClient, Tag};
use crate::http::ApiRequest;

pub struct UsersApi<'a> {
    q: &'a QueryClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(q: &'a QueryClient) -> Self {
        Self { q }
    }

    /// Signed-in user (`GET /me`)
    pub fn me(&self) -> Query<'a, User> {
        read(self.q, Tag::User, ApiRequest::get("/me"))
    }

    /// Update the signed-in user's profile (`PUT /me`)
    pub async fn update_me(&self, form: &ProfileForm) -> ClientResult<User> {
        form.check()?;
        write(self.q, ApiRequest::put("/me").json(form)?, &[Tag::User]).await
    }

    /// All users, admin only (`GET /users`)
    pub fn list_users(&self) -> Query<'a, Vec<User>> {
        read(self.q, Tag::User, ApiRequest::get("/users"))
    }
}
