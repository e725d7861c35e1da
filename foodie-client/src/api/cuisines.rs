//! Cuisines API

use shared::FormSchema;
use shared::forms::CuisineForm;
use shared::models::Cuisine;

use super::{read, write};
use crate::ClientResult;
use crate::cache::{Query, QueryClient, Tag};
use crate::http::ApiRequest;

pub struct CuisinesApi<'a> {
    q: &'a QueryClient,
}

impl<'a> CuisinesApi<'a> {
    pub(crate) fn new(q: &'a QueryClient) -> Self {
        Self { q }
    }

    pub fn list_cuisines(&self) -> Query<'a, Vec<Cuisine>> {
        read(self.q, Tag::Cuisine, ApiRequest::get("/cuisines"))
    }

    pub fn get_cuisine(&self, id: i64) -> Query<'a, Cuisine> {
        read(self.q, Tag::Cuisine, ApiRequest::get(format!("/cuisines/{}", id)))
    }

    pub async fn create_cuisine(&self, form: &CuisineForm) -> ClientResult<Cuisine> {
        form.check()?;
        write(self.q, ApiRequest::post("/cuisines").json(form)?, &[Tag::Cuisine]).await
    }

    pub async fn update_cuisine(&self, id: i64, form: &CuisineForm) -> ClientResult<Cuisine> {
        form.check()?;
        let request = ApiRequest::put(format!("/cuisines/{}", id)).json(form)?;
        write(self.q, request, &[Tag::Cuisine]).await
    }
}
