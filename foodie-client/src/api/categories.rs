//! Categories API

use shared::FormSchema;
use shared::forms::CategoryForm;
use shared::models::Category;

use super::{read, write};
use crate::ClientResult;
use crate::cache::{Query, QueryClient, Tag};
use crate::http::ApiRequest;

pub struct CategoriesApi<'a> {
    q: &'a QueryClient,
}

impl<'a> CategoriesApi<'a> {
    pub(crate) fn new(q: &'a QueryClient) -> Self {
        Self { q }
    }

    pub fn list_categories(&self) -> Query<'a, Vec<Category>> {
        read(self.q, Tag::Category, ApiRequest::get("/categories"))
    }

    pub fn get_category(&self, id: i64) -> Query<'a, Category> {
        read(self.q, Tag::Category, ApiRequest::get(format!("/categories/{}", id)))
    }

    pub async fn create_category(&self, form: &CategoryForm) -> ClientResult<Category> {
        form.check()?;
        write(self.q, ApiRequest::post("/categories").json(form)?, &[Tag::Category]).await
    }

    pub async fn update_category(&self, id: i64, form: &CategoryForm) -> ClientResult<Category> {
        form.check()?;
        let request = ApiRequest::put(format!("/categories/{}", id)).json(form)?;
        write(self.q, request, &[Tag::Category]).await
    }
}
