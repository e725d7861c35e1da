//! Restaurants API

use shared::forms::{RestaurantForm, WorkingHoursForm};
use shared::models::Restaurant;
use shared::{FormSchema, PaginatedResponse, PaginationQuery};

use super::{read, write, write_unit};
use crate::ClientResult;
use crate::cache::{Query, QueryClient, QueryDef, Tag};
use crate::http::ApiRequest;

pub struct RestaurantsApi<'a> {
    q: &'a QueryClient,
}

impl<'a> RestaurantsApi<'a> {
    pub(crate) fn new(q: &'a QueryClient) -> Self {
        Self { q }
    }

    /// One page of restaurants (`GET /restaurants?page&limit`)
    pub fn list_restaurants(&self, page: PaginationQuery) -> Query<'a, PaginatedResponse<Restaurant>> {
        let request = ApiRequest::get("/restaurants").with_query(page.to_query());
        Query::page(self.q, QueryDef::new(Tag::Restaurant, request), page)
    }

    /// Every restaurant, unpaged (`GET /restaurants`)
    pub fn list_all_restaurants(&self) -> Query<'a, Vec<Restaurant>> {
        read(self.q, Tag::Restaurant, ApiRequest::get("/restaurants"))
    }

    pub fn get_restaurant(&self, id: i64) -> Query<'a, Restaurant> {
        read(self.q, Tag::Restaurant, ApiRequest::get(format!("/restaurants/{}", id)))
    }

    pub async fn create_restaurant(&self, form: &RestaurantForm) -> ClientResult<Restaurant> {
        form.check()?;
        write(self.q, ApiRequest::post("/restaurants").json(form)?, &[Tag::Restaurant]).await
    }

    pub async fn update_restaurant(&self, id: i64, form: &RestaurantForm) -> ClientResult<Restaurant> {
        form.check()?;
        let request = ApiRequest::put(format!("/restaurants/{}", id)).json(form)?;
        write(self.q, request, &[Tag::Restaurant]).await
    }

    pub async fn delete_restaurant(&self, id: i64) -> ClientResult<()> {
        write_unit(self.q, ApiRequest::delete(format!("/restaurants/{}", id)), &[Tag::Restaurant]).await
    }

    /// Replace the weekly opening hours
    pub async fn update_working_hours(&self, id: i64, form: &WorkingHoursForm) -> ClientResult<()> {
        form.check()?;
        let request = ApiRequest::put(format!("/restaurants/{}/working-hours", id)).json(form)?;
        write_unit(self.q, request, &[Tag::Restaurant]).await
    }
}
