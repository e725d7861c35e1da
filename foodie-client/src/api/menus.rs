//! Menu items API

use shared::FormSchema;
use shared::forms::MenuItemForm;
use shared::models::MenuItem;

use super::{read, write, write_unit};
use crate::ClientResult;
use crate::cache::{Query, QueryClient, Tag};
use crate::http::ApiRequest;

pub struct MenusApi<'a> {
    q: &'a QueryClient,
}

impl<'a> MenusApi<'a> {
    pub(crate) fn new(q: &'a QueryClient) -> Self {
        Self { q }
    }

    /// Every menu item across restaurants (`GET /menu`)
    pub fn list_menu_items(&self) -> Query<'a, Vec<MenuItem>> {
        read(self.q, Tag::MenuItem, ApiRequest::get("/menu"))
    }

    pub fn list_restaurant_menu(&self, restaurant_id: i64) -> Query<'a, Vec<MenuItem>> {
        read(
            self.q,
            Tag::MenuItem,
            ApiRequest::get(format!("/restaurants/{}/menu", restaurant_id)),
        )
    }

    pub fn get_menu_item(&self, id: i64) -> Query<'a, MenuItem> {
        read(self.q, Tag::MenuItem, ApiRequest::get(format!("/menu/{}", id)))
    }

    pub async fn create_menu_item(&self, restaurant_id: i64, form: &MenuItemForm) -> ClientResult<MenuItem> {
        form.check()?;
        let request = ApiRequest::post(format!("/restaurants/{}/menu", restaurant_id)).json(form)?;
        write(self.q, request, &[Tag::MenuItem]).await
    }

    pub async fn update_menu_item(
        &self,
        restaurant_id: i64,
        menu_id: i64,
        form: &MenuItemForm,
    ) -> ClientResult<MenuItem> {
        form.check()?;
        let request =
            ApiRequest::put(format!("/restaurants/{}/menu/{}", restaurant_id, menu_id)).json(form)?;
        write(self.q, request, &[Tag::MenuItem]).await
    }

    pub async fn delete_menu_item(&self, id: i64) -> ClientResult<()> {
        write_unit(self.q, ApiRequest::delete(format!("/menu/{}", id)), &[Tag::MenuItem]).await
    }
}
