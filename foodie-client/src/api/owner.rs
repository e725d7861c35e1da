//! Owner API
//!
//! Restaurant-owner views: their restaurants, incoming orders and menu.

use shared::FormSchema;
use shared::forms::MenuItemForm;
use shared::models::{MenuItem, Order, OrderStatusUpdate, Restaurant};

use super::{read, write, write_unit};
use crate::ClientResult;
use crate::cache::{Query, QueryClient, Tag};
use crate::http::ApiRequest;

pub struct OwnerApi<'a> {
    q: &'a QueryClient,
}

impl<'a> OwnerApi<'a> {
    pub(crate) fn new(q: &'a QueryClient) -> Self {
        Self { q }
    }

    pub fn owner_restaurants(&self) -> Query<'a, Vec<Restaurant>> {
        read(self.q, Tag::Owner, ApiRequest::get("/owner/restaurants"))
    }

    pub fn owner_orders(&self) -> Query<'a, Vec<Order>> {
        read(self.q, Tag::Owner, ApiRequest::get("/owner/orders"))
    }

    /// Move an order along; also refreshes customer order lists
    pub async fn update_order_status(&self, order_id: i64, update: OrderStatusUpdate) -> ClientResult<Order> {
        let request = ApiRequest::put(format!("/owner/orders/{}", order_id)).json(&update)?;
        write(self.q, request, &[Tag::Owner, Tag::Order]).await
    }

    pub fn owner_restaurant_menu(&self, restaurant_id: i64) -> Query<'a, Vec<MenuItem>> {
        read(
            self.q,
            Tag::MenuItem,
            ApiRequest::get(format!("/restaurants/{}/menu", restaurant_id)),
        )
    }

    pub async fn update_owner_menu_item(&self, menu_id: i64, form: &MenuItemForm) -> ClientResult<MenuItem> {
        form.check()?;
        let request = ApiRequest::put(format!("/owner/menu/{}", menu_id)).json(form)?;
        write(self.q, request, &[Tag::MenuItem]).await
    }

    pub async fn delete_owner_menu_item(&self, menu_id: i64) -> ClientResult<()> {
        write_unit(self.q, ApiRequest::delete(format!("/owner/menu/{}", menu_id)), &[Tag::MenuItem]).await
    }
}
