//! Cart API
//!
//! Every cart write invalidates `Cart`; a watched cart is refetched before
//! the write returns, so its subtotal is always derived from server state.

use shared::FormSchema;
use shared::models::{AddToCart, Cart, UpdateCartItem};

use super::{read, write_unit};
use crate::ClientResult;
use crate::cache::{Query, QueryClient, Tag};
use crate::http::ApiRequest;

pub struct CartApi<'a> {
    q: &'a QueryClient,
}

impl<'a> CartApi<'a> {
    pub(crate) fn new(q: &'a QueryClient) -> Self {
        Self { q }
    }

    pub fn get_cart(&self) -> Query<'a, Cart> {
        read(self.q, Tag::Cart, ApiRequest::get("/cart"))
    }

    pub async fn add_to_cart(&self, menu_item_id: i64, quantity: u32) -> ClientResult<()> {
        let body = AddToCart {
            menu_item_id,
            quantity,
        };
        body.check()?;
        write_unit(self.q, ApiRequest::post("/cart/items").json(&body)?, &[Tag::Cart]).await
    }

    pub async fn update_cart_item(&self, cart_item_id: i64, quantity: u32) -> ClientResult<()> {
        let body = UpdateCartItem { quantity };
        body.check()?;
        let request = ApiRequest::put(format!("/cart/items/{}", cart_item_id)).json(&body)?;
        write_unit(self.q, request, &[Tag::Cart]).await
    }

    pub async fn remove_from_cart(&self, cart_item_id: i64) -> ClientResult<()> {
        write_unit(
            self.q,
            ApiRequest::delete(format!("/cart/items/{}", cart_item_id)),
            &[Tag::Cart],
        )
        .await
    }

    pub async fn clear_cart(&self) -> ClientResult<()> {
        write_unit(self.q, ApiRequest::delete("/cart"), &[Tag::Cart]).await
    }
}
