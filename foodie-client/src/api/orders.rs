//! Orders API

use shared::FormSchema;
use shared::forms::{CheckoutForm, CreateOrder};
use shared::models::Order;

use super::{read, write};
use crate::ClientResult;
use crate::cache::{Query, QueryClient, Tag};
use crate::http::ApiRequest;

pub struct OrdersApi<'a> {
    q: &'a QueryClient,
}

impl<'a> OrdersApi<'a> {
    pub(crate) fn new(q: &'a QueryClient) -> Self {
        Self { q }
    }

    /// Place an order for the current cart; the backend empties the cart
    pub async fn create_order(&self, form: &CheckoutForm) -> ClientResult<Order> {
        form.check()?;
        let request = ApiRequest::post("/orders").json(&CreateOrder::from(form))?;
        write(self.q, request, &[Tag::Order, Tag::Cart]).await
    }

    /// Orders of the signed-in customer
    pub fn list_user_orders(&self) -> Query<'a, Vec<Order>> {
        read(self.q, Tag::Order, ApiRequest::get("/orders/user"))
    }
}
