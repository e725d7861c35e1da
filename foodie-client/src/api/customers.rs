//! Customers API

use shared::models::Customer;

use super::read;
use crate::cache::{Query, QueryClient, Tag};
use crate::http::ApiRequest;

pub struct CustomersApi<'a> {
    q: &'a QueryClient,
}

impl<'a> CustomersApi<'a> {
    pub(crate) fn new(q: &'a QueryClient) -> Self {
        Self { q }
    }

    /// Customer list with order totals, admin only
    pub fn list_customers(&self) -> Query<'a, Vec<Customer>> {
        read(self.q, Tag::Customer, ApiRequest::get("/customers"))
    }
}
