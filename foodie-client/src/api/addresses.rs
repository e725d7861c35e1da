//! Addresses API

use shared::FormSchema;
use shared::forms::AddressForm;
use shared::models::Address;

use super::{read, write, write_unit};
use crate::ClientResult;
use crate::cache::{Query, QueryClient, Tag};
use crate::http::ApiRequest;

pub struct AddressesApi<'a> {
    q: &'a QueryClient,
}

impl<'a> AddressesApi<'a> {
    pub(crate) fn new(q: &'a QueryClient) -> Self {
        Self { q }
    }

    pub fn list_addresses(&self) -> Query<'a, Vec<Address>> {
        read(self.q, Tag::Address, ApiRequest::get("/addresses"))
    }

    pub async fn create_address(&self, form: &AddressForm) -> ClientResult<Address> {
        form.check()?;
        write(self.q, ApiRequest::post("/addresses").json(form)?, &[Tag::Address]).await
    }

    pub async fn update_address(&self, id: i64, form: &AddressForm) -> ClientResult<Address> {
        form.check()?;
        let request = ApiRequest::put(format!("/addresses/{}", id)).json(form)?;
        write(self.q, request, &[Tag::Address]).await
    }

    pub async fn delete_address(&self, id: i64) -> ClientResult<()> {
        write_unit(self.q, ApiRequest::delete(format!("/addresses/{}", id)), &[Tag::Address]).await
    }
}
