//! Resource clients
//!
//! One client per backend resource. Reads return a [`Query`] (await it, or
//! watch it); writes validate their form, send, and invalidate their tags.

pub mod addresses;
pub mod admin;
pub mod auth;
pub mod cart;
pub mod categories;
pub mod cuisines;
pub mod customers;
pub mod menus;
pub mod orders;
pub mod owner;
pub mod restaurants;
pub mod users;

pub use addresses::AddressesApi;
pub use admin::AdminApi;
pub use auth::AuthApi;
pub use cart::CartApi;
pub use categories::CategoriesApi;
pub use cuisines::CuisinesApi;
pub use customers::CustomersApi;
pub use menus::MenusApi;
pub use orders::OrdersApi;
pub use owner::OwnerApi;
pub use restaurants::RestaurantsApi;
pub use users::UsersApi;

use serde::de::DeserializeOwned;

use crate::ClientResult;
use crate::cache::{Query, QueryClient, QueryDef, Tag, decode_data};
use crate::http::ApiRequest;

/// A read of `data` cached under `tag`
pub(crate) fn read<T>(q: &QueryClient, tag: Tag, request: ApiRequest) -> Query<'_, T>
where
    T: DeserializeOwned + Send + 'static,
{
    Query::data(q, QueryDef::new(tag, request))
}

/// A write whose response carries the written record
pub(crate) async fn write<T: DeserializeOwned>(
    q: &QueryClient,
    request: ApiRequest,
    invalidates: &[Tag],
) -> ClientResult<T> {
    decode_data(q.mutate(request, invalidates).await?)
}

/// A write whose response body is ignored
pub(crate) async fn write_unit(q: &QueryClient, request: ApiRequest, invalidates: &[Tag]) -> ClientResult<()> {
    q.mutate(request, invalidates).await.map(|_| ())
}
