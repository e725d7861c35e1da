//! FoodieClient: one cache and one dispatcher shared by every resource client

use std::sync::Arc;

use axum::Router;

use crate::api::{
    AddressesApi, AdminApi, AuthApi, CartApi, CategoriesApi, CuisinesApi, CustomersApi, MenusApi,
    OrdersApi, OwnerApi, RestaurantsApi, UsersApi,
};
use crate::cache::{CacheStore, QueryClient, Tag};
use crate::http::{BaseQuery, DynamicBaseQuery, OneshotBaseQuery, Transport};
use crate::session::SessionSource;
use crate::{ClientConfig, ClientResult};

/// Entry point of the client library
///
/// # Example
///
/// ```ignore
/// let session = Arc::new(MemorySession::new());
/// let client = FoodieClient::new(ClientConfig::from_env(), session)?;
///
/// let page = client.restaurants().list_restaurants(PaginationQuery::default()).await?;
/// client.cart().add_to_cart(menu_item_id, 2).await?;
/// ```
#[derive(Clone)]
pub struct FoodieClient {
    queries: QueryClient,
}

impl FoodieClient {
    /// Network client
    pub fn new(config: ClientConfig, session: Arc<dyn SessionSource>) -> ClientResult<Self> {
        Ok(Self::with_base_query(Arc::new(DynamicBaseQuery::new(config, session)?)))
    }

    /// In-process client driving `router` (mounted under `/api`)
    pub fn in_process(router: Router, session: Arc<dyn SessionSource>) -> Self {
        Self::with_base_query(Arc::new(OneshotBaseQuery::new(router, session)))
    }

    /// Client for one session over a shared transport
    pub fn connect(transport: &Transport, session: Arc<dyn SessionSource>) -> Self {
        Self::with_base_query(transport.connect(session))
    }

    /// Client over any dispatcher, with a fresh cache
    pub fn with_base_query(base: Arc<dyn BaseQuery>) -> Self {
        Self::with_parts(base, Arc::new(CacheStore::new()))
    }

    /// Client over a dispatcher and an existing cache
    pub fn with_parts(base: Arc<dyn BaseQuery>, store: Arc<CacheStore>) -> Self {
        Self {
            queries: QueryClient::new(base, store),
        }
    }

    pub fn cache(&self) -> &Arc<CacheStore> {
        self.queries.store()
    }

    pub fn queries(&self) -> &QueryClient {
        &self.queries
    }

    /// Invalidate tags by hand, refetching subscribed queries
    pub async fn invalidate(&self, tags: &[Tag]) {
        self.queries.invalidate(tags).await;
    }

    /// Drop all cached data (sign-out)
    pub fn clear_cache(&self) {
        self.queries.store().clear();
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.queries)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(&self.queries)
    }

    pub fn restaurants(&self) -> RestaurantsApi<'_> {
        RestaurantsApi::new(&self.queries)
    }

    pub fn menus(&self) -> MenusApi<'_> {
        MenusApi::new(&self.queries)
    }

    pub fn categories(&self) -> CategoriesApi<'_> {
        CategoriesApi::new(&self.queries)
    }

    pub fn cuisines(&self) -> CuisinesApi<'_> {
        CuisinesApi::new(&self.queries)
    }

    pub fn cart(&self) -> CartApi<'_> {
        CartApi::new(&self.queries)
    }

    pub fn orders(&self) -> OrdersApi<'_> {
        OrdersApi::new(&self.queries)
    }

    pub fn customers(&self) -> CustomersApi<'_> {
        CustomersApi::new(&self.queries)
    }

    pub fn addresses(&self) -> AddressesApi<'_> {
        AddressesApi::new(&self.queries)
    }

    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(&self.queries)
    }

    pub fn owner(&self) -> OwnerApi<'_> {
        OwnerApi::new(&self.queries)
    }
}
