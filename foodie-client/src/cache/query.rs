//! Query execution on top of the store
//!
//! [`QueryClient`] serves reads from the cache, joins identical in-flight
//! requests, runs mutations and refetches what they invalidate.

use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use futures::future::{BoxFuture, FutureExt, Shared, join_all};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::broadcast;

use super::state::{CacheEvent, Decoder, QueryState};
use super::store::CacheStore;
use super::tag::{QueryDef, QueryKey, Tag};
use crate::http::{ApiRequest, BaseQuery};
use crate::{ClientError, ClientResult};
use shared::{ApiResponse, PaginatedResponse, PaginationQuery, paginate};

type SharedFetch = Shared<BoxFuture<'static, ClientResult<Value>>>;

#[derive(Clone)]
struct InFlight {
    seq: u64,
    fetch: SharedFetch,
}

/// Runs queries and mutations for one session
#[derive(Clone)]
pub struct QueryClient {
    store: Arc<CacheStore>,
    base: Arc<dyn BaseQuery>,
    inflight: Arc<DashMap<QueryKey, InFlight>>,
}

impl QueryClient {
    pub fn new(base: Arc<dyn BaseQuery>, store: Arc<CacheStore>) -> Self {
        Self {
            store,
            base,
            inflight: Arc::new(DashMap::new()),
        }
    }

    pub fn store(&self) -> &Arc<CacheStore> {
        &self.store
    }

    /// Cached body, or the body of a (possibly shared) request
    pub async fn fetch(&self, def: &QueryDef) -> ClientResult<Value> {
        if let Some(value) = self.store.fresh(&def.key) {
            tracing::trace!(key = %def.key, "cache hit");
            return Ok(value);
        }
        self.run(def, false).await
    }

    /// Always issue a new request for `def`
    pub async fn refetch(&self, def: &QueryDef) -> ClientResult<Value> {
        self.run(def, true).await
    }

    async fn run(&self, def: &QueryDef, force: bool) -> ClientResult<Value> {
        let flight = self.start(def, force);
        let result = flight.fetch.await;
        self.inflight.remove_if(&def.key, |_, f| f.seq == flight.seq);
        result
    }

    fn start(&self, def: &QueryDef, force: bool) -> InFlight {
        match self.inflight.entry(def.key.clone()) {
            Entry::Occupied(existing) if !force => {
                tracing::trace!(key = %def.key, "joining in-flight request");
                existing.get().clone()
            }
            Entry::Occupied(mut existing) => {
                let flight = self.spawn(def);
                existing.insert(flight.clone());
                flight
            }
            Entry::Vacant(slot) => {
                let flight = self.spawn(def);
                slot.insert(flight.clone());
                flight
            }
        }
    }

    /// The request runs on its own task so that it completes (and lands in
    /// the cache) even if every caller stops waiting. The task also retires
    /// its in-flight slot, so an abandoned request is never joined later.
    fn spawn(&self, def: &QueryDef) -> InFlight {
        let seq = self.store.begin(&def.key, &def.request);
        let base = self.base.clone();
        let store = self.store.clone();
        let inflight = self.inflight.clone();
        let key = def.key.clone();
        let request = def.request.clone();

        let handle = tokio::spawn(async move {
            let result = base.execute(request).await;
            store.complete(&key, seq, &result);
            inflight.remove_if(&key, |_, f| f.seq == seq);
            result
        });

        let fetch = async move {
            handle
                .await
                .unwrap_or_else(|e| Err(ClientError::Internal(format!("query task failed: {}", e))))
        }
        .boxed()
        .shared();

        InFlight { seq, fetch }
    }

    /// Send a write; on success invalidate `tags` and wait for the
    /// subscribed queries to refetch. Failures invalidate nothing.
    pub async fn mutate(&self, request: ApiRequest, tags: &[Tag]) -> ClientResult<Value> {
        tracing::debug!(request = %request, tags = ?tags, "mutation");
        let value = self.base.execute(request).await?;
        self.invalidate(tags).await;
        Ok(value)
    }

    /// Invalidate `tags` and refetch every subscribed query providing them
    pub async fn invalidate(&self, tags: &[Tag]) {
        let active = self.store.invalidate(tags);
        let refetches = active.into_iter().map(|(key, request)| {
            let def = QueryDef { key, request };
            async move {
                // The error is recorded on the entry
                let _ = self.refetch(&def).await;
            }
        });
        join_all(refetches).await;
    }

    /// Subscribe to a query and load it; the subscription ends when the
    /// handle is dropped
    pub async fn watch<T>(&self, def: QueryDef, decoder: Decoder<T>) -> WatchHandle<T> {
        self.store.retain(&def.key, &def.request);
        // Errors are visible through the handle state
        let _ = self.fetch(&def).await;
        let events = self.store.subscribe();
        WatchHandle {
            store: self.store.clone(),
            key: def.key,
            events,
            decoder,
        }
    }
}

/// Live view of one cached query
pub struct WatchHandle<T> {
    store: Arc<CacheStore>,
    key: QueryKey,
    events: broadcast::Receiver<CacheEvent>,
    decoder: Decoder<T>,
}

impl<T> WatchHandle<T> {
    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Current state of the query
    pub fn state(&self) -> QueryState<T> {
        match self.store.get(&self.key) {
            Some(snapshot) => QueryState::decode(snapshot, &self.decoder),
            None => QueryState::default(),
        }
    }

    /// Wait for the next event touching this query after the handle was
    /// created.
    ///
    /// Returns `false` once the store is gone.
    pub async fn changed(&mut self) -> bool {
        loop {
            match self.events.recv().await {
                Ok(event) => match event.key() {
                    Some(k) if k == &self.key => return true,
                    None => return true,
                    Some(_) => continue,
                },
                Err(broadcast::error::RecvError::Lagged(_)) => return true,
                Err(broadcast::error::RecvError::Closed) => return false,
            }
        }
    }
}

impl<T> Drop for WatchHandle<T> {
    fn drop(&mut self) {
        self.store.release(&self.key);
    }
}

/// `data` of a single-record envelope
pub fn decode_data<T: DeserializeOwned>(value: Value) -> ClientResult<T> {
    let envelope: ApiResponse<T> = serde_json::from_value(value)?;
    envelope
        .data
        .ok_or_else(|| ClientError::InvalidResponse("envelope has no data".into()))
}

/// A paged list.
///
/// Servers that return the whole list without `meta` are paged here using
/// the `page`/`limit` the request was made with.
pub fn decode_page<T: DeserializeOwned + Clone>(
    value: Value,
    page: u32,
    limit: u32,
) -> ClientResult<PaginatedResponse<T>> {
    if value.get("meta").is_some() {
        return Ok(serde_json::from_value(value)?);
    }
    let all: Vec<T> = decode_data(value)?;
    Ok(paginate(&all, page, limit))
}

/// A read bound to its decoder; `.await` it for the data or `.watch()` it
/// for a live handle
#[must_use = "queries do nothing unless awaited or watched"]
pub struct Query<'a, T> {
    client: &'a QueryClient,
    def: QueryDef,
    decoder: Decoder<T>,
}

impl<'a, T> Query<'a, T> {
    pub fn new(client: &'a QueryClient, def: QueryDef, decoder: Decoder<T>) -> Self {
        Self { client, def, decoder }
    }

    pub fn def(&self) -> &QueryDef {
        &self.def
    }

    /// Skip the cache and issue a new request
    pub async fn refetch(self) -> ClientResult<T> {
        let value = self.client.refetch(&self.def).await?;
        (self.decoder)(value)
    }

    pub async fn watch(self) -> WatchHandle<T> {
        self.client.watch(self.def, self.decoder).await
    }
}

impl<'a, T: DeserializeOwned + Send + 'static> Query<'a, T> {
    /// Query decoding the envelope's `data`
    pub fn data(client: &'a QueryClient, def: QueryDef) -> Self {
        Self::new(client, def, Arc::new(decode_data::<T>))
    }
}

impl<'a, T: DeserializeOwned + Clone + Send + 'static> Query<'a, PaginatedResponse<T>> {
    /// Query decoding a paged list
    pub fn page(client: &'a QueryClient, def: QueryDef, params: PaginationQuery) -> Self {
        Self::new(
            client,
            def,
            Arc::new(move |value| decode_page(value, params.page, params.limit)),
        )
    }
}

impl<'a, T: Send + 'a> IntoFuture for Query<'a, T> {
    type Output = ClientResult<T>;
    type IntoFuture = Pin<Box<dyn Future<Output = ClientResult<T>> + Send + 'a>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            let value = self.client.fetch(&self.def).await?;
            (self.decoder)(value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_page_with_meta() {
        let value = json!({
            "success": true,
            "message": "ok",
            "data": [1, 2],
            "meta": {"total": 11, "page": 2, "limit": 9, "totalPages": 2}
        });
        let page: PaginatedResponse<u32> = decode_page(value, 2, 9).unwrap();
        assert_eq!(page.data, vec![1, 2]);
        assert_eq!(page.meta.total, 11);
    }

    #[test]
    fn test_decode_page_without_meta_slices_locally() {
        let value = json!({"success": true, "message": "ok", "data": (1..=20).collect::<Vec<u32>>()});
        let page: PaginatedResponse<u32> = decode_page(value, 3, 9).unwrap();
        assert_eq!(page.data, vec![19, 20]);
        assert_eq!(page.meta.total_pages, 3);
    }

    #[test]
    fn test_decode_data_requires_data() {
        let err = decode_data::<u32>(json!({"success": true, "message": "ok"})).unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }
}
