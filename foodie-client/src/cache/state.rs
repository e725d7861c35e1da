//! Per-query state

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::tag::QueryKey;
use crate::{ClientError, ClientResult};

/// Query lifecycle
///
/// `Uninitialized -> Loading -> Success | Error`; a refetch from `Success`
/// or `Error` passes through `Refetching`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryStatus {
    #[default]
    Uninitialized,
    Loading,
    Success,
    Refetching,
    Error,
}

impl QueryStatus {
    pub fn is_fetching(&self) -> bool {
        matches!(self, QueryStatus::Loading | QueryStatus::Refetching)
    }
}

/// Raw snapshot of one cache entry
#[derive(Debug, Clone, Default)]
pub struct QuerySnapshot {
    pub status: QueryStatus,
    /// Last successful body; kept when a later fetch fails
    pub data: Option<Value>,
    /// Error of the last fetch, cleared on success
    pub error: Option<ClientError>,
    /// Marked by a tag invalidation, cleared by the next successful fetch
    pub invalidated: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

impl QuerySnapshot {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Decoded view of a cache entry, what a watcher sees
#[derive(Debug, Clone)]
pub struct QueryState<T> {
    pub status: QueryStatus,
    pub data: Option<T>,
    pub error: Option<ClientError>,
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            status: QueryStatus::Uninitialized,
            data: None,
            error: None,
        }
    }
}

/// Decoder from a cached envelope to the typed result
pub type Decoder<T> = Arc<dyn Fn(Value) -> ClientResult<T> + Send + Sync>;

impl<T> QueryState<T> {
    pub(crate) fn decode(snapshot: QuerySnapshot, decoder: &Decoder<T>) -> Self {
        let (data, decode_error) = match snapshot.data {
            Some(value) => match decoder(value) {
                Ok(data) => (Some(data), None),
                Err(e) => (None, Some(e)),
            },
            None => (None, None),
        };
        Self {
            status: snapshot.status,
            data,
            error: snapshot.error.or(decode_error),
        }
    }
}

/// Cache change notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEvent {
    /// A request for the key went out
    Started(QueryKey),
    /// New data landed
    Updated(QueryKey),
    /// A fetch failed; previous data is still there
    Failed(QueryKey),
    /// A response older than the applied one was dropped
    Discarded(QueryKey),
    /// The entry was marked stale by a tag invalidation
    Invalidated(QueryKey),
    /// Everything was dropped
    Cleared,
}

impl CacheEvent {
    pub fn key(&self) -> Option<&QueryKey> {
        match self {
            CacheEvent::Started(k)
            | CacheEvent::Updated(k)
            | CacheEvent::Failed(k)
            | CacheEvent::Discarded(k)
            | CacheEvent::Invalidated(k) => Some(k),
            CacheEvent::Cleared => None,
        }
    }
}
