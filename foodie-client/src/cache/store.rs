//! Cache store
//!
//! Shared state behind every resource client of one `FoodieClient`:
//!
//! - entries keyed by `(tag, query key)` with their status, data and error
//! - a monotonic sequence number per request so late responses are dropped
//! - subscriber counts; only subscribed queries refetch on invalidation
//! - a broadcast channel of [`CacheEvent`]s

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use dashmap::DashMap;
use serde_json::Value;
use tokio::sync::broadcast;

use super::state::{CacheEvent, QuerySnapshot, QueryStatus};
use super::tag::{QueryKey, Tag};
use crate::ClientResult;
use crate::http::ApiRequest;

/// Capacity of the event channel
const EVENT_CAPACITY: usize = 256;

#[derive(Debug, Default)]
struct CacheEntry {
    snapshot: QuerySnapshot,
    /// Request to replay on invalidation
    request: Option<ApiRequest>,
    /// Sequence of the newest request started for this key
    issued_seq: u64,
    /// Sequence of the response currently applied
    applied_seq: u64,
    /// Responses to requests started before the entry existed are ignored
    since_seq: u64,
    subscribers: usize,
}

/// Injectable query cache
#[derive(Debug)]
pub struct CacheStore {
    entries: DashMap<QueryKey, CacheEntry>,
    seq: AtomicU64,
    events: broadcast::Sender<CacheEvent>,
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            entries: DashMap::new(),
            seq: AtomicU64::new(0),
            events,
        }
    }

    /// Subscribe to cache events
    pub fn subscribe(&self) -> broadcast::Receiver<CacheEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: CacheEvent) {
        // No receivers is fine
        let _ = self.events.send(event);
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Snapshot of one entry
    pub fn get(&self, key: &QueryKey) -> Option<QuerySnapshot> {
        self.entries.get(key).map(|e| e.snapshot.clone())
    }

    /// Cached body if it can be served without a request
    pub fn fresh(&self, key: &QueryKey) -> Option<Value> {
        let entry = self.entries.get(key)?;
        let snap = &entry.snapshot;
        if snap.status == QueryStatus::Success && !snap.invalidated {
            snap.data.clone()
        } else {
            None
        }
    }

    /// Write data directly, superseding any request still in flight
    pub fn set(&self, key: &QueryKey, value: Value) {
        let seq = self.next_seq();
        {
            let mut entry = self.entries.entry(key.clone()).or_insert_with(|| CacheEntry {
                since_seq: seq,
                ..Default::default()
            });
            entry.applied_seq = seq;
            entry.issued_seq = entry.issued_seq.max(seq);
            entry.snapshot.status = QueryStatus::Success;
            entry.snapshot.data = Some(value);
            entry.snapshot.error = None;
            entry.snapshot.invalidated = false;
            entry.snapshot.updated_at = Some(Utc::now());
        }
        self.emit(CacheEvent::Updated(key.clone()));
    }

    /// Record that a request for `key` is going out; returns its sequence
    pub fn begin(&self, key: &QueryKey, request: &ApiRequest) -> u64 {
        let seq = self.next_seq();
        {
            let mut entry = self.entries.entry(key.clone()).or_insert_with(|| CacheEntry {
                since_seq: seq,
                ..Default::default()
            });
            entry.issued_seq = seq;
            entry.request = Some(request.clone());
            entry.snapshot.status = match entry.snapshot.status {
                QueryStatus::Success | QueryStatus::Error | QueryStatus::Refetching => {
                    QueryStatus::Refetching
                }
                QueryStatus::Uninitialized | QueryStatus::Loading => QueryStatus::Loading,
            };
        }
        tracing::debug!(key = %key, seq, "query started");
        self.emit(CacheEvent::Started(key.clone()));
        seq
    }

    /// Apply the response of request `seq`.
    ///
    /// Returns `false` when the response was dropped because a newer one is
    /// already applied or the entry was cleared in the meantime.
    pub fn complete(&self, key: &QueryKey, seq: u64, result: &ClientResult<Value>) -> bool {
        let event = {
            let Some(mut entry) = self.entries.get_mut(key) else {
                tracing::debug!(key = %key, seq, "entry gone, response dropped");
                return false;
            };

            if seq < entry.since_seq || seq < entry.applied_seq {
                tracing::debug!(key = %key, seq, applied = entry.applied_seq, "stale response dropped");
                drop(entry);
                self.emit(CacheEvent::Discarded(key.clone()));
                return false;
            }

            entry.applied_seq = seq;
            let newest = seq >= entry.issued_seq;
            let snap = &mut entry.snapshot;
            match result {
                Ok(value) => {
                    snap.data = Some(value.clone());
                    snap.error = None;
                    snap.updated_at = Some(Utc::now());
                    if newest {
                        snap.invalidated = false;
                        snap.status = QueryStatus::Success;
                    }
                    CacheEvent::Updated(key.clone())
                }
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "query failed");
                    snap.error = Some(e.clone());
                    if newest {
                        snap.status = QueryStatus::Error;
                    }
                    CacheEvent::Failed(key.clone())
                }
            }
        };
        self.emit(event);
        true
    }

    /// Mark every entry providing one of `tags` stale.
    ///
    /// Returns the keys (and requests) of the subscribed ones, which the
    /// caller is expected to refetch.
    pub fn invalidate(&self, tags: &[Tag]) -> Vec<(QueryKey, ApiRequest)> {
        let mut stale = Vec::new();
        let mut active = Vec::new();
        for mut entry in self.entries.iter_mut() {
            if !tags.contains(&entry.key().tag) {
                continue;
            }
            entry.snapshot.invalidated = true;
            stale.push(entry.key().clone());
            if entry.subscribers > 0
                && let Some(request) = entry.request.clone()
            {
                active.push((entry.key().clone(), request));
            }
        }

        if !stale.is_empty() {
            tracing::debug!(tags = ?tags, stale = stale.len(), active = active.len(), "tags invalidated");
        }
        for key in stale {
            self.emit(CacheEvent::Invalidated(key));
        }
        active
    }

    /// Register a subscriber for `key`
    pub fn retain(&self, key: &QueryKey, request: &ApiRequest) {
        let seq = self.seq.load(Ordering::SeqCst) + 1;
        let mut entry = self.entries.entry(key.clone()).or_insert_with(|| CacheEntry {
            since_seq: seq,
            ..Default::default()
        });
        entry.subscribers += 1;
        if entry.request.is_none() {
            entry.request = Some(request.clone());
        }
    }

    /// Drop a subscriber; the entry and its data stay cached
    pub fn release(&self, key: &QueryKey) {
        if let Some(mut entry) = self.entries.get_mut(key) {
            entry.subscribers = entry.subscribers.saturating_sub(1);
        }
    }

    pub fn subscribers(&self, key: &QueryKey) -> usize {
        self.entries.get(key).map(|e| e.subscribers).unwrap_or(0)
    }

    /// Keys cached under `tag`
    pub fn keys(&self, tag: Tag) -> Vec<QueryKey> {
        self.entries
            .iter()
            .filter(|e| e.key().tag == tag)
            .map(|e| e.key().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry (sign-in / sign-out)
    pub fn clear(&self) {
        self.entries.clear();
        tracing::debug!("cache cleared");
        self.emit(CacheEvent::Cleared);
    }
}
