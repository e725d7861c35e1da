//! Query cache
//!
//! Reads provide a [`Tag`], writes invalidate tags, and invalidation
//! refetches the affected queries that still have a subscriber.

pub mod query;
pub mod state;
pub mod store;
pub mod tag;

pub use query::{Query, QueryClient, WatchHandle, decode_data, decode_page};
pub use state::{CacheEvent, Decoder, QuerySnapshot, QueryState, QueryStatus};
pub use store::CacheStore;
pub use tag::{QueryDef, QueryKey, Tag};
