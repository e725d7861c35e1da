//! Foodie Client - typed API client for the Foodie backend
//!
//! Resource clients on top of a tag-invalidated query cache and a single
//! request dispatcher that attaches the session token.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use cache::{CacheEvent, CacheStore, Query, QueryState, QueryStatus, Tag, WatchHandle};
pub use client::FoodieClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{ApiRequest, BaseQuery, DynamicBaseQuery, OneshotBaseQuery, Transport};
pub use session::{Anonymous, MemorySession, Session, SessionSource};

// Re-export shared types for convenience
pub use shared::{ApiResponse, FieldErrors, PageMeta, PaginatedResponse, PaginationQuery};
