//! Data models
//!
//! Plain records mirrored from the backend API. All IDs are `i64`, money is
//! `Decimal`, timestamps are optional because list endpoints omit them.

pub mod address;
pub mod admin;
pub mod cart;
pub mod category;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod user;

// Re-exports
pub use address::*;
pub use admin::*;
pub use cart::*;
pub use category::*;
pub use menu::*;
pub use order::*;
pub use restaurant::*;
pub use user::*;
