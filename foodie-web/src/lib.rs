//! Foodie Web - storefront, admin, owner and customer dashboard shell
//!
//! Each page handler builds a request-scoped [`foodie_client::FoodieClient`]
//! bound to the caller's session and returns the page's view model as JSON.
//!
//! # Module layout
//!
//! ```text
//! foodie-web/src/
//! ├── config.rs   # Config from the environment
//! ├── logger.rs   # tracing setup
//! ├── error.rs    # AppError -> envelope responses
//! ├── state.rs    # AppState (transport to the backend)
//! ├── auth/       # session cookie, role gate, client extractor
//! └── routes/     # route groups and handlers
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod logger;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use logger::init_logger;
pub use routes::build_app;
pub use state::AppState;
