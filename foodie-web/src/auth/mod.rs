//! Session resolution and the role-based route gate

mod extractor;
pub mod middleware;
pub mod session;

pub use extractor::Api;
pub use middleware::{HOME_PATH, SIGNIN_PATH, require_role, resolve_session};
pub use session::{CurrentSession, clear_session_cookie, session_cookie};
