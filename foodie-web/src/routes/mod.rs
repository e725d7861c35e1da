//! Route groups
//!
//! # Structure
//!
//! - [`storefront`] - public pages, cart and checkout
//! - [`account`] - sign-in, sign-up, sign-out
//! - [`admin`] - admin group, gated on [`Role::Admin`]
//! - [`owner`] - restaurant owner group, gated on [`Role::Owner`]
//! - [`dashboard`] - customer group, gated on [`Role::Customer`]

pub mod account;
pub mod admin;
pub mod dashboard;
pub mod owner;
pub mod storefront;

use axum::{
    Router,
    http::{StatusCode, Uri},
    middleware,
    response::IntoResponse,
};
use serde::Serialize;
use shared::ApiResponse;
use shared::filters::{QueryParams, build_filter_url};
use shared::models::Role;
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::auth::{require_role, resolve_session};

/// Build the application router
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(storefront::router())
        .merge(account::router())
        .merge(gated(admin::router(), Role::Admin))
        .merge(gated(owner::router(), Role::Owner))
        .merge(gated(dashboard::router(), Role::Customer))
        .fallback(fallback)
        .layer(middleware::from_fn_with_state(state.clone(), resolve_session))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Put a route group behind the role gate
fn gated(routes: Router<AppState>, role: Role) -> Router<AppState> {
    routes.route_layer(middleware::from_fn_with_state(role, require_role))
}

async fn fallback(uri: Uri) -> impl IntoResponse {
    tracing::debug!(%uri, "no route");
    (
        StatusCode::NOT_FOUND,
        axum::Json(ApiResponse::<()>::error(format!("No page at {}", uri.path()))),
    )
}

/// One clickable filter on a list page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterLink {
    pub label: String,
    /// URL reached by clicking; clicking an active filter removes it
    pub url: String,
    pub active: bool,
}

/// Filter links for `key`, one per value
pub fn filter_links<'a>(
    base_path: &str,
    current: &QueryParams,
    key: &str,
    values: impl IntoIterator<Item = &'a str>,
) -> Vec<FilterLink> {
    values
        .into_iter()
        .map(|value| FilterLink {
            label: value.to_string(),
            url: build_filter_url(base_path, current, key, value),
            active: current.get(key).map(String::as_str) == Some(value),
        })
        .collect()
}
