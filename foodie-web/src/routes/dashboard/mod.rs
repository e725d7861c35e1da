//! Customer dashboard route group

mod handler;

use axum::{Router, routing::{get, put}};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(handler::dashboard))
        .route("/dashboard/orders", get(handler::orders))
        .route("/dashboard/addresses", get(handler::addresses).post(handler::create_address))
        .route(
            "/dashboard/addresses/{id}",
            put(handler::update_address).delete(handler::delete_address),
        )
        .route("/dashboard/profile", get(handler::profile).put(handler::update_profile))
}
