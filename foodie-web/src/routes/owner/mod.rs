//! Restaurant owner route group

mod handler;

use axum::{Router, routing::{get, put}};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/owner", get(handler::dashboard))
        .route("/owner/restaurants", get(handler::restaurants))
        .route("/owner/restaurants/{id}", put(handler::update_restaurant))
        .route("/owner/restaurants/{id}/hours", put(handler::update_working_hours))
        .route("/owner/orders", get(handler::orders))
        .route("/owner/orders/{id}", put(handler::update_order))
        .route("/owner/restaurants/{id}/menu", get(handler::restaurant_menu))
        .route(
            "/owner/menu/{id}",
            put(handler::update_menu_item).delete(handler::delete_menu_item),
        )
}
