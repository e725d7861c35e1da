//! Admin route group

mod handler;

use axum::{
    Router,
    routing::{delete, get, put},
};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(handler::dashboard))
        .route("/admin/users", get(handler::users))
        .route("/admin/customers", get(handler::customers))
        .route("/admin/categories", get(handler::categories).post(handler::create_category))
        .route("/admin/categories/{id}", put(handler::update_category))
        .route("/admin/cuisines", get(handler::cuisines).post(handler::create_cuisine))
        .route("/admin/cuisines/{id}", put(handler::update_cuisine))
        .route("/admin/restaurants", get(handler::restaurants).post(handler::create_restaurant))
        .route(
            "/admin/restaurants/{id}",
            put(handler::update_restaurant).delete(handler::delete_restaurant),
        )
        .route(
            "/admin/restaurants/{id}/menu",
            get(handler::restaurant_menu).post(handler::create_menu_item),
        )
        .route("/admin/restaurants/{id}/menu/{menu_id}", put(handler::update_menu_item))
        .route("/admin/menu/{id}", delete(handler::delete_menu_item))
        .route("/admin/reports", get(handler::reports))
}
