//! Storefront pages
//!
//! Public except for the cart and checkout, which need a signed-in customer
//! on the backend side.

mod handler;

pub use handler::{CartLine, CartView};

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::home))
        .route("/restaurants", get(handler::restaurants))
        .route("/restaurants/{id}", get(handler::restaurant))
        .route("/menu", get(handler::menu))
        .route("/menu/{id}", get(handler::menu_item))
        .route("/cuisines/{id}", get(handler::cuisine))
        .route("/cart", get(handler::cart))
        .route("/cart/items", post(handler::add_to_cart))
        .route(
            "/cart/items/{id}",
            delete(handler::remove_from_cart).put(handler::update_cart_item),
        )
        .route("/checkout", post(handler::checkout))
}
