//! Account routes

mod handler;

use axum::{Router, routing::{get, post}};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signin", get(handler::signin_page).post(handler::signin))
        .route("/signup", post(handler::signup))
        .route("/signout", post(handler::signout))
}
