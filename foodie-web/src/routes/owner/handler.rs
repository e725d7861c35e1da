//! Owner handlers

use axum::{Json, extract::Path, http::StatusCode};
use foodie_client::FoodieClient;
use serde::Serialize;
use shared::forms::{MenuItemForm, RestaurantForm, WorkingHoursForm};
use shared::models::{MenuItem, Order, OrderStatusUpdate, Restaurant, recent_orders};

use crate::auth::Api;
use crate::{AppError, AppResult};

/// Orders shown on the owner dashboard
const RECENT_ORDERS: usize = 5;

#[derive(Debug, Serialize)]
pub struct OwnerDashboard {
    pub restaurants: Vec<Restaurant>,
    pub recent_orders: Vec<Order>,
    /// Orders not yet delivered or cancelled
    pub open_orders: usize,
}

/// GET /owner
pub async fn dashboard(Api { client, .. }: Api) -> AppResult<Json<OwnerDashboard>> {
    let (restaurants, orders) = tokio::join!(
        client.owner().owner_restaurants().into_future(),
        client.owner().owner_orders().into_future(),
    );
    let orders = orders?;
    Ok(Json(OwnerDashboard {
        restaurants: restaurants?,
        open_orders: orders.iter().filter(|o| !o.status.is_final()).count(),
        recent_orders: recent_orders(&orders, RECENT_ORDERS),
    }))
}

/// GET /owner/restaurants
pub async fn restaurants(Api { client, .. }: Api) -> AppResult<Json<Vec<Restaurant>>> {
    Ok(Json(client.owner().owner_restaurants().await?))
}

/// Refuse writes to restaurants the owner does not own
async fn ensure_owned(client: &FoodieClient, restaurant_id: i64) -> AppResult<()> {
    let owned = client.owner().owner_restaurants().await?;
    if owned.iter().any(|r| r.id == restaurant_id) {
        Ok(())
    } else {
        tracing::warn!(restaurant_id, "owner write to a restaurant they do not own");
        Err(AppError::Forbidden("Not your restaurant".into()))
    }
}

/// PUT /owner/restaurants/{id}
pub async fn update_restaurant(
    Api { client, .. }: Api,
    Path(id): Path<i64>,
    Json(form): Json<RestaurantForm>,
) -> AppResult<Json<Restaurant>> {
    ensure_owned(&client, id).await?;
    let restaurant = client.restaurants().update_restaurant(id, &form).await?;
    tracing::info!(restaurant_id = id, "restaurant details updated by owner");
    Ok(Json(restaurant))
}

/// PUT /owner/restaurants/{id}/hours
pub async fn update_working_hours(
    Api { client, .. }: Api,
    Path(id): Path<i64>,
    Json(form): Json<WorkingHoursForm>,
) -> AppResult<StatusCode> {
    ensure_owned(&client, id).await?;
    client.restaurants().update_working_hours(id, &form).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /owner/orders
pub async fn orders(Api { client, .. }: Api) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(client.owner().owner_orders().await?))
}

/// PUT /owner/orders/{id}
pub async fn update_order(
    Api { client, .. }: Api,
    Path(id): Path<i64>,
    Json(update): Json<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    let order = client.owner().update_order_status(id, update).await?;
    tracing::info!(order_id = id, status = order.status.as_str(), "order status updated");
    Ok(Json(order))
}

/// GET /owner/restaurants/{id}/menu
pub async fn restaurant_menu(Api { client, .. }: Api, Path(id): Path<i64>) -> AppResult<Json<Vec<MenuItem>>> {
    Ok(Json(client.owner().owner_restaurant_menu(id).await?))
}

/// PUT /owner/menu/{id}
pub async fn update_menu_item(
    Api { client, .. }: Api,
    Path(id): Path<i64>,
    Json(form): Json<MenuItemForm>,
) -> AppResult<Json<MenuItem>> {
    Ok(Json(client.owner().update_owner_menu_item(id, &form).await?))
}

/// DELETE /owner/menu/{id}
pub async fn delete_menu_item(Api { client, .. }: Api, Path(id): Path<i64>) -> AppResult<StatusCode> {
    client.owner().delete_owner_menu_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
