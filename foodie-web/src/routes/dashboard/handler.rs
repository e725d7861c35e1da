//! Customer dashboard handlers

use axum::{Json, extract::Path, http::StatusCode};
use serde::Serialize;
use shared::forms::{AddressForm, ProfileForm};
use shared::models::{Address, Order, User, default_address, recent_orders};

use crate::AppResult;
use crate::auth::Api;

const RECENT_ORDERS: usize = 3;

#[derive(Debug, Serialize)]
pub struct CustomerDashboard {
    pub profile: User,
    pub recent_orders: Vec<Order>,
    pub default_address: Option<Address>,
}

/// GET /dashboard
pub async fn dashboard(Api { client, .. }: Api) -> AppResult<Json<CustomerDashboard>> {
    let (profile, orders, addresses) = tokio::join!(
        client.users().me().into_future(),
        client.orders().list_user_orders().into_future(),
        client.addresses().list_addresses().into_future(),
    );
    let addresses = addresses?;
    Ok(Json(CustomerDashboard {
        profile: profile?,
        recent_orders: recent_orders(&orders?, RECENT_ORDERS),
        default_address: default_address(&addresses).cloned(),
    }))
}

/// GET /dashboard/orders
pub async fn orders(Api { client, .. }: Api) -> AppResult<Json<Vec<Order>>> {
    let orders = client.orders().list_user_orders().await?;
    Ok(Json(recent_orders(&orders, orders.len())))
}

/// GET /dashboard/addresses
pub async fn addresses(Api { client, .. }: Api) -> AppResult<Json<Vec<Address>>> {
    Ok(Json(client.addresses().list_addresses().await?))
}

/// POST /dashboard/addresses
pub async fn create_address(
    Api { client, .. }: Api,
    Json(form): Json<AddressForm>,
) -> AppResult<(StatusCode, Json<Address>)> {
    let address = client.addresses().create_address(&form).await?;
    Ok((StatusCode::CREATED, Json(address)))
}

/// PUT /dashboard/addresses/{id}
pub async fn update_address(
    Api { client, .. }: Api,
    Path(id): Path<i64>,
    Json(form): Json<AddressForm>,
) -> AppResult<Json<Address>> {
    Ok(Json(client.addresses().update_address(id, &form).await?))
}

/// DELETE /dashboard/addresses/{id}
pub async fn delete_address(Api { client, .. }: Api, Path(id): Path<i64>) -> AppResult<StatusCode> {
    client.addresses().delete_address(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /dashboard/profile
pub async fn profile(Api { client, .. }: Api) -> AppResult<Json<User>> {
    Ok(Json(client.users().me().await?))
}

/// PUT /dashboard/profile
pub async fn update_profile(Api { client, .. }: Api, Json(form): Json<ProfileForm>) -> AppResult<Json<User>> {
    let user = client.users().update_me(&form).await?;
    tracing::info!(user_id = user.id, "profile updated");
    Ok(Json(user))
}
