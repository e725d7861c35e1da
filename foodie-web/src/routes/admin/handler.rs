//! Admin handlers

use axum::{
    Json,
    extract::{Path, RawQuery},
    http::StatusCode,
};
use serde::Serialize;
use shared::filters::parse_query;
use shared::forms::{CategoryForm, CuisineForm, MenuItemForm, RestaurantForm};
use shared::models::{
    AdminAnalytics, AdminOverview, AdminReport, Category, Cuisine, Customer, MenuItem, Restaurant, User,
};
use shared::{PaginatedResponse, PaginationQuery};

use crate::AppResult;
use crate::auth::Api;

type Created<T> = (StatusCode, Json<T>);

#[derive(Debug, Serialize)]
pub struct AdminDashboard {
    pub overview: AdminOverview,
    pub analytics: AdminAnalytics,
}

/// GET /admin
pub async fn dashboard(Api { client, .. }: Api) -> AppResult<Json<AdminDashboard>> {
    let (overview, analytics) = tokio::join!(
        client.admin().overview().into_future(),
        client.admin().analytics().into_future(),
    );
    Ok(Json(AdminDashboard {
        overview: overview?,
        analytics: analytics?,
    }))
}

/// GET /admin/users
pub async fn users(Api { client, .. }: Api) -> AppResult<Json<Vec<User>>> {
    Ok(Json(client.users().list_users().await?))
}

/// GET /admin/customers
pub async fn customers(Api { client, .. }: Api) -> AppResult<Json<Vec<Customer>>> {
    Ok(Json(client.customers().list_customers().await?))
}

/// GET /admin/categories
pub async fn categories(Api { client, .. }: Api) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(client.categories().list_categories().await?))
}

/// POST /admin/categories
pub async fn create_category(
    Api { client, .. }: Api,
    Json(form): Json<CategoryForm>,
) -> AppResult<Created<Category>> {
    let category = client.categories().create_category(&form).await?;
    tracing::info!(category_id = category.id, name = %category.name, "category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /admin/categories/{id}
pub async fn update_category(
    Api { client, .. }: Api,
    Path(id): Path<i64>,
    Json(form): Json<CategoryForm>,
) -> AppResult<Json<Category>> {
    let category = client.categories().update_category(id, &form).await?;
    tracing::info!(category_id = id, "category updated");
    Ok(Json(category))
}

/// GET /admin/cuisines
pub async fn cuisines(Api { client, .. }: Api) -> AppResult<Json<Vec<Cuisine>>> {
    Ok(Json(client.cuisines().list_cuisines().await?))
}

/// POST /admin/cuisines
pub async fn create_cuisine(
    Api { client, .. }: Api,
    Json(form): Json<CuisineForm>,
) -> AppResult<Created<Cuisine>> {
    let cuisine = client.cuisines().create_cuisine(&form).await?;
    tracing::info!(cuisine_id = cuisine.id, name = %cuisine.name, "cuisine created");
    Ok((StatusCode::CREATED, Json(cuisine)))
}

/// PUT /admin/cuisines/{id}
pub async fn update_cuisine(
    Api { client, .. }: Api,
    Path(id): Path<i64>,
    Json(form): Json<CuisineForm>,
) -> AppResult<Json<Cuisine>> {
    let cuisine = client.cuisines().update_cuisine(id, &form).await?;
    tracing::info!(cuisine_id = id, "cuisine updated");
    Ok(Json(cuisine))
}

/// GET /admin/restaurants?page&limit
pub async fn restaurants(
    Api { client, .. }: Api,
    RawQuery(raw): RawQuery,
) -> AppResult<Json<PaginatedResponse<Restaurant>>> {
    let params = raw.as_deref().map(parse_query).unwrap_or_default();
    let paging = PaginationQuery::from_raw(
        params.get("page").map(String::as_str),
        params.get("limit").map(String::as_str),
    );
    Ok(Json(client.restaurants().list_restaurants(paging).await?))
}

/// POST /admin/restaurants
pub async fn create_restaurant(
    Api { client, .. }: Api,
    Json(form): Json<RestaurantForm>,
) -> AppResult<Created<Restaurant>> {
    let restaurant = client.restaurants().create_restaurant(&form).await?;
    tracing::info!(restaurant_id = restaurant.id, "restaurant created");
    Ok((StatusCode::CREATED, Json(restaurant)))
}

/// PUT /admin/restaurants/{id}
pub async fn update_restaurant(
    Api { client, .. }: Api,
    Path(id): Path<i64>,
    Json(form): Json<RestaurantForm>,
) -> AppResult<Json<Restaurant>> {
    let restaurant = client.restaurants().update_restaurant(id, &form).await?;
    tracing::info!(restaurant_id = id, "restaurant updated");
    Ok(Json(restaurant))
}

/// DELETE /admin/restaurants/{id}
pub async fn delete_restaurant(Api { client, .. }: Api, Path(id): Path<i64>) -> AppResult<StatusCode> {
    client.restaurants().delete_restaurant(id).await?;
    tracing::info!(restaurant_id = id, "restaurant deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /admin/restaurants/{id}/menu
pub async fn restaurant_menu(Api { client, .. }: Api, Path(id): Path<i64>) -> AppResult<Json<Vec<MenuItem>>> {
    Ok(Json(client.menus().list_restaurant_menu(id).await?))
}

/// POST /admin/restaurants/{id}/menu
pub async fn create_menu_item(
    Api { client, .. }: Api,
    Path(id): Path<i64>,
    Json(form): Json<MenuItemForm>,
) -> AppResult<Created<MenuItem>> {
    let item = client.menus().create_menu_item(id, &form).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /admin/restaurants/{id}/menu/{menu_id}
pub async fn update_menu_item(
    Api { client, .. }: Api,
    Path((restaurant_id, menu_id)): Path<(i64, i64)>,
    Json(form): Json<MenuItemForm>,
) -> AppResult<Json<MenuItem>> {
    Ok(Json(client.menus().update_menu_item(restaurant_id, menu_id, &form).await?))
}

/// DELETE /admin/menu/{id}
pub async fn delete_menu_item(Api { client, .. }: Api, Path(id): Path<i64>) -> AppResult<StatusCode> {
    client.menus().delete_menu_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /admin/reports
pub async fn reports(Api { client, .. }: Api) -> AppResult<Json<AdminReport>> {
    Ok(Json(client.admin().reports().await?))
}
