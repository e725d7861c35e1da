//! Storefront handlers

use axum::{
    Json,
    extract::{Path, RawQuery},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::filters::{QueryParams, parse_query, stringify_url};
use shared::forms::CheckoutForm;
use shared::models::{
    AddToCart, Cart, Category, Cuisine, MenuItem, Order, Restaurant, RestaurantFilter, UpdateCartItem,
    WorkingHours, filter_by_category, format_price,
};
use shared::{PaginatedResponse, PaginationQuery, paginate};

use crate::routes::{FilterLink, filter_links};
use crate::auth::Api;
use crate::{AppError, AppResult};

fn query_params(raw: Option<String>) -> QueryParams {
    raw.as_deref().map(parse_query).unwrap_or_default()
}

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub restaurants: Vec<Restaurant>,
    pub cuisines: Vec<Cuisine>,
    pub categories: Vec<Category>,
}

/// GET / - featured restaurants and browse links
pub async fn home(Api { client, .. }: Api) -> AppResult<Json<HomePage>> {
    let (restaurants, cuisines, categories) = tokio::join!(
        client.restaurants().list_restaurants(PaginationQuery::default()).into_future(),
        client.cuisines().list_cuisines().into_future(),
        client.categories().list_categories().into_future(),
    );
    Ok(Json(HomePage {
        restaurants: restaurants?.data,
        cuisines: cuisines?,
        categories: categories?,
    }))
}

/// Minimum-rating choices offered on the restaurants page
const RATING_STEPS: [&str; 3] = ["3", "4", "4.5"];

#[derive(Debug, Serialize)]
pub struct RestaurantsPage {
    pub restaurants: PaginatedResponse<Restaurant>,
    pub cuisine_filters: Vec<FilterLink>,
    pub rating_filters: Vec<FilterLink>,
    /// Current name search, if any
    pub search: Option<String>,
    /// Same page without the name search
    pub clear_search_url: String,
}

/// GET /restaurants?page&limit&cuisine&q&min_rating
///
/// Filters apply to the whole list; paging runs on what is left.
pub async fn restaurants(Api { client, .. }: Api, RawQuery(raw): RawQuery) -> AppResult<Json<RestaurantsPage>> {
    let params = query_params(raw);
    let paging = PaginationQuery::from_raw(
        params.get("page").map(String::as_str),
        params.get("limit").map(String::as_str),
    );

    let (all, cuisines) = tokio::join!(
        client.restaurants().list_all_restaurants().into_future(),
        client.cuisines().list_cuisines().into_future(),
    );
    let filter = RestaurantFilter::from_params(&params);
    let matching = filter.apply(all?);
    let cuisines = cuisines?;

    // A filter change starts over at page one
    let mut base = params.clone();
    base.remove("page");
    let mut without_search = base.clone();
    without_search.remove("q");

    Ok(Json(RestaurantsPage {
        restaurants: paginate(&matching, paging.page, paging.limit),
        cuisine_filters: filter_links(
            "/restaurants",
            &base,
            "cuisine",
            cuisines.iter().map(|c| c.name.as_str()),
        ),
        rating_filters: filter_links("/restaurants", &base, "min_rating", RATING_STEPS),
        search: filter.search,
        clear_search_url: stringify_url("/restaurants", &without_search),
    }))
}

#[derive(Debug, Serialize)]
pub struct RestaurantPage {
    pub restaurant: Restaurant,
    pub menu: Vec<MenuItem>,
    pub working_hours: Vec<WorkingHours>,
}

/// GET /restaurants/{id}
pub async fn restaurant(Api { client, .. }: Api, Path(id): Path<i64>) -> AppResult<Json<RestaurantPage>> {
    let (restaurant, menu) = tokio::join!(
        client.restaurants().get_restaurant(id).into_future(),
        client.menus().list_restaurant_menu(id).into_future(),
    );
    let restaurant = restaurant?;
    let working_hours = restaurant.sorted_working_hours();
    Ok(Json(RestaurantPage {
        restaurant,
        menu: menu?,
        working_hours,
    }))
}

#[derive(Debug, Serialize)]
pub struct MenuPage {
    pub items: Vec<MenuItem>,
    pub category_filters: Vec<FilterLink>,
}

/// GET /menu?category
pub async fn menu(Api { client, .. }: Api, RawQuery(raw): RawQuery) -> AppResult<Json<MenuPage>> {
    let params = query_params(raw);
    let (items, categories) = tokio::join!(
        client.menus().list_menu_items().into_future(),
        client.categories().list_categories().into_future(),
    );
    let items = items?;
    let categories = categories?;

    let selected = params.get("category").map(String::as_str);
    Ok(Json(MenuPage {
        items: filter_by_category(&items, selected).into_iter().cloned().collect(),
        category_filters: filter_links(
            "/menu",
            &params,
            "category",
            categories.iter().map(|c| c.name.as_str()),
        ),
    }))
}

/// GET /menu/{id}
pub async fn menu_item(Api { client, .. }: Api, Path(id): Path<i64>) -> AppResult<Json<MenuItem>> {
    Ok(Json(client.menus().get_menu_item(id).await?))
}

#[derive(Debug, Serialize)]
pub struct CuisinePage {
    pub cuisine: Cuisine,
    pub restaurants: Vec<Restaurant>,
}

/// GET /cuisines/{id} - restaurants serving one cuisine
pub async fn cuisine(Api { client, .. }: Api, Path(id): Path<i64>) -> AppResult<Json<CuisinePage>> {
    let (cuisine, all) = tokio::join!(
        client.cuisines().get_cuisine(id).into_future(),
        client.restaurants().list_all_restaurants().into_future(),
    );
    let cuisine = cuisine?;
    let filter = RestaurantFilter {
        cuisine: Some(cuisine.name.clone()),
        ..RestaurantFilter::default()
    };
    let restaurants = filter.apply(all?);
    Ok(Json(CuisinePage { cuisine, restaurants }))
}

/// Cart line with its derived total
#[derive(Debug, Clone, Serialize)]
pub struct CartLine {
    pub id: i64,
    pub menu_item_id: i64,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

/// Cart as shown to the customer; totals are derived, never stored
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartLine>,
    pub item_count: u32,
    pub subtotal: Decimal,
    pub subtotal_display: String,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let subtotal = cart.subtotal();
        Self {
            items: cart
                .items
                .iter()
                .map(|item| CartLine {
                    id: item.id,
                    menu_item_id: item.menu_item_id,
                    name: item.menu_item.name.clone(),
                    quantity: item.quantity,
                    unit_price: format_price(item.menu_item.price),
                    line_total: format_price(item.line_total()),
                })
                .collect(),
            item_count: cart.item_count(),
            subtotal,
            subtotal_display: format_price(subtotal),
        }
    }
}

/// GET /cart
pub async fn cart(Api { client, .. }: Api) -> AppResult<Json<CartView>> {
    let cart = client.cart().get_cart().await?;
    Ok(Json(CartView::from(&cart)))
}

/// POST /cart/items
pub async fn add_to_cart(Api { client, .. }: Api, Json(body): Json<AddToCart>) -> AppResult<Json<CartView>> {
    client.cart().add_to_cart(body.menu_item_id, body.quantity).await?;
    let cart = client.cart().get_cart().await?;
    Ok(Json(CartView::from(&cart)))
}

/// PUT /cart/items/{id}
pub async fn update_cart_item(
    Api { client, .. }: Api,
    Path(id): Path<i64>,
    Json(body): Json<UpdateCartItem>,
) -> AppResult<Json<CartView>> {
    client.cart().update_cart_item(id, body.quantity).await?;
    let cart = client.cart().get_cart().await?;
    Ok(Json(CartView::from(&cart)))
}

/// DELETE /cart/items/{id}
pub async fn remove_from_cart(Api { client, .. }: Api, Path(id): Path<i64>) -> AppResult<Json<CartView>> {
    client.cart().remove_from_cart(id).await?;
    let cart = client.cart().get_cart().await?;
    Ok(Json(CartView::from(&cart)))
}

/// POST /checkout - place an order for the current cart
pub async fn checkout(
    Api { client, session }: Api,
    Json(form): Json<CheckoutForm>,
) -> AppResult<(StatusCode, Json<Order>)> {
    if session.is_none() {
        return Err(AppError::Unauthorized);
    }
    let cart = client.cart().get_cart().await?;
    if cart.is_empty() {
        return Err(AppError::Invalid("Your cart is empty".into()));
    }

    let order = client.orders().create_order(&form).await?;
    tracing::info!(order_id = order.id, total = %order.total_amount, "order placed");
    Ok((StatusCode::CREATED, Json(order)))
}
