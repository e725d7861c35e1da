//! In-process mock backend for the integration tests
//!
//! Mirrors the backend envelope and counts every request by `METHOD path`.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use foodie_client::session::encode_unsigned_token;
use foodie_client::{FoodieClient, MemorySession, Session};
use serde_json::{Value, json};
use shared::auth::SessionClaims;
use shared::models::Role;

#[derive(Debug, Clone)]
struct CartLine {
    id: i64,
    menu_item_id: i64,
    quantity: u32,
}

#[derive(Default)]
pub struct MockBackend {
    hits: Mutex<HashMap<String, usize>>,
    bodies: Mutex<Vec<(String, Value)>>,
    auth: Mutex<Vec<Option<String>>>,
    restaurants: Mutex<Vec<Value>>,
    cart: Mutex<Vec<CartLine>>,
    next_id: AtomicUsize,
    pub fail_cuisines: AtomicBool,
    orders_calls: AtomicUsize,
}

impl MockBackend {
    pub fn new() -> Arc<Self> {
        let backend = Self::default();
        backend.next_id.store(100, Ordering::SeqCst);
        *backend.restaurants.lock().unwrap() = (1..=12)
            .map(|i| restaurant(i, &format!("Restaurant {}", i)))
            .collect();
        Arc::new(backend)
    }

    fn hit(&self, route: &str, headers: &HeaderMap) {
        *self.hits.lock().unwrap().entry(route.to_string()).or_default() += 1;
        let auth = headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string);
        self.auth.lock().unwrap().push(auth);
    }

    fn record(&self, route: &str, body: &Value) {
        self.bodies.lock().unwrap().push((route.to_string(), body.clone()));
    }

    /// Requests seen for `METHOD path`
    pub fn hits(&self, route: &str) -> usize {
        self.hits.lock().unwrap().get(route).copied().unwrap_or(0)
    }

    /// Total requests seen
    pub fn total_hits(&self) -> usize {
        self.hits.lock().unwrap().values().sum()
    }

    /// Bodies posted to `METHOD path`
    pub fn bodies(&self, route: &str) -> Vec<Value> {
        self.bodies
            .lock()
            .unwrap()
            .iter()
            .filter(|(r, _)| r == route)
            .map(|(_, b)| b.clone())
            .collect()
    }

    /// Authorization header of the last request
    pub fn last_auth(&self) -> Option<String> {
        self.auth.lock().unwrap().last().cloned().flatten()
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) as i64
    }

    fn cart_json(&self) -> Value {
        let items: Vec<Value> = self
            .cart
            .lock()
            .unwrap()
            .iter()
            .map(|line| {
                json!({
                    "id": line.id,
                    "cart_id": 1,
                    "menu_item_id": line.menu_item_id,
                    "quantity": line.quantity,
                    "menu_item": menu_item(line.menu_item_id),
                })
            })
            .collect();
        json!({"id": 1, "user_id": 7, "items": items})
    }
}

fn ok(data: Value) -> Json<Value> {
    Json(json!({"success": true, "message": "ok", "data": data}))
}

fn fail(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({"success": false, "message": message, "errors": [{"message": message}]})),
    )
        .into_response()
}

pub fn restaurant(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": "Fresh food daily",
        "address": "1 Main Street",
        "cuisine": "Italian",
        "is_active": true,
    })
}

/// Fixed menu: 1 = Burger $5.00, 2 = Fries $3.50
pub fn menu_item(id: i64) -> Value {
    let (name, price) = match id {
        1 => ("Burger", 5.0),
        2 => ("Fries", 3.5),
        _ => ("Soda", 1.25),
    };
    json!({
        "id": id,
        "name": name,
        "description": "House special",
        "price": price,
        "category": "Mains",
        "is_available": true,
        "restaurant_id": 1,
    })
}

async fn list_restaurants(State(b): State<Arc<MockBackend>>, headers: HeaderMap) -> Json<Value> {
    b.hit("GET /restaurants", &headers);
    ok(Value::Array(b.restaurants.lock().unwrap().clone()))
}

async fn create_restaurant(
    State(b): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    b.hit("POST /restaurants", &headers);
    b.record("POST /restaurants", &body);
    let name = body["name"].as_str().unwrap_or_default().to_string();
    let created = restaurant(b.next_id(), &name);
    b.restaurants.lock().unwrap().push(created.clone());
    ok(created)
}

async fn list_categories(State(b): State<Arc<MockBackend>>, headers: HeaderMap) -> Json<Value> {
    b.hit("GET /categories", &headers);
    ok(json!([]))
}

async fn create_category(
    State(b): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    b.hit("POST /categories", &headers);
    b.record("POST /categories", &body);
    let mut created = body.clone();
    created["id"] = json!(b.next_id());
    ok(created)
}

async fn list_cuisines(State(b): State<Arc<MockBackend>>, headers: HeaderMap) -> Response {
    b.hit("GET /cuisines", &headers);
    if b.fail_cuisines.load(Ordering::SeqCst) {
        return fail(StatusCode::INTERNAL_SERVER_ERROR, "database unavailable");
    }
    ok(json!([{"id": 1, "name": "Thai", "description": "Spicy", "is_active": true}])).into_response()
}

async fn get_menu_item(
    State(b): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Json<Value> {
    b.hit("GET /menu/{id}", &headers);
    tokio::time::sleep(Duration::from_millis(50)).await;
    ok(menu_item(id))
}

async fn get_cart(State(b): State<Arc<MockBackend>>, headers: HeaderMap) -> Json<Value> {
    b.hit("GET /cart", &headers);
    ok(b.cart_json())
}

async fn add_to_cart(
    State(b): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    b.hit("POST /cart/items", &headers);
    b.record("POST /cart/items", &body);
    let line = CartLine {
        id: b.next_id(),
        menu_item_id: body["menu_item_id"].as_i64().unwrap_or_default(),
        quantity: body["quantity"].as_u64().unwrap_or(1) as u32,
    };
    b.cart.lock().unwrap().push(line);
    ok(b.cart_json())
}

async fn update_cart_item(
    State(b): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    b.hit("PUT /cart/items/{id}", &headers);
    let found = {
        let mut cart = b.cart.lock().unwrap();
        match cart.iter_mut().find(|l| l.id == id) {
            Some(line) => {
                line.quantity = body["quantity"].as_u64().unwrap_or(1) as u32;
                true
            }
            None => false,
        }
    };
    if !found {
        return fail(StatusCode::NOT_FOUND, "Cart item not found");
    }
    ok(b.cart_json()).into_response()
}

async fn remove_from_cart(
    State(b): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    b.hit("DELETE /cart/items/{id}", &headers);
    let removed = {
        let mut cart = b.cart.lock().unwrap();
        let before = cart.len();
        cart.retain(|l| l.id != id);
        cart.len() != before
    };
    if !removed {
        return fail(StatusCode::NOT_FOUND, "Cart item not found");
    }
    StatusCode::NO_CONTENT.into_response()
}

/// First call is slow and returns the old list, later calls are immediate
async fn list_user_orders(State(b): State<Arc<MockBackend>>, headers: HeaderMap) -> Json<Value> {
    b.hit("GET /orders/user", &headers);
    let call = b.orders_calls.fetch_add(1, Ordering::SeqCst);
    if call == 0 {
        tokio::time::sleep(Duration::from_millis(200)).await;
        ok(json!([{"id": 1, "user_id": 7, "restaurant_id": 1, "total_amount": 10.0,
                   "status": "pending", "payment_status": "pending"}]))
    } else {
        ok(json!([{"id": 1, "user_id": 7, "restaurant_id": 1, "total_amount": 10.0,
                   "status": "delivered", "payment_status": "paid"}]))
    }
}

async fn me(State(b): State<Arc<MockBackend>>, headers: HeaderMap) -> Response {
    b.hit("GET /me", &headers);
    if headers.get(header::AUTHORIZATION).is_none() {
        return fail(StatusCode::UNAUTHORIZED, "Authorization header required");
    }
    ok(json!({"id": 7, "name": "Casey", "email": "casey@example.com", "role": "user"})).into_response()
}

async fn login(
    State(b): State<Arc<MockBackend>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    b.hit("POST /login", &headers);
    if body["password"] != "secret1" {
        return fail(StatusCode::UNAUTHORIZED, "Invalid email or password");
    }
    let token = token_for(Role::Customer, 7);
    ok(json!({"access": token, "refresh": "refresh-token"})).into_response()
}

/// Router serving the mock API under `/api`
pub fn router(backend: Arc<MockBackend>) -> Router {
    let api = Router::new()
        .route("/restaurants", get(list_restaurants).post(create_restaurant))
        .route("/categories", get(list_categories).post(create_category))
        .route("/cuisines", get(list_cuisines))
        .route("/menu/{id}", get(get_menu_item))
        .route("/cart", get(get_cart))
        .route("/cart/items", post(add_to_cart))
        .route("/cart/items/{id}", put(update_cart_item).delete(remove_from_cart))
        .route("/orders/user", get(list_user_orders))
        .route("/me", get(me))
        .route("/login", post(login))
        .with_state(backend);
    Router::new().nest("/api", api)
}

/// Unsigned token for `role`, valid for an hour
pub fn token_for(role: Role, id: i64) -> String {
    let claims = SessionClaims {
        id,
        email: format!("user{}@example.com", id),
        role,
        exp: chrono::Utc::now().timestamp() + 3600,
    };
    encode_unsigned_token(&claims).unwrap()
}

/// Client for a signed-in customer plus the backend it talks to
pub fn signed_in_client() -> (FoodieClient, Arc<MockBackend>) {
    let backend = MockBackend::new();
    let session = Session::from_tokens(token_for(Role::Customer, 7), None).unwrap();
    let client = FoodieClient::in_process(
        router(backend.clone()),
        Arc::new(MemorySession::with_session(session)),
    );
    (client, backend)
}
