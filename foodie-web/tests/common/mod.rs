//! Mock backend for the web shell tests
//!
//! Serves the API routes the pages touch and counts hits by `METHOD path`.
//! Writes to records echo the posted body back; deletes answer 204.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::{Body, Bytes};
use axum::extract::{MatchedPath, Path, State};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use foodie_client::Transport;
use foodie_client::session::encode_unsigned_token;
use foodie_web::{AppState, Config, build_app};
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
    cart: Mutex<Vec<CartLine>>,
    next_cart_line: Mutex<i64>,
}

impl MockBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn hit(&self, route: &str) {
        *self.hits.lock().unwrap().entry(route.to_string()).or_default() += 1;
    }

    pub fn hits(&self, route: &str) -> usize {
        self.hits.lock().unwrap().get(route).copied().unwrap_or(0)
    }

    pub fn total_hits(&self) -> usize {
        self.hits.lock().unwrap().values().sum()
    }

    fn record(&self, route: &str, body: &Value) {
        self.bodies.lock().unwrap().push((route.to_string(), body.clone()));
    }

    /// Last body sent to `METHOD path`
    pub fn last_body(&self, route: &str) -> Option<Value> {
        self.bodies
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(r, _)| r == route)
            .map(|(_, b)| b.clone())
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

/// Twelve restaurants; Italian ones sit at ids 2, 10, 11 and 12, so three of
/// them fall past the first page of nine
pub fn restaurant(id: i64) -> Value {
    let cuisine = if matches!(id, 2 | 10 | 11 | 12) { "Italian, Pizza" } else { "Chinese" };
    let name = match id {
        11 => "Roma Trattoria".to_string(),
        12 => "Little Roma".to_string(),
        _ => format!("Restaurant {}", id),
    };
    json!({
        "id": id,
        "name": name,
        "address": format!("{} Main St", id),
        "cuisine": cuisine,
        "rating": id as f64 * 0.4,
        "is_active": true,
    })
}

/// Burger at $5.00 (id 1, Mains) and soup at $3.50 (id 2, Starters)
pub fn menu_item(id: i64) -> Value {
    let (name, price, category) = match id {
        1 => ("Burger", 5.0, "Mains"),
        2 => ("Soup", 3.5, "Starters"),
        _ => ("Special", 9.0, "Mains"),
    };
    json!({
        "id": id,
        "name": name,
        "description": format!("{} of the house", name),
        "price": price,
        "category": category,
        "is_available": true,
        "restaurant_id": 1,
    })
}

type Shared = State<Arc<MockBackend>>;

fn ok(data: Value) -> Json<Value> {
    Json(json!({"success": true, "message": "ok", "data": data}))
}

fn fail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"success": false, "message": message, "data": null}))).into_response()
}

async fn overview(State(b): Shared) -> Json<Value> {
    b.hit("GET /admin/overview");
    ok(json!({"total_users": 10, "total_orders": 42, "total_revenue": 1234.5, "active_restaurants": 3}))
}

async fn analytics(State(b): Shared) -> Json<Value> {
    b.hit("GET /admin/analytics");
    ok(json!({"daily_orders": [], "popular_items": [], "revenue_by_month": []}))
}

async fn me(State(b): Shared) -> Json<Value> {
    b.hit("GET /me");
    ok(json!({"id": 7, "name": "Casey", "email": "user7@example.com", "role": "customer"}))
}

async fn user_orders(State(b): Shared) -> Json<Value> {
    b.hit("GET /orders/user");
    ok(json!([]))
}

async fn addresses(State(b): Shared) -> Json<Value> {
    b.hit("GET /addresses");
    ok(json!([]))
}

async fn categories(State(b): Shared) -> Json<Value> {
    b.hit("GET /categories");
    ok(json!([{"id": 1, "name": "Pizza", "description": "Stone baked", "is_active": true}]))
}

async fn create_category(State(b): Shared, Json(body): Json<Value>) -> Response {
    b.hit("POST /categories");
    (StatusCode::CREATED, ok(json!({"id": 2, "name": body["name"], "description": body["description"], "is_active": true})))
        .into_response()
}

async fn list_restaurants(State(b): Shared) -> Json<Value> {
    b.hit("GET /restaurants");
    ok(Value::Array((1..=12).map(restaurant).collect()))
}

async fn cuisines(State(b): Shared) -> Json<Value> {
    b.hit("GET /cuisines");
    ok(json!([
        {"id": 1, "name": "Italian", "description": "Pasta and pizza"},
        {"id": 2, "name": "Chinese", "description": "Noodles and dumplings"}
    ]))
}

async fn get_cuisine(State(b): Shared, Path(id): Path<i64>) -> Response {
    b.hit("GET /cuisines/{id}");
    match id {
        1 => ok(json!({"id": 1, "name": "Italian", "description": "Pasta and pizza"})).into_response(),
        _ => fail(StatusCode::NOT_FOUND, "Cuisine not found"),
    }
}

async fn list_menu(State(b): Shared) -> Json<Value> {
    b.hit("GET /menu");
    ok(json!([menu_item(1), menu_item(2), menu_item(3)]))
}

async fn owner_restaurants(State(b): Shared) -> Json<Value> {
    b.hit("GET /owner/restaurants");
    ok(json!([restaurant(1)]))
}

async fn get_cart(State(b): Shared) -> Json<Value> {
    b.hit("GET /cart");
    ok(b.cart_json())
}

async fn add_to_cart(State(b): Shared, Json(body): Json<Value>) -> Response {
    b.hit("POST /cart/items");
    let menu_item_id = body["menu_item_id"].as_i64().unwrap_or(0);
    let quantity = body["quantity"].as_u64().unwrap_or(1) as u32;
    {
        let mut cart = b.cart.lock().unwrap();
        match cart.iter_mut().find(|l| l.menu_item_id == menu_item_id) {
            Some(line) => line.quantity += quantity,
            None => {
                let mut next = b.next_cart_line.lock().unwrap();
                *next += 1;
                cart.push(CartLine { id: *next, menu_item_id, quantity });
            }
        }
    }
    (StatusCode::CREATED, ok(b.cart_json())).into_response()
}

async fn update_cart_item(State(b): Shared, Path(id): Path<i64>, Json(body): Json<Value>) -> Response {
    b.hit("PUT /cart/items/{id}");
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

async fn remove_from_cart(State(b): Shared, Path(id): Path<i64>) -> Response {
    b.hit("DELETE /cart/items/{id}");
    b.cart.lock().unwrap().retain(|l| l.id != id);
    StatusCode::NO_CONTENT.into_response()
}

/// Echo a record write: the body plus the id from the path and the fields
/// every record type needs
async fn echo(
    State(b): Shared,
    method: Method,
    matched: MatchedPath,
    Path(params): Path<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    let path = matched.as_str().strip_prefix("/api").unwrap_or(matched.as_str());
    let route = format!("{} {}", method, path);
    b.hit(&route);
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    b.record(&route, &body);

    if method == Method::DELETE {
        return StatusCode::NO_CONTENT.into_response();
    }
    let id: i64 = params
        .get("menu_id")
        .or_else(|| params.get("id"))
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let mut record = json!({"restaurant_id": 1, "role": "customer", "is_active": true});
    if let (Some(fields), Some(sent)) = (record.as_object_mut(), body.as_object()) {
        fields.extend(sent.clone());
        fields.insert("id".into(), json!(id));
    }
    ok(record).into_response()
}

async fn update_me(State(b): Shared, Json(body): Json<Value>) -> Json<Value> {
    b.hit("PUT /me");
    b.record("PUT /me", &body);
    ok(json!({"id": 7, "name": body["name"], "email": body["email"], "phone": body["phone"], "role": "customer"}))
}

async fn login(State(b): Shared, Json(body): Json<Value>) -> Response {
    b.hit("POST /login");
    if body["password"] != "secret1" {
        return fail(StatusCode::UNAUTHORIZED, "Invalid email or password");
    }
    ok(json!({"access": token_for(Role::Customer, 7), "refresh": "refresh-token"})).into_response()
}

/// Mock API under `/api`
pub fn router(backend: Arc<MockBackend>) -> Router {
    let api = Router::new()
        .route("/admin/overview", get(overview))
        .route("/admin/analytics", get(analytics))
        .route("/me", get(me).put(update_me))
        .route("/orders/user", get(user_orders))
        .route("/addresses", get(addresses))
        .route("/addresses/{id}", put(echo).delete(echo))
        .route("/categories", get(categories).post(create_category))
        .route("/categories/{id}", put(echo))
        .route("/cuisines", get(cuisines))
        .route("/cuisines/{id}", get(get_cuisine).put(echo))
        .route("/restaurants", get(list_restaurants))
        .route("/restaurants/{id}", put(echo).delete(echo))
        .route("/restaurants/{id}/working-hours", put(echo))
        .route("/restaurants/{id}/menu/{menu_id}", put(echo))
        .route("/menu", get(list_menu))
        .route("/menu/{id}", delete(echo))
        .route("/owner/restaurants", get(owner_restaurants))
        .route("/cart", get(get_cart))
        .route("/cart/items", post(add_to_cart))
        .route("/cart/items/{id}", put(update_cart_item).delete(remove_from_cart))
        .route("/login", post(login))
        .with_state(backend);
    Router::new().nest("/api", api)
}

/// Web app wired to a fresh mock backend
pub fn app() -> (Router, Arc<MockBackend>) {
    let backend = MockBackend::new();
    let state = AppState::with_transport(
        Config::default(),
        Transport::in_process(router(backend.clone())),
    );
    (build_app(state), backend)
}

pub fn token_with_exp(role: Role, id: i64, exp: i64) -> String {
    let claims = SessionClaims {
        id,
        email: format!("user{}@example.com", id),
        role,
        exp,
    };
    encode_unsigned_token(&claims).unwrap()
}

/// Unsigned token for `role`, valid for an hour
pub fn token_for(role: Role, id: i64) -> String {
    token_with_exp(role, id, chrono::Utc::now().timestamp() + 3600)
}

/// GET `uri` carrying `token` in the session cookie
pub fn get_with_cookie(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("foodie_session={}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("foodie_session={}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
