//! Cart Model
//!
//! The cart total is never stored; it is derived from the items every time
//! the cart is (re)fetched.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Shopping cart of one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Menu item snapshot embedded in a cart line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartMenuItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub restaurant_id: Option<i64>,
}

fn default_true() -> bool {
    true
}

/// One cart line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i64,
    #[serde(default)]
    pub cart_id: Option<i64>,
    pub menu_item_id: i64,
    pub menu_item: CartMenuItem,
    pub quantity: u32,
}

impl CartItem {
    /// quantity x unit price
    pub fn line_total(&self) -> Decimal {
        self.menu_item.price * Decimal::from(self.quantity)
    }
}

impl Cart {
    /// Sum of quantity x unit price over all lines, rounded to cents
    pub fn subtotal(&self) -> Decimal {
        round_cents(self.items.iter().map(CartItem::line_total).sum())
    }

    /// Total number of units in the cart
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, i| total.saturating_add(i.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find_item(&self, cart_item_id: i64) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == cart_item_id)
    }
}

/// Add-to-cart request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AddToCart {
    pub menu_item_id: i64,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
}

/// Quantity change request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdateCartItem {
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
}

/// Round half away from zero to two decimal places
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as dollars, e.g. `$13.50`
pub fn format_price(amount: Decimal) -> String {
    let rounded = round_cents(amount);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${:.2}", rounded.abs())
    } else {
        format!("${:.2}", rounded.abs())
    }
}
