//! Order Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order status; transitions are decided by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Delivered and cancelled orders accept no further transitions
    pub fn is_final(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// Payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

/// Menu item snapshot on an order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderMenuItem {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
}

/// One order line; `price` is the unit price charged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    #[serde(default)]
    pub order_id: Option<i64>,
    pub menu_item_id: i64,
    #[serde(default)]
    pub menu_item: Option<OrderMenuItem>,
    pub quantity: u32,
    pub price: Decimal,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub restaurant_id: i64,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub delivery_address: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Owner-side status change request body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
}

/// Orders newest first, at most `limit`
pub fn recent_orders(orders: &[Order], limit: usize) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let update = OrderStatusUpdate {
            status: OrderStatus::Preparing,
            payment_status: PaymentStatus::Paid,
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"status":"preparing","payment_status":"paid"}"#
        );
        assert!(OrderStatus::Cancelled.is_final());
        assert!(!OrderStatus::Ready.is_final());
    }

    #[test]
    fn test_recent_orders() {
        let json = r#"[
            {"id":1,"user_id":1,"restaurant_id":1,"total_amount":10,"status":"pending","payment_status":"pending","created_at":"2024-01-01T00:00:00Z"},
            {"id":2,"user_id":1,"restaurant_id":1,"total_amount":12.5,"status":"delivered","payment_status":"paid","created_at":"2024-03-01T00:00:00Z"},
            {"id":3,"user_id":1,"restaurant_id":2,"total_amount":7,"status":"ready","payment_status":"paid","created_at":"2024-02-01T00:00:00Z"}
        ]"#;
        let orders: Vec<Order> = serde_json::from_str(json).unwrap();
        let ids: Vec<i64> = recent_orders(&orders, 2).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
