//! Delivery Address Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery address entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    /// e.g. "Home", "Work"
    pub label: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Address {
    /// Single-line form used as an order's delivery address
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.street, self.city, self.state, self.postal_code
        )
    }
}

/// The default address, else the first one
pub fn default_address(addresses: &[Address]) -> Option<&Address> {
    addresses
        .iter()
        .find(|a| a.is_default)
        .or_else(|| addresses.first())
}
