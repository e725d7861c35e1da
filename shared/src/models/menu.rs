//! Menu Item Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(alias = "restaurantId")]
    pub restaurant_id: i64,
    #[serde(default)]
    pub cuisine_id: Option<i64>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

/// Menu items whose category matches `category` (case-insensitive)
pub fn filter_by_category<'a>(items: &'a [MenuItem], category: Option<&str>) -> Vec<&'a MenuItem> {
    match category {
        Some(wanted) if !wanted.is_empty() => items
            .iter()
            .filter(|item| item.category.eq_ignore_ascii_case(wanted))
            .collect(),
        _ => items.iter().collect(),
    }
}
