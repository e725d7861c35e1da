//! Restaurant Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MenuItem;
use crate::filters::QueryParams;

/// Restaurant entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    /// Comma-separated cuisine names
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, alias = "isActive")]
    pub is_active: bool,
    /// Owning user
    #[serde(default, alias = "userId")]
    pub user_id: Option<i64>,

    // -- Relations (populated on detail responses) --
    #[serde(default, alias = "menuItems")]
    pub menu_items: Vec<MenuItem>,
    #[serde(default)]
    pub working_hours: Vec<WorkingHours>,

    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Restaurant {
    /// Cuisine names, trimmed
    pub fn cuisines(&self) -> Vec<&str> {
        self.cuisine
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect()
    }

    /// Working hours ordered Sunday first
    pub fn sorted_working_hours(&self) -> Vec<WorkingHours> {
        let mut hours = self.working_hours.clone();
        hours.sort_by_key(|h| h.day_of_week);
        hours
    }
}

/// Opening hours for one weekday (0 = Sunday)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub day_of_week: u8,
    /// `HH:MM`
    pub open_time: String,
    /// `HH:MM`
    pub close_time: String,
    #[serde(default)]
    pub is_closed: bool,
}

impl WorkingHours {
    /// Default week: every day 09:00-17:00, open
    pub fn default_week() -> Vec<WorkingHours> {
        (0..7)
            .map(|day| WorkingHours {
                day_of_week: day,
                open_time: "09:00".to_string(),
                close_time: "17:00".to_string(),
                is_closed: false,
            })
            .collect()
    }
}

/// Storefront restaurant filters, read from `cuisine`, `q` and `min_rating`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantFilter {
    pub cuisine: Option<String>,
    /// Case-insensitive substring of the name
    pub search: Option<String>,
    pub min_rating: Option<f32>,
}

impl RestaurantFilter {
    /// Blank values and unparsable ratings are ignored
    pub fn from_params(params: &QueryParams) -> Self {
        let non_empty = |key: &str| {
            params
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        Self {
            cuisine: non_empty("cuisine"),
            search: non_empty("q"),
            min_rating: non_empty("min_rating").and_then(|v| v.parse().ok()),
        }
    }

    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        let cuisine_ok = self.cuisine.as_deref().is_none_or(|wanted| {
            restaurant
                .cuisines()
                .iter()
                .any(|c| c.eq_ignore_ascii_case(wanted))
        });
        let search_ok = self.search.as_deref().is_none_or(|term| {
            restaurant
                .name
                .to_lowercase()
                .contains(&term.to_lowercase())
        });
        let rating_ok = self.min_rating.is_none_or(|min| restaurant.rating >= min);
        cuisine_ok && search_ok && rating_ok
    }

    /// Matching restaurants, in their original order
    pub fn apply(&self, restaurants: Vec<Restaurant>) -> Vec<Restaurant> {
        restaurants.into_iter().filter(|r| self.matches(r)).collect()
    }
}
