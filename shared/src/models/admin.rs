//! Admin dashboard report models (read-only aggregates computed server-side)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminOverview {
    pub total_users: u64,
    pub total_orders: u64,
    pub total_revenue: Decimal,
    pub active_restaurants: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyOrderStats {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularItem {
    pub name: String,
    pub order_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: String,
    pub revenue: Decimal,
}

/// Chart series for the analytics page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminAnalytics {
    #[serde(default)]
    pub daily_orders: Vec<DailyOrderStats>,
    #[serde(default)]
    pub popular_items: Vec<PopularItem>,
    #[serde(default)]
    pub revenue_by_month: Vec<MonthlyRevenue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportUser {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRestaurant {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReport {
    pub id: i64,
    pub user_id: i64,
    pub restaurant_id: i64,
    pub total_amount: Decimal,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub user: ReportUser,
    pub restaurant: ReportRestaurant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserActivity {
    pub name: String,
    pub order_count: u64,
    pub total_spent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantStat {
    pub name: String,
    pub order_count: u64,
    pub avg_rating: f32,
    pub total_revenue: Decimal,
}

/// Tables for the reports page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminReport {
    #[serde(default)]
    pub recent_orders: Vec<OrderReport>,
    #[serde(default)]
    pub user_activity: Vec<UserActivity>,
    #[serde(default)]
    pub restaurant_stats: Vec<RestaurantStat>,
}
