//! User Model

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Account role, decides which route group a user may enter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Owner,
    Customer,
    /// Role string this client does not recognise; passes no gate
    Other(String),
}

impl Role {
    /// Parse a backend role string.
    ///
    /// The backend has used `restaurant_owner` and `user` as synonyms of
    /// `owner` and `customer`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            "owner" | "restaurant_owner" => Role::Owner,
            "customer" | "user" => Role::Customer,
            _ => Role::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Owner => "owner",
            Role::Customer => "customer",
            Role::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Role::parse(&raw))
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub role: Role,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

/// Customer row in the admin back office
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub last_order: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_orders: u32,
    #[serde(default)]
    pub total_spent: Decimal,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_synonyms() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("restaurant_owner"), Role::Owner);
        assert_eq!(Role::parse("Owner"), Role::Owner);
        assert_eq!(Role::parse("user"), Role::Customer);
        assert_eq!(Role::parse("moderator"), Role::Other("moderator".into()));
    }

    #[test]
    fn test_user_deserialize() {
        let json = r#"{"id":7,"name":"Ann","email":"ann@example.com","phone":"555","role":"restaurant_owner","created_at":"2024-05-01T10:00:00Z"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Owner);
        assert!(user.is_active);
        assert_eq!(serde_json::to_value(&user.role).unwrap(), "owner");
    }
}
