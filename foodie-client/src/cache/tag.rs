//! Cache tags and keys

use std::fmt;

use crate::http::ApiRequest;

/// Resource tag; reads provide one, writes invalidate one or more
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    User,
    Restaurant,
    MenuItem,
    Category,
    Cuisine,
    Cart,
    Order,
    Customer,
    Address,
    AdminReport,
    Owner,
}

impl Tag {
    pub const ALL: [Tag; 11] = [
        Tag::User,
        Tag::Restaurant,
        Tag::MenuItem,
        Tag::Category,
        Tag::Cuisine,
        Tag::Cart,
        Tag::Order,
        Tag::Customer,
        Tag::Address,
        Tag::AdminReport,
        Tag::Owner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::User => "User",
            Tag::Restaurant => "Restaurant",
            Tag::MenuItem => "MenuItem",
            Tag::Category => "Category",
            Tag::Cuisine => "Cuisine",
            Tag::Cart => "Cart",
            Tag::Order => "Order",
            Tag::Customer => "Customer",
            Tag::Address => "Address",
            Tag::AdminReport => "AdminReport",
            Tag::Owner => "Owner",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cache key: the provided tag plus the request identity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub tag: Tag,
    pub key: String,
}

impl QueryKey {
    pub fn new(tag: Tag, key: impl Into<String>) -> Self {
        Self { tag, key: key.into() }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.tag, self.key)
    }
}

/// A cacheable read: the request plus the key it is cached under
#[derive(Debug, Clone, PartialEq)]
pub struct QueryDef {
    pub key: QueryKey,
    pub request: ApiRequest,
}

impl QueryDef {
    /// Key the query by its method, path and query string
    pub fn new(tag: Tag, request: ApiRequest) -> Self {
        Self {
            key: QueryKey::new(tag, request.to_string()),
            request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_key_from_request() {
        let def = QueryDef::new(
            Tag::Restaurant,
            ApiRequest::get("/restaurants").with_query([("page", "1"), ("limit", "9")]),
        );
        assert_eq!(def.key.to_string(), "Restaurant:GET /restaurants?page=1&limit=9");

        let other_page = QueryDef::new(
            Tag::Restaurant,
            ApiRequest::get("/restaurants").with_query([("page", "2"), ("limit", "9")]),
        );
        assert_ne!(def.key, other_page.key);
    }
}
