//! Form schemas
//!
//! Every create/update form is validated before it is submitted; the form
//! struct itself is the request body, so a submitted body always matches the
//! validated values.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::WorkingHours;

/// Per-field validation messages, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(pub BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages for one field
    pub fn field(&self, name: &str) -> &[String] {
        self.0.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First message overall, for a one-line notification
    pub fn first_message(&self) -> Option<&str> {
        self.0.values().flatten().next().map(String::as_str)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, msgs)| format!("{}: {}", field, msgs.join(", ")))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            for err in errs.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                out.add(field.to_string(), message);
            }
        }
        out
    }
}

/// A validated request body
pub trait FormSchema: Validate + Serialize {
    /// Run the schema; `Err` carries one entry per invalid field
    fn check(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(FieldErrors::from)
    }
}

impl<T: Validate + Serialize> FormSchema for T {}

fn positive_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price > Decimal::ZERO {
        Ok(())
    } else {
        Err(ValidationError::new("positive_price")
            .with_message("Price must be a positive number".into()))
    }
}

fn accepted(value: &bool) -> Result<(), ValidationError> {
    if *value {
        Ok(())
    } else {
        Err(ValidationError::new("terms")
            .with_message("You must accept the terms and conditions".into()))
    }
}

fn valid_week(hours: &[WorkingHours]) -> Result<(), ValidationError> {
    let well_formed = hours.iter().all(|h| {
        h.day_of_week <= 6 && is_clock_time(&h.open_time) && is_clock_time(&h.close_time)
    });
    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::new("working_hours")
            .with_message("Each day needs a weekday 0-6 and HH:MM times".into()))
    }
}

fn is_clock_time(value: &str) -> bool {
    match value.split_once(':') {
        Some((h, m)) if h.len() == 2 && m.len() == 2 => matches!(
            (h.parse::<u8>(), m.parse::<u8>()),
            (Ok(h), Ok(m)) if h < 24 && m < 60
        ),
        _ => false,
    }
}

/// Category create/update form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CategoryForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    pub name: String,
    #[validate(length(min = 2, message = "Description must be at least 2 characters."))]
    pub description: String,
    pub is_active: bool,
}

/// Cuisines use the same schema as categories
pub type CuisineForm = CategoryForm;

/// Restaurant create/update form (admin and owner)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RestaurantForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: String,
    #[validate(length(min = 5, message = "Address must be at least 5 characters"))]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    /// Owner account, set by the admin when assigning a restaurant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid owner email address"))]
    pub owner_email: Option<String>,
    pub is_active: bool,
}

/// Weekly opening hours form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct WorkingHoursForm {
    #[validate(custom(function = "valid_week"))]
    pub working_hours: Vec<WorkingHours>,
}

/// Menu item create/update form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MenuItemForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: String,
    #[validate(custom(function = "positive_price"))]
    pub price: Decimal,
    #[validate(length(min = 2, message = "Category must be at least 2 characters"))]
    pub category: String,
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Delivery address form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AddressForm {
    #[validate(length(min = 1, message = "Label is required"))]
    pub label: String,
    #[validate(length(min = 1, message = "Street is required"))]
    pub street: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,
    #[validate(length(min = 1, message = "Postal code is required"))]
    pub postal_code: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Checkout form; submits an order for the current cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CheckoutForm {
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 10, message = "Phone number must be at least 10 digits."))]
    pub phone: String,
    #[validate(length(min = 10, message = "Delivery address must be at least 10 characters."))]
    pub delivery_address: String,
    #[validate(length(min = 1, message = "Please select a payment method."))]
    pub payment_method: String,
}

/// Body of `POST /orders`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrder {
    pub delivery_address: String,
    pub payment_method: String,
}

impl From<&CheckoutForm> for CreateOrder {
    fn from(form: &CheckoutForm) -> Self {
        Self {
            delivery_address: form.delivery_address.clone(),
            payment_method: form.payment_method.clone(),
        }
    }
}

/// Profile form (`PUT /me`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProfileForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    pub phone: String,
}

/// Sign-in form; also the body of `POST /login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SignInForm {
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters."))]
    pub password: String,
}

/// Sign-up form; the body of `POST /register` without `terms`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SignUpForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 3, message = "Phone number must be at least 3 characters."))]
    pub phone: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters."))]
    pub password1: String,
    #[validate(
        length(min = 6, message = "Password must be at least 6 characters."),
        must_match(other = "password1", message = "Passwords do not match.")
    )]
    pub password2: String,
    #[serde(skip_serializing, default)]
    #[validate(custom(function = "accepted"))]
    pub terms: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str) -> CategoryForm {
        CategoryForm {
            name: name.to_string(),
            description: "Hot dishes".to_string(),
            is_active: true,
        }
    }

    #[test]
    fn test_category_name_too_short() {
        let errors = category("A").check().unwrap_err();
        assert_eq!(errors.field("name"), ["Name must be at least 2 characters."]);
        assert!(errors.field("description").is_empty());
        assert!(category("Ab").check().is_ok());
    }

    #[test]
    fn test_menu_item_price_must_be_positive() {
        let form = MenuItemForm {
            name: "Margherita".into(),
            description: "Tomato, mozzarella, basil".into(),
            price: Decimal::ZERO,
            category: "Pizza".into(),
            is_available: true,
            image: None,
        };
        let errors = form.check().unwrap_err();
        assert_eq!(errors.field("price"), ["Price must be a positive number"]);

        let ok = MenuItemForm {
            price: Decimal::new(1299, 2),
            ..form
        };
        assert!(ok.check().is_ok());
    }

    #[test]
    fn test_signup_passwords_and_terms() {
        let form = SignUpForm {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            phone: "5551234".into(),
            password1: "secret1".into(),
            password2: "secret2".into(),
            terms: false,
        };
        let errors = form.check().unwrap_err();
        assert_eq!(errors.field("password2"), ["Passwords do not match."]);
        assert_eq!(
            errors.field("terms"),
            ["You must accept the terms and conditions"]
        );

        let body = serde_json::to_value(&form).unwrap();
        assert!(body.get("terms").is_none());
    }

    #[test]
    fn test_signin_email() {
        let form = SignInForm {
            email: "not-an-email".into(),
            password: "secret".into(),
        };
        let errors = form.check().unwrap_err();
        assert_eq!(
            errors.first_message(),
            Some("Please enter a valid email address.")
        );
    }

    #[test]
    fn test_working_hours_form() {
        let ok = WorkingHoursForm {
            working_hours: WorkingHours::default_week(),
        };
        assert!(ok.check().is_ok());

        let mut week = WorkingHours::default_week();
        week[2].close_time = "25:00".into();
        let bad = WorkingHoursForm { working_hours: week };
        assert!(!bad.check().unwrap_err().field("working_hours").is_empty());
    }

    #[test]
    fn test_checkout_to_order_body() {
        let form = CheckoutForm {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            phone: "5551234567".into(),
            delivery_address: "12 Long Street, Springfield".into(),
            payment_method: "cash".into(),
        };
        assert!(form.check().is_ok());
        let order = CreateOrder::from(&form);
        assert_eq!(order.payment_method, "cash");
    }

    #[test]
    fn test_restaurant_optional_email() {
        let form = RestaurantForm {
            name: "Roma".into(),
            description: "Neapolitan pizza and pasta".into(),
            address: "1 Main St".into(),
            phone: None,
            email: Some("bad".into()),
            cuisine: None,
            owner_email: None,
            is_active: true,
        };
        assert_eq!(form.check().unwrap_err().field("email"), ["Invalid email address"]);
    }
}
