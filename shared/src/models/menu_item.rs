//! Menu Item Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Collection;

/// Menu item document (菜品)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    /// Restaurant reference, stored exactly as submitted
    pub restaurant_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_veg: bool,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create menu item payload
///
/// `restaurant_id` is only checked for presence here; syntax and existence
/// are checked by the handler before insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MenuItemCreate {
    #[validate(required(code = "missing", message = "Field required"))]
    pub restaurant_id: Option<String>,
    /// Dish name
    #[validate(required(code = "missing", message = "Field required"))]
    pub name: Option<String>,
    pub description: Option<String>,
    /// Price in dollars
    #[validate(
        required(code = "missing", message = "Field required"),
        range(min = 0.0, message = "must be greater than or equal to 0")
    )]
    pub price: Option<f64>,
    pub image_url: Option<String>,
    /// Vegetarian option
    #[serde(default)]
    pub is_veg: bool,
    #[serde(default)]
    pub is_popular: bool,
}

impl Collection for MenuItem {
    const NAME: &'static str = "menuitem";
}

impl Collection for MenuItemCreate {
    const NAME: &'static str = "menuitem";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flags_default_false() {
        let item: MenuItemCreate = serde_json::from_value(json!({
            "restaurant_id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "name": "Margherita",
            "price": 9.5
        }))
        .unwrap();
        assert!(!item.is_veg);
        assert!(!item.is_popular);
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_negative_price_rejected() {
        let item: MenuItemCreate = serde_json::from_value(json!({
            "restaurant_id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "name": "Margherita",
            "price": -0.01
        }))
        .unwrap();
        let errors = item.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn test_zero_price_allowed() {
        let item: MenuItemCreate = serde_json::from_value(json!({
            "restaurant_id": "x",
            "name": "Water",
            "price": 0
        }))
        .unwrap();
        assert_eq!(item.price, Some(0.0));
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_all_reported() {
        let item: MenuItemCreate = serde_json::from_value(json!({"description": "x"})).unwrap();
        let errors = item.validate().unwrap_err();
        let mut fields: Vec<_> = errors.field_errors().into_keys().collect();
        fields.sort();
        assert_eq!(fields, vec!["name", "price", "restaurant_id"]);
    }

    #[test]
    fn test_wrong_type_rejected() {
        let result = serde_json::from_value::<MenuItemCreate>(json!({
            "restaurant_id": "x",
            "name": "Water",
            "price": "free"
        }));
        assert!(result.is_err());
    }
}
