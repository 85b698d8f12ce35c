//! Order Model
//!
//! Orders are stored as submitted: `restaurant_name` is a denormalized copy,
//! the money fields are not recomputed from the items and `restaurant_id` is
//! not checked against the restaurant collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Collection, serde_int};

/// Initial order status
pub const DEFAULT_ORDER_STATUS: &str = "placed";

fn default_status() -> String {
    DEFAULT_ORDER_STATUS.to_string()
}

/// Order line (embedded in [`Order`], no collection of its own)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_item_id: String,
    pub name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub line_total: f64,
}

/// Order line as submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderItemCreate {
    #[validate(required(code = "missing", message = "Field required"))]
    pub menu_item_id: Option<String>,
    #[validate(required(code = "missing", message = "Field required"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "serde_int::deserialize")]
    #[validate(
        required(code = "missing", message = "Field required"),
        range(min = 1, message = "must be greater than or equal to 1")
    )]
    pub quantity: Option<i32>,
    #[validate(
        required(code = "missing", message = "Field required"),
        range(min = 0.0, message = "must be greater than or equal to 0")
    )]
    pub unit_price: Option<f64>,
    #[validate(
        required(code = "missing", message = "Field required"),
        range(min = 0.0, message = "must be greater than or equal to 0")
    )]
    pub line_total: Option<f64>,
}

/// Order document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub restaurant_id: String,
    pub restaurant_name: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
    pub customer_name: String,
    pub customer_email: String,
    pub delivery_address: String,
    /// placed, preparing, on_the_way, delivered (not enforced)
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Place order payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderCreate {
    #[validate(required(code = "missing", message = "Field required"))]
    pub restaurant_id: Option<String>,
    #[validate(required(code = "missing", message = "Field required"))]
    pub restaurant_name: Option<String>,
    #[validate(required(code = "missing", message = "Field required"), nested)]
    pub items: Option<Vec<OrderItemCreate>>,
    #[validate(
        required(code = "missing", message = "Field required"),
        range(min = 0.0, message = "must be greater than or equal to 0")
    )]
    pub subtotal: Option<f64>,
    #[validate(
        required(code = "missing", message = "Field required"),
        range(min = 0.0, message = "must be greater than or equal to 0")
    )]
    pub delivery_fee: Option<f64>,
    #[validate(
        required(code = "missing", message = "Field required"),
        range(min = 0.0, message = "must be greater than or equal to 0")
    )]
    pub total: Option<f64>,
    #[validate(required(code = "missing", message = "Field required"))]
    pub customer_name: Option<String>,
    #[validate(required(code = "missing", message = "Field required"))]
    pub customer_email: Option<String>,
    #[validate(required(code = "missing", message = "Field required"))]
    pub delivery_address: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
}

impl Collection for Order {
    const NAME: &'static str = "order";
}

impl Collection for OrderCreate {
    const NAME: &'static str = "order";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_errors;
    use serde_json::json;

    fn order_json(items: serde_json::Value) -> serde_json::Value {
        json!({
            "restaurant_id": "does-not-exist",
            "restaurant_name": "Nowhere",
            "items": items,
            "subtotal": 10.0,
            "delivery_fee": 2.0,
            "total": 1.0,
            "customer_name": "Ana",
            "customer_email": "ana@example.com",
            "delivery_address": "1 Main St"
        })
    }

    #[test]
    fn test_status_defaults_to_placed() {
        let order: OrderCreate = serde_json::from_value(order_json(json!([]))).unwrap();
        assert_eq!(order.status, "placed");
        assert_eq!(order.items, Some(vec![]));
        assert!(order.validate().is_ok());
    }

    #[test]
    fn test_inconsistent_totals_accepted() {
        let order: OrderCreate = serde_json::from_value(order_json(json!([
            {"menu_item_id": "m1", "name": "Pizza", "quantity": 2, "unit_price": 5.0, "line_total": 99.0}
        ])))
        .unwrap();
        assert!(order.validate().is_ok());
    }

    #[test]
    fn test_nested_item_errors_carry_index() {
        let order: OrderCreate = serde_json::from_value(order_json(json!([
            {"menu_item_id": "m1", "name": "Pizza", "quantity": 1, "unit_price": 5.0, "line_total": 5.0},
            {"menu_item_id": "m2", "name": "Soda", "quantity": 0, "unit_price": -1.0, "line_total": 0.0}
        ])))
        .unwrap();

        let errors = field_errors(&order.validate().unwrap_err());
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["items[1].quantity", "items[1].unit_price"]);
        assert_eq!(errors[0].message, "must be greater than or equal to 1");
    }

    #[test]
    fn test_missing_item_fields_carry_index() {
        let order: OrderCreate = serde_json::from_value(order_json(json!([
            {"menu_item_id": "m1", "quantity": 0, "unit_price": 5.0, "line_total": 5.0}
        ])))
        .unwrap();

        let errors = field_errors(&order.validate().unwrap_err());
        let found: Vec<(&str, &str)> = errors
            .iter()
            .map(|e| (e.field.as_str(), e.code.as_str()))
            .collect();
        assert_eq!(found, vec![("items[0].name", "missing"), ("items[0].quantity", "range")]);
    }

    #[test]
    fn test_stored_shape_reads_back_as_listing() {
        let order: OrderCreate = serde_json::from_value(order_json(json!([
            {"menu_item_id": "m1", "name": "Pizza", "quantity": 2.0, "unit_price": 5.0, "line_total": 10.0}
        ])))
        .unwrap();

        let mut stored = serde_json::to_value(&order).unwrap();
        stored["id"] = json!("65a1f0c2e4b0a1b2c3d4e5f6");
        let listed: Order = serde_json::from_value(stored).unwrap();
        assert_eq!(listed.items[0].quantity, 2);
        assert_eq!(listed.status, "placed");
    }

    #[test]
    fn test_negative_money_fields_rejected() {
        let mut value = order_json(json!([]));
        value["delivery_fee"] = json!(-2.0);
        value["total"] = json!(-1.0);
        let order: OrderCreate = serde_json::from_value(value).unwrap();

        let errors = field_errors(&order.validate().unwrap_err());
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["delivery_fee", "total"]);
    }
}
