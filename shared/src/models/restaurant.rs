//! Restaurant Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Collection, serde_int};

/// Default rating for new restaurants
pub const DEFAULT_RATING: f64 = 4.5;

fn default_rating() -> f64 {
    DEFAULT_RATING
}

/// Restaurant document (列表返回)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Cuisine type, e.g. Chinese, Pizza
    pub cuisine: String,
    pub delivery_time_mins: i32,
    #[serde(default = "default_rating")]
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create restaurant payload
///
/// Required fields are `Option` so that a missing field is reported by
/// `validate()` together with every other violated constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RestaurantCreate {
    #[validate(required(code = "missing", message = "Field required"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(required(code = "missing", message = "Field required"))]
    pub cuisine: Option<String>,
    /// Estimated delivery time in minutes
    #[serde(default, deserialize_with = "serde_int::deserialize")]
    #[validate(
        required(code = "missing", message = "Field required"),
        range(min = 5, max = 120, message = "must be between 5 and 120")
    )]
    pub delivery_time_mins: Option<i32>,
    #[serde(default = "default_rating")]
    #[validate(range(min = 0.0, max = 5.0, message = "must be between 0 and 5"))]
    pub rating: f64,
    /// Cover image URL
    pub image_url: Option<String>,
}

impl Collection for Restaurant {
    const NAME: &'static str = "restaurant";
}

impl Collection for RestaurantCreate {
    const NAME: &'static str = "restaurant";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_errors;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> RestaurantCreate {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let r = parse(json!({"name": "Pizza Place", "cuisine": "Italian", "delivery_time_mins": 30}));
        assert_eq!(r.rating, DEFAULT_RATING);
        assert_eq!(r.description, None);
        assert_eq!(r.image_url, None);
        assert!(r.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_reported_with_range_errors() {
        let r = parse(json!({"name": "Pizza Place", "delivery_time_mins": 500}));
        let errors = field_errors(&r.validate().unwrap_err());
        let found: Vec<(&str, &str)> = errors
            .iter()
            .map(|e| (e.field.as_str(), e.code.as_str()))
            .collect();
        assert_eq!(found, vec![("cuisine", "missing"), ("delivery_time_mins", "range")]);
        assert_eq!(errors[0].message, "Field required");
    }

    #[test]
    fn test_integral_float_delivery_time_accepted() {
        let r = parse(json!({"name": "A", "cuisine": "B", "delivery_time_mins": 30.0}));
        assert_eq!(r.delivery_time_mins, Some(30));
        assert!(r.validate().is_ok());
    }

    #[test]
    fn test_delivery_time_bounds() {
        for (mins, ok) in [(4, false), (5, true), (120, true), (121, false)] {
            let r = parse(json!({"name": "A", "cuisine": "B", "delivery_time_mins": mins}));
            assert_eq!(r.validate().is_ok(), ok, "delivery_time_mins = {mins}");
        }
    }

    #[test]
    fn test_rating_bounds() {
        for (rating, ok) in [(-0.1, false), (0.0, true), (5.0, true), (5.01, false)] {
            let r = parse(json!({
                "name": "A", "cuisine": "B", "delivery_time_mins": 30, "rating": rating
            }));
            assert_eq!(r.validate().is_ok(), ok, "rating = {rating}");
        }
    }

    #[test]
    fn test_every_violation_reported() {
        let r = parse(json!({
            "name": "A", "cuisine": "B", "delivery_time_mins": 500, "rating": 9.0
        }));
        let errors = field_errors(&r.validate().unwrap_err());
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["delivery_time_mins", "rating"]);
        assert!(errors.iter().all(|e| e.code == "range"));
    }

    #[test]
    fn test_listing_accepts_document_without_optional_fields() {
        let r: Restaurant = serde_json::from_value(json!({
            "id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "name": "A",
            "cuisine": "B",
            "delivery_time_mins": 20
        }))
        .unwrap();
        assert_eq!(r.rating, DEFAULT_RATING);
        assert!(r.created_at.is_none());

        let out = serde_json::to_value(&r).unwrap();
        assert!(out.get("description").is_none());
        assert_eq!(out["id"], "65a1f0c2e4b0a1b2c3d4e5f6");
    }
}
