//! Product Model
//!
//! Generic example record, no HTTP endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Collection, default_true};

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create product payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductCreate {
    #[validate(required(code = "missing", message = "Field required"))]
    pub title: Option<String>,
    pub description: Option<String>,
    /// Price in dollars
    #[validate(
        required(code = "missing", message = "Field required"),
        range(min = 0.0, message = "must be greater than or equal to 0")
    )]
    pub price: Option<f64>,
    #[validate(required(code = "missing", message = "Field required"))]
    pub category: Option<String>,
    #[serde(default = "default_true")]
    pub in_stock: bool,
}

impl Collection for Product {
    const NAME: &'static str = "product";
}

impl Collection for ProductCreate {
    const NAME: &'static str = "product";
}
