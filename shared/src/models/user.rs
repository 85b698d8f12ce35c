//! User Model
//!
//! Generic example record, no HTTP endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Collection, default_true, serde_int};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserCreate {
    /// Full name
    #[validate(required(code = "missing", message = "Field required"))]
    pub name: Option<String>,
    #[validate(required(code = "missing", message = "Field required"))]
    pub email: Option<String>,
    #[validate(required(code = "missing", message = "Field required"))]
    pub address: Option<String>,
    /// Age in years
    #[serde(default, deserialize_with = "serde_int::deserialize")]
    #[validate(range(min = 0, max = 120, message = "must be between 0 and 120"))]
    pub age: Option<i32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Collection for User {
    const NAME: &'static str = "user";
}

impl Collection for UserCreate {
    const NAME: &'static str = "user";
}
