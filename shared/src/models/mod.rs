//! Data models
//!
//! Each record type comes in two shapes:
//! - `XxxCreate`: the validated request body, exactly what gets stored;
//!   required fields are `Option` + `#[validate(required)]` so a missing
//!   field is reported alongside every other violated constraint
//! - `Xxx`: a stored document as listed back to clients, with its string `id`
//!   and the `created_at` / `updated_at` stamps added at insert time
//!
//! Collection name = lowercase record name (`MenuItem` -> `menuitem`).

pub mod menu_item;
pub mod order;
pub mod product;
pub mod restaurant;
pub mod serde_int;
pub mod user;

// Re-exports
pub use menu_item::*;
pub use order::*;
pub use product::*;
pub use restaurant::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// Record type stored in its own collection
pub trait Collection {
    /// Collection (table) name
    const NAME: &'static str;
}

/// Response body of every create endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedId {
    pub id: String,
}

fn default_true() -> bool {
    true
}
