//! Shared types for the food delivery backend
//!
//! Record shapes and their field constraints, document identifiers and the
//! field-level validation report used by the HTTP layer.

pub mod id;
pub mod models;
pub mod util;
pub mod validation;

// Re-exports
pub use id::{DocumentId, InvalidDocumentId};
pub use models::Collection;
pub use serde::{Deserialize, Serialize};
pub use validation::{FieldError, field_errors};
