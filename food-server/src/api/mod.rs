//! HTTP API
//!
//! # 模块
//!
//! - [`health`] - `/`, `/test`
//! - [`restaurants`] - `/api/restaurants`
//! - [`menu`] - `/api/menu`
//! - [`orders`] - `/api/orders`
//!
//! Create endpoints answer `{"id": "<hex24>"}`; list endpoints answer the
//! stored documents with `id` as a string.

pub mod health;
pub mod menu;
pub mod orders;
pub mod restaurants;
