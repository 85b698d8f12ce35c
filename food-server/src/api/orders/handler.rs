//! Order API Handlers
//!
//! Orders are stored as submitted: restaurant and menu item references,
//! line totals and order totals are not cross-checked.

use axum::{Json, extract::State};
use shared::Collection;
use shared::models::{CreatedId, Order, OrderCreate};

use crate::core::ServerState;
use crate::utils::{AppResult, ValidJson};

/// POST /api/orders - 创建订单
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<OrderCreate>,
) -> AppResult<Json<CreatedId>> {
    let id = state
        .store()?
        .create_document(OrderCreate::NAME, payload)
        .await?;
    tracing::info!(order_id = %id, "Order placed");
    Ok(Json(CreatedId { id: id.to_string() }))
}

/// GET /api/orders - 获取所有订单
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let orders = state.store()?.get_documents(Order::NAME, None).await?;
    Ok(Json(orders))
}
