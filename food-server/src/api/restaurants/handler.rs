//! Restaurant API Handlers

use axum::{Json, extract::State};
use shared::Collection;
use shared::models::{CreatedId, Restaurant, RestaurantCreate};

use crate::core::ServerState;
use crate::utils::{AppResult, ValidJson};

/// POST /api/restaurants - 创建餐厅
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<RestaurantCreate>,
) -> AppResult<Json<CreatedId>> {
    let id = state
        .store()?
        .create_document(RestaurantCreate::NAME, payload)
        .await?;
    Ok(Json(CreatedId { id: id.to_string() }))
}

/// GET /api/restaurants - 获取所有餐厅
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Restaurant>>> {
    let restaurants = state.store()?.get_documents(Restaurant::NAME, None).await?;
    Ok(Json(restaurants))
}
