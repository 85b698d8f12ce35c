//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{CreatedId, MenuItem, MenuItemCreate, Restaurant};
use shared::{Collection, DocumentId};

use crate::core::ServerState;
use crate::db::Filter;
use crate::utils::{AppError, AppResult, ValidJson};

/// POST /api/menu - 创建菜品
///
/// `restaurant_id` 必须是合法 ID (400) 且餐厅存在 (404)。
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<MenuItemCreate>,
) -> AppResult<Json<CreatedId>> {
    let restaurant_id = payload
        .restaurant_id
        .as_deref()
        .and_then(|id| DocumentId::parse(id).ok())
        .ok_or_else(|| AppError::invalid("Invalid restaurant_id"))?;

    let store = state.store()?;
    if !store.document_exists(Restaurant::NAME, &restaurant_id).await? {
        return Err(AppError::not_found("Restaurant not found"));
    }

    let id = store.create_document(MenuItemCreate::NAME, payload).await?;
    Ok(Json(CreatedId { id: id.to_string() }))
}

/// GET /api/menu/{restaurant_id} - 获取餐厅菜单
///
/// 按存储的 `restaurant_id` 原值匹配，不做大小写归一化。
pub async fn list_by_restaurant(
    State(state): State<ServerState>,
    Path(restaurant_id): Path<String>,
) -> AppResult<Json<Vec<MenuItem>>> {
    if !DocumentId::is_valid(&restaurant_id) {
        return Err(AppError::invalid("Invalid restaurant_id"));
    }

    let items = state
        .store()?
        .get_documents(
            MenuItem::NAME,
            Some(Filter::field_eq("restaurant_id", restaurant_id)),
        )
        .await?;
    Ok(Json(items))
}
