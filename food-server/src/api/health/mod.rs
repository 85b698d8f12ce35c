//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | 存活检查 |
//! | /test | GET | 后端 / 数据库连通性诊断 |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "backend": "✅ Running",
//!   "database": "✅ Connected & Working",
//!   "database_url": "✅ Set",
//!   "database_name": "✅ Set",
//!   "connection_status": "Connected",
//!   "collections": ["menuitem", "restaurant"]
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::utils::error::truncate_chars;

/// Error text kept in the `database` field
const MAX_DIAGNOSTIC_ERROR_LEN: usize = 50;

/// Collection names reported at most
const MAX_REPORTED_COLLECTIONS: usize = 10;

/// 健康检查路由 - 公共路由
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(root))
        .route("/test", get(diagnostics))
}

/// 存活检查响应
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// 诊断响应
#[derive(Debug, Serialize, Deserialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// GET / - 存活检查
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Food Delivery Backend Ready".to_string(),
    })
}

/// GET /test - 数据库连通性诊断 (始终 200)
pub async fn diagnostics(State(state): State<ServerState>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: String::new(),
        database_name: String::new(),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match &state.store {
        Some(store) => {
            response.database = "✅ Available".to_string();
            response.connection_status = "Connected".to_string();

            match store.list_collection_names().await {
                Ok(names) => {
                    response.collections = names.into_iter().take(MAX_REPORTED_COLLECTIONS).collect();
                    response.database = "✅ Connected & Working".to_string();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Collection listing failed");
                    response.database = format!(
                        "⚠️  Connected but Error: {}",
                        truncate_chars(&e.to_string(), MAX_DIAGNOSTIC_ERROR_LEN)
                    );
                }
            }
        }
        None => {
            response.database = "⚠️  Available but not initialized".to_string();
        }
    }

    response.database_url = set_marker(state.config.database_url.is_some());
    response.database_name = set_marker(state.config.database_name.is_some());

    Json(response)
}

fn set_marker(is_set: bool) -> String {
    let marker = if is_set { "✅ Set" } else { "❌ Not Set" };
    marker.to_string()
}
