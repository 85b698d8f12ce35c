//! 统一错误处理
//!
//! 提供应用级错误类型和响应结构：
//! - [`AppError`] - 应用错误枚举
//! - [`AppResponse`] - 错误响应结构
//!
//! # 错误码规范
//!
//! | 错误码 | 状态 | 说明 |
//! |--------|------|------|
//! | E0002 | 422 | 字段验证失败 |
//! | E0003 | 404 | 资源不存在 |
//! | E0006 | 400 | 无效请求 / 无效 ID |
//! | E0007 | 415 | Content-Type 不支持 |
//! | E9002 | 500 | 数据库错误 |
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::not_found("Restaurant not found"))
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use shared::{FieldError, field_errors};
use tracing::error;

/// Server error text longer than this is cut before it reaches the client
pub const MAX_ERROR_TEXT_LEN: usize = 200;

/// 错误响应结构
///
/// ```json
/// {
///   "code": "E0002",
///   "message": "Validation failed",
///   "data": [{ "field": "rating", "code": "range", "message": "..." }]
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    /// 错误码
    pub code: String,
    /// 消息
    pub message: String,
    /// 附加数据 (验证失败时为字段错误列表)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 客户端错误 (4xx) ==========
    #[error("Validation failed: {} field error(s)", .0.len())]
    /// 字段验证失败 (422)
    Validation(Vec<FieldError>),

    #[error("Invalid request: {0}")]
    /// 无效请求 (400)
    Invalid(String),

    #[error("Unsupported media type: {0}")]
    /// Content-Type 不支持 (415)
    UnsupportedMedia(String),

    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    // ========== 系统错误 (5xx) ==========
    #[error("Database error: {0}")]
    /// 数据库错误 (500)
    Database(String),

}

impl AppError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// Single-field validation failure
    pub fn field(field: impl Into<String>, code: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError::new(field, code, msg)])
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Invalid(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMedia(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Cut `text` to at most [`MAX_ERROR_TEXT_LEN`] chars
pub fn truncate_error_text(text: &str) -> String {
    truncate_chars(text, MAX_ERROR_TEXT_LEN)
}

pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation(errors) => AppResponse {
                code: "E0002".to_string(),
                message: "Validation failed".to_string(),
                data: Some(errors),
            },
            AppError::Invalid(msg) => error_body("E0006", msg),
            AppError::UnsupportedMedia(msg) => error_body("E0007", msg),
            AppError::NotFound(msg) => error_body("E0003", msg),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                error_body("E9002", truncate_error_text(&msg))
            }
        };

        (status, Json(body)).into_response()
    }
}

fn error_body(code: &str, message: String) -> AppResponse<Vec<FieldError>> {
    AppResponse {
        code: code.to_string(),
        message,
        data: None,
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(field_errors(&errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let (status, body) = body_json(AppError::invalid("Invalid restaurant_id")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid restaurant_id");
        assert!(body.get("data").is_none());

        let (status, body) = body_json(AppError::not_found("Restaurant not found")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "E0003");
    }

    #[tokio::test]
    async fn test_validation_lists_fields() {
        let err = AppError::Validation(vec![
            FieldError::new("rating", "range", "must be between 0 and 5"),
            FieldError::new("delivery_time_mins", "range", "must be between 5 and 120"),
        ]);
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"][0]["field"], "rating");
    }

    #[tokio::test]
    async fn test_database_error_text_truncated() {
        let long = "x".repeat(MAX_ERROR_TEXT_LEN * 2);
        let (status, body) = body_json(AppError::database(long)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"].as_str().unwrap().len(), MAX_ERROR_TEXT_LEN);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 3), "");
    }
}
