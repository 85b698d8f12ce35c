//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - [`ValidJson`] - 带字段验证的 JSON 请求体
//! - 日志等工具

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::{AppError, AppResponse, truncate_error_text};
pub use result::AppResult;
pub use validation::ValidJson;
