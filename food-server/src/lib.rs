//! Food Server - 外卖后端 HTTP 服务
//!
//! # 架构概述
//!
//! - **数据库** (`db`): SurrealDB 文档存储 (`mem://` / `ws://`)
//! - **HTTP API** (`api`): 餐厅、菜单、订单、诊断接口
//! - **核心** (`core`): 配置、状态、服务器
//!
//! # 模块结构
//!
//! ```text
//! food-server/src/
//! ├── core/          # 配置、状态、错误
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由组装 + 中间件
//! ├── utils/         # 错误、日志、请求体验证
//! └── db/            # 文档存储
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use db::{DocumentStore, Filter, RepoError, StoreConfig};
pub use routes::build_app;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境
///
/// 1. 加载 `.env` (不存在时忽略)
/// 2. 从环境变量读取配置
/// 3. 初始化日志
pub fn setup_environment() -> Config {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    if dotenv_loaded {
        tracing::debug!("Loaded .env");
    }

    config
}

pub fn print_banner() {
    println!(
        r#"
    ______                __
   / ____/___  ____  ____/ /
  / /_  / __ \/ __ \/ __  /
 / __/ / /_/ / /_/ / /_/ /
/_/    \____/\____/\__,_/
    "#
    );
}
