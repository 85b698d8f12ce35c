use crate::db::StoreConfig;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8000;

/// Default SurrealDB namespace
pub const DEFAULT_NAMESPACE: &str = "food";

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | PORT | 8000 | HTTP 服务端口 |
/// | DATABASE_URL | - | 文档数据库地址 (`mem://`, `ws://host:port`) |
/// | DATABASE_NAME | - | 数据库名 |
/// | DATABASE_NAMESPACE | food | SurrealDB 命名空间 |
/// | DATABASE_USER | - | Root 用户名 |
/// | DATABASE_PASS | - | Root 密码 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | - | 日志目录 (存在时写入按天滚动的文件) |
///
/// 空字符串视为未设置。
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=mem:// DATABASE_NAME=food PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub database_namespace: String,
    pub database_user: Option<String>,
    pub database_pass: Option<String>,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            http_port: var("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            database_url: var("DATABASE_URL"),
            database_name: var("DATABASE_NAME"),
            database_namespace: var("DATABASE_NAMESPACE")
                .unwrap_or_else(|| DEFAULT_NAMESPACE.into()),
            database_user: var("DATABASE_USER"),
            database_pass: var("DATABASE_PASS"),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: var("LOG_DIR"),
        }
    }

    /// 使用内存数据库的配置
    ///
    /// 常用于测试场景
    pub fn in_memory(database_name: impl Into<String>) -> Self {
        let mut config = Self::from_lookup(|_| None);
        config.database_url = Some("mem://".into());
        config.database_name = Some(database_name.into());
        config
    }

    /// Store connection parameters, `None` unless both URL and name are set
    pub fn store_config(&self) -> Option<StoreConfig> {
        let url = self.database_url.clone()?;
        let database = self.database_name.clone()?;
        Some(StoreConfig {
            url,
            namespace: self.database_namespace.clone(),
            database,
            username: self.database_user.clone(),
            password: self.database_pass.clone(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
