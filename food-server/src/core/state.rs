use std::sync::Arc;

use crate::core::Config;
use crate::db::{DocumentStore, RepoError};

/// 服务器状态 - 组合根
///
/// 启动时构建一次，之后每个请求共享 (只读)。
/// `store` 为 `None` 表示数据库未配置或连接失败，此时服务仍然启动，
/// 数据接口返回 500，`/test` 报告数据库不可用。
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub store: Option<DocumentStore>,
}

impl ServerState {
    pub fn new(config: Config, store: Option<DocumentStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Connect the document store described by `config`
    ///
    /// Never fails: a missing configuration or a failed connection is logged
    /// and leaves the state without a store.
    pub async fn initialize(config: &Config) -> Self {
        let store = match config.store_config() {
            None => {
                tracing::warn!("DATABASE_URL or DATABASE_NAME not set, running without database");
                None
            }
            Some(store_config) => match DocumentStore::connect(&store_config).await {
                Ok(store) => Some(store),
                Err(e) => {
                    tracing::error!(error = %e, url = %store_config.url, "Failed to connect document store");
                    None
                }
            },
        };

        Self::new(config.clone(), store)
    }

    /// The document store, or [`RepoError::Unavailable`]
    pub fn store(&self) -> Result<&DocumentStore, RepoError> {
        self.store.as_ref().ok_or(RepoError::Unavailable)
    }
}
