//! Document Store
//!
//! Thin accessor over a SurrealDB connection:
//! - `create_document`: insert one stamped document, return its id
//! - `get_documents`: list a collection, optionally filtered by equality
//!
//! No uniqueness or referential constraints are enforced here, and errors are
//! never retried.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use shared::DocumentId;
use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;

use super::{RepoError, RepoResult};

/// Connection parameters
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Endpoint: `mem://`, `ws://host:port`, `http://host:port`, ...
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl StoreConfig {
    /// Embedded in-memory store (tests, local runs)
    pub fn in_memory(database: impl Into<String>) -> Self {
        Self {
            url: "mem://".to_string(),
            namespace: "food".to_string(),
            database: database.into(),
            username: None,
            password: None,
        }
    }
}

/// Equality predicate on a top-level field
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    field: &'static str,
    value: String,
}

impl Filter {
    pub fn field_eq(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Field names are spliced into the query text, so only plain identifiers pass
fn is_plain_field(field: &str) -> bool {
    !field.is_empty()
        && field
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Stored shape: record fields plus insert timestamps
#[derive(Serialize)]
struct Stamped<T> {
    #[serde(flatten)]
    record: T,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct DbInfo {
    #[serde(default)]
    tables: BTreeMap<String, IgnoredAny>,
}

/// Document store handle, cheap to clone
#[derive(Clone)]
pub struct DocumentStore {
    db: Surreal<Any>,
    name: String,
}

impl DocumentStore {
    /// Connect, sign in (when credentials are given) and select ns/db
    pub async fn connect(config: &StoreConfig) -> RepoResult<Self> {
        let db = any::connect(config.url.as_str()).await?;

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            db.signin(Root {
                username: username.as_str(),
                password: password.as_str(),
            })
            .await?;
        }

        db.use_ns(config.namespace.as_str())
            .use_db(config.database.as_str())
            .await?;

        tracing::info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "Document store connected"
        );

        Ok(Self {
            db,
            name: config.database.clone(),
        })
    }

    /// Database name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert `record` as a new document in `collection`, returning its id
    pub async fn create_document<T>(&self, collection: &str, record: T) -> RepoResult<DocumentId>
    where
        T: Serialize + 'static,
    {
        let id = DocumentId::generate();
        let now = Utc::now();
        let document = Stamped {
            record,
            created_at: now,
            updated_at: now,
        };

        self.db
            .query("CREATE type::thing($table, $key) CONTENT $data RETURN NONE")
            .bind(("table", collection.to_string()))
            .bind(("key", id.to_hex()))
            .bind(("data", document))
            .await?
            .check()?;

        tracing::debug!(collection, id = %id, "Document created");
        Ok(id)
    }

    /// All documents of `collection` matching `filter`, with `id` as a string
    pub async fn get_documents<T>(&self, collection: &str, filter: Option<Filter>) -> RepoResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut sql = String::from("SELECT *, record::id(id) AS id FROM type::table($table)");
        if let Some(filter) = &filter {
            if !is_plain_field(filter.field) {
                return Err(RepoError::Database(format!(
                    "Invalid filter field: {}",
                    filter.field
                )));
            }
            sql.push_str(&format!(" WHERE {} = $value", filter.field));
        }

        let mut query = self
            .db
            .query(sql)
            .bind(("table", collection.to_string()));
        if let Some(filter) = filter {
            query = query.bind(("value", filter.value));
        }

        let documents: Vec<T> = query.await?.take(0)?;
        Ok(documents)
    }

    /// Whether a document with `id` exists in `collection`
    pub async fn document_exists(&self, collection: &str, id: &DocumentId) -> RepoResult<bool> {
        let mut response = self
            .db
            .query("SELECT VALUE record::id(id) FROM type::thing($table, $key)")
            .bind(("table", collection.to_string()))
            .bind(("key", id.to_hex()))
            .await?;
        let found: Vec<String> = response.take(0)?;
        Ok(!found.is_empty())
    }

    /// Names of all collections in the database, sorted
    pub async fn list_collection_names(&self) -> RepoResult<Vec<String>> {
        let mut response = self.db.query("INFO FOR DB").await?;
        let info: Option<DbInfo> = response.take(0)?;
        Ok(info
            .map(|info| info.tables.into_keys().collect())
            .unwrap_or_default())
    }
}
