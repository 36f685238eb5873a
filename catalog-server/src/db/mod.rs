//! Database Module
//!
//! Embedded SurrealDB connection and schema definition.

pub mod models;
pub mod query;
pub mod repository;
pub mod slug;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "catalog";
const DATABASE: &str = "catalog";

/// Catalog schema
///
/// Tables stay schemaless; uniqueness is store-enforced through indexes so
/// concurrent writers cannot slip a duplicate past the repository pre-checks:
/// - cafe names and slugs are globally unique
/// - menu item names are unique per cafe
const SCHEMA: &str = "
    DEFINE TABLE IF NOT EXISTS cafe SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS cafe_slug ON TABLE cafe COLUMNS slug UNIQUE;
    DEFINE INDEX IF NOT EXISTS cafe_name ON TABLE cafe COLUMNS name UNIQUE;
    DEFINE TABLE IF NOT EXISTS menu_item SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS menu_item_name ON TABLE menu_item COLUMNS cafe, name UNIQUE;
";

/// Database service — owns the embedded database handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database and apply the schema.
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        Self::prepare(db).await
    }

    /// Open an in-memory database. Used by tests.
    pub async fn memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;

        Self::prepare(db).await
    }

    async fn prepare(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        db.query(SCHEMA)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?
            .check()
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;

        tracing::info!("Database ready (schema applied)");

        Ok(Self { db })
    }
}
