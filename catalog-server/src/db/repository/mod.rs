//! Repository Module
//!
//! CRUD over the catalog tables. Records are addressed by slug from the
//! outside; record ids stay internal to the store.

pub mod cafe;
pub mod menu_item;

// Re-exports
pub use cafe::CafeRepository;
pub use menu_item::MenuItemRepository;

use serde::{Deserialize, Serialize};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        // Unique index violations read "Database index `x` already contains ...";
        // surface them as duplicates so callers see a uniqueness error, not a 500
        if msg.contains("already contains") {
            RepoError::Duplicate(msg)
        } else {
            RepoError::Database(msg)
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Deletion confirmation. Delete is idempotent, so removing an absent key
/// returns the same shape as removing a live record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    pub detail: String,
}

impl Default for Deleted {
    fn default() -> Self {
        Self {
            detail: "Successfully deleted!".to_string(),
        }
    }
}

/// Generic CRUD contract, one implementation per entity.
///
/// `Key` is the public identity (the slug) for both catalog entities; the
/// record id never crosses this boundary as an input. `actor` is an opaque
/// reference to whoever performs the write — recorded, never interpreted.
#[allow(async_fn_in_trait)]
pub trait Crud {
    type Entity;
    type Create;
    type Update;
    type Key: ?Sized;

    /// Fetch one entity, together with whatever denormalized relations the
    /// full output shape needs, in a single retrieval.
    async fn get(&self, key: &Self::Key) -> RepoResult<Self::Entity>;

    /// Fetch up to `limit` entities after skipping `offset`, natural order.
    /// An empty page (including offset past the end) is NotFound.
    async fn get_multiple(&self, limit: i64, offset: i64) -> RepoResult<Vec<Self::Entity>>;

    /// Validate, persist and return the new entity.
    async fn create(
        &self,
        data: Self::Create,
        actor: Option<surrealdb::RecordId>,
    ) -> RepoResult<Self::Entity>;

    /// Full-replacement write of every non-identity field, as one atomic
    /// conditional statement; NotFound when the key does not resolve.
    async fn update(
        &self,
        data: Self::Update,
        key: &Self::Key,
        actor: Option<surrealdb::RecordId>,
    ) -> RepoResult<Self::Entity>;

    /// Idempotent delete by key.
    async fn delete(&self, key: &Self::Key) -> RepoResult<Deleted>;
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
