//! Cafe Repository

use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, Crud, Deleted, RepoError, RepoResult};
use crate::db::models::{Cafe, CafeCreate, CafeUpdate};
use crate::db::query::{QuerySpec, Select};
use crate::db::slug::generate_unique_slug;
use crate::utils::now_millis;

pub const CAFE_TABLE: &str = "cafe";

/// Query description for cafes: ordered by name, `is_active` gates the
/// active set, substring search runs over name and location.
static CAFE_QUERY: QuerySpec = QuerySpec {
    table: CAFE_TABLE,
    active_flag: "is_active",
    search_fields: &["name", "location"],
    fetch: &[],
};

#[derive(Clone)]
pub struct CafeRepository {
    base: BaseRepository,
}

impl CafeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn db(&self) -> &Surreal<Db> {
        self.base.db()
    }

    /// Composable query over cafes; nothing runs until materialized.
    pub fn query() -> Select {
        Select::all(&CAFE_QUERY)
    }

    /// Find cafe by slug
    pub async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Cafe>> {
        let slug_owned = slug.to_string();
        let mut result = self
            .db()
            .query("SELECT * FROM cafe WHERE slug = $slug LIMIT 1")
            .bind(("slug", slug_owned))
            .await?;
        let cafes: Vec<Cafe> = result.take(0)?;
        Ok(cafes.into_iter().next())
    }

    /// Find cafe by name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Cafe>> {
        let name_owned = name.to_string();
        let mut result = self
            .db()
            .query("SELECT * FROM cafe WHERE name = $name LIMIT 1")
            .bind(("name", name_owned))
            .await?;
        let cafes: Vec<Cafe> = result.take(0)?;
        Ok(cafes.into_iter().next())
    }

    /// Substring search over the cafe search fields, optionally restricted
    /// to active cafes.
    pub async fn search(&self, term: &str, active_only: bool) -> RepoResult<Vec<Cafe>> {
        let query = if active_only {
            Select::filtered_search(&CAFE_QUERY, term)
        } else {
            Self::query().search(term)
        };
        query.fetch(self.db()).await
    }
}

impl Crud for CafeRepository {
    type Entity = Cafe;
    type Create = CafeCreate;
    type Update = CafeUpdate;
    type Key = str;

    async fn get(&self, key: &str) -> RepoResult<Cafe> {
        self.find_by_slug(key)
            .await?
            .ok_or_else(|| RepoError::NotFound("This cafe does not exist.".to_string()))
    }

    async fn get_multiple(&self, limit: i64, offset: i64) -> RepoResult<Vec<Cafe>> {
        if limit <= 0 {
            return Err(RepoError::Validation("limit must be positive".to_string()));
        }
        if offset < 0 {
            return Err(RepoError::Validation(
                "offset must not be negative".to_string(),
            ));
        }

        let cafes: Vec<Cafe> = Self::query().page(self.db(), limit, offset).await?;
        if cafes.is_empty() {
            return Err(RepoError::NotFound("No cafes found.".to_string()));
        }
        Ok(cafes)
    }

    async fn create(&self, data: CafeCreate, actor: Option<RecordId>) -> RepoResult<Cafe> {
        if data.name.trim().is_empty() {
            return Err(RepoError::Validation("Name cannot be empty.".to_string()));
        }

        // Slug is assigned exactly once, here; renames never touch it
        let slug = generate_unique_slug(self.db(), CAFE_TABLE, &data.name).await?;

        // Pre-check duplicate name; the unique index is the final authority
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Cafe '{}' already exists",
                data.name
            )));
        }

        let now = now_millis();
        let cafe = Cafe {
            id: None,
            name: data.name,
            location: data.location,
            slug,
            opening_time: data.opening_time,
            closing_time: data.closing_time,
            is_active: data.is_active.unwrap_or(true),
            thumbnail: data.thumbnail,
            created_on: now,
            updated: now,
            created_by: actor.clone(),
            updated_by: actor,
        };

        let created: Option<Cafe> = self.db().create(CAFE_TABLE).content(cafe).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create cafe".to_string()))
    }

    async fn update(&self, data: CafeUpdate, key: &str, actor: Option<RecordId>) -> RepoResult<Cafe> {
        if data.name.trim().is_empty() {
            return Err(RepoError::Validation("Name cannot be empty.".to_string()));
        }

        // Single conditional statement: the match and the write cannot be
        // separated by a concurrent delete. A duplicate name trips the
        // unique index and surfaces as RepoError::Duplicate.
        let mut result = self
            .db()
            .query(
                "UPDATE cafe SET \
                 name = $name, location = $location, opening_time = $opening_time, \
                 closing_time = $closing_time, is_active = $is_active, thumbnail = $thumbnail, \
                 updated = $updated, updated_by = $updated_by \
                 WHERE slug = $slug RETURN AFTER",
            )
            .bind(("name", data.name))
            .bind(("location", data.location))
            .bind(("opening_time", data.opening_time))
            .bind(("closing_time", data.closing_time))
            .bind(("is_active", data.is_active))
            .bind(("thumbnail", data.thumbnail))
            .bind(("updated", now_millis()))
            .bind(("updated_by", actor))
            .bind(("slug", key.to_string()))
            .await?;

        let cafes: Vec<Cafe> = result.take(0)?;
        cafes
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound("This cafe does not exist.".to_string()))
    }

    async fn delete(&self, key: &str) -> RepoResult<Deleted> {
        // Cascade: owned menu items go first, then the cafe itself.
        // Deleting an absent slug matches nothing and is not an error.
        self.db()
            .query(
                "DELETE menu_item WHERE cafe IN (SELECT VALUE id FROM cafe WHERE slug = $slug); \
                 DELETE cafe WHERE slug = $slug;",
            )
            .bind(("slug", key.to_string()))
            .await?
            .check()?;

        Ok(Deleted::default())
    }
}
