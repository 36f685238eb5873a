//! Menu Item Repository

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, Crud, Deleted, RepoError, RepoResult};
use crate::db::models::{Cafe, MenuItem, MenuItemCreate, MenuItemUpdate};
use crate::db::query::{QuerySpec, Select};
use crate::utils::now_millis;

pub const MENU_ITEM_TABLE: &str = "menu_item";

/// Query description for menu items: ordered by name, `is_available` gates
/// the active set, substring search runs over name and description. Every
/// materialized row carries its owning cafe (FETCH), so read models embed
/// the parent without a second round trip.
static MENU_ITEM_QUERY: QuerySpec = QuerySpec {
    table: MENU_ITEM_TABLE,
    active_flag: "is_available",
    search_fields: &["name", "description"],
    fetch: &["cafe"],
};

/// Write-side record shape; the owning cafe is stored as a record link.
#[derive(Serialize)]
struct MenuItemRecord {
    cafe: RecordId,
    name: String,
    slug: String,
    description: Option<String>,
    price: Decimal,
    is_available: bool,
    created_on: i64,
    updated: i64,
    created_by: Option<RecordId>,
    updated_by: Option<RecordId>,
}

/// Minimal row used when only the record id matters.
#[derive(Deserialize)]
struct RecordRow {
    id: RecordId,
}

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn db(&self) -> &Surreal<Db> {
        self.base.db()
    }

    /// Composable query over menu items; nothing runs until materialized.
    pub fn query() -> Select {
        Select::all(&MENU_ITEM_QUERY)
    }

    /// Find menu item by slug, owning cafe fetched in the same retrieval
    pub async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<MenuItem>> {
        let slug_owned = slug.to_string();
        let mut result = self
            .db()
            .query("SELECT * FROM menu_item WHERE slug = $slug ORDER BY name LIMIT 1 FETCH cafe")
            .bind(("slug", slug_owned))
            .await?;
        let items: Vec<MenuItem> = result.take(0)?;
        Ok(items.into_iter().next())
    }

    /// All menu items owned by the cafe with the given slug.
    ///
    /// A cafe with no items yields an empty vector; only a missing cafe is
    /// an error, and its message ("Cafe not found.") is distinct from the
    /// empty-page error of `get_multiple`.
    pub async fn get_by_cafe(&self, cafe_slug: &str) -> RepoResult<Vec<MenuItem>> {
        let cafe = self.resolve_cafe(cafe_slug).await?;
        let cafe_id = cafe
            .id
            .ok_or_else(|| RepoError::Database("Cafe record has no id".to_string()))?;

        let mut result = self
            .db()
            .query("SELECT * FROM menu_item WHERE cafe = $cafe ORDER BY name FETCH cafe")
            .bind(("cafe", cafe_id))
            .await?;
        let items: Vec<MenuItem> = result.take(0)?;
        Ok(items)
    }

    /// Substring search over the menu item search fields, optionally
    /// restricted to available items.
    pub async fn search(&self, term: &str, active_only: bool) -> RepoResult<Vec<MenuItem>> {
        let query = if active_only {
            Select::filtered_search(&MENU_ITEM_QUERY, term)
        } else {
            Self::query().search(term)
        };
        query.fetch(self.db()).await
    }

    /// Resolve the parent cafe by slug.
    async fn resolve_cafe(&self, cafe_slug: &str) -> RepoResult<Cafe> {
        let slug_owned = cafe_slug.to_string();
        let mut result = self
            .db()
            .query("SELECT * FROM cafe WHERE slug = $slug LIMIT 1")
            .bind(("slug", slug_owned))
            .await?;
        let cafes: Vec<Cafe> = result.take(0)?;
        cafes
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound("Cafe not found.".to_string()))
    }

    /// First menu item of a cafe with the given name, if any.
    async fn find_by_cafe_and_name(
        &self,
        cafe_id: &RecordId,
        name: &str,
    ) -> RepoResult<Option<RecordId>> {
        let mut result = self
            .db()
            .query("SELECT id FROM menu_item WHERE cafe = $cafe AND name = $name LIMIT 1")
            .bind(("cafe", cafe_id.clone()))
            .bind(("name", name.to_string()))
            .await?;
        let rows: Vec<RecordRow> = result.take(0)?;
        Ok(rows.into_iter().next().map(|row| row.id))
    }
}

impl Crud for MenuItemRepository {
    type Entity = MenuItem;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Key = str;

    async fn get(&self, key: &str) -> RepoResult<MenuItem> {
        self.find_by_slug(key)
            .await?
            .ok_or_else(|| RepoError::NotFound("This menu item does not exist.".to_string()))
    }

    async fn get_multiple(&self, limit: i64, offset: i64) -> RepoResult<Vec<MenuItem>> {
        if limit <= 0 {
            return Err(RepoError::Validation("limit must be positive".to_string()));
        }
        if offset < 0 {
            return Err(RepoError::Validation(
                "offset must not be negative".to_string(),
            ));
        }

        let items: Vec<MenuItem> = Self::query().page(self.db(), limit, offset).await?;
        if items.is_empty() {
            return Err(RepoError::NotFound("No menu items found.".to_string()));
        }
        Ok(items)
    }

    async fn create(&self, data: MenuItemCreate, actor: Option<RecordId>) -> RepoResult<MenuItem> {
        if data.name.trim().is_empty() {
            return Err(RepoError::Validation("Name cannot be empty.".to_string()));
        }

        let cafe = self.resolve_cafe(&data.cafe_slug).await?;
        let cafe_id = cafe
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Cafe record has no id".to_string()))?;

        // Pre-check per-cafe duplicate name; the compound unique index is
        // the final authority
        if self
            .find_by_cafe_and_name(&cafe_id, &data.name)
            .await?
            .is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Menu item '{}' already exists for this cafe",
                data.name
            )));
        }

        let now = now_millis();
        let record = MenuItemRecord {
            cafe: cafe_id,
            name: data.name,
            // Stored as supplied; menu item slugs are never generated
            slug: data.slug.unwrap_or_default(),
            description: data.description,
            price: data.price.round_dp(2),
            is_available: data.is_available.unwrap_or(true),
            created_on: now,
            updated: now,
            created_by: actor.clone(),
            updated_by: actor.clone(),
        };

        let name = record.name.clone();
        let slug = record.slug.clone();
        let description = record.description.clone();
        let price = record.price;
        let is_available = record.is_available;

        let mut result = self
            .db()
            .query("CREATE menu_item CONTENT $data")
            .bind(("data", record))
            .await?;
        let rows: Vec<RecordRow> = result.take(0)?;
        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))?;

        Ok(MenuItem {
            id: Some(row.id),
            cafe,
            name,
            slug,
            description,
            price,
            is_available,
            created_on: now,
            updated: now,
            created_by: actor.clone(),
            updated_by: actor,
        })
    }

    async fn update(
        &self,
        data: MenuItemUpdate,
        key: &str,
        actor: Option<RecordId>,
    ) -> RepoResult<MenuItem> {
        if data.name.trim().is_empty() {
            return Err(RepoError::Validation("Name cannot be empty.".to_string()));
        }

        // One atomic conditional statement; a rename into an existing
        // (cafe, name) pair trips the compound unique index
        let mut result = self
            .db()
            .query(
                "UPDATE menu_item SET \
                 name = $name, description = $description, price = $price, \
                 is_available = $is_available, updated = $updated, updated_by = $updated_by \
                 WHERE slug = $slug RETURN AFTER",
            )
            .bind(("name", data.name))
            .bind(("description", data.description))
            .bind(("price", data.price.round_dp(2)))
            .bind(("is_available", data.is_available))
            .bind(("updated", now_millis()))
            .bind(("updated_by", actor))
            .bind(("slug", key.to_string()))
            .await?;

        let rows: Vec<RecordRow> = result.take(0)?;
        if rows.is_empty() {
            return Err(RepoError::NotFound(
                "This menu item does not exist.".to_string(),
            ));
        }

        // Read-after-write for the fresh state with the owning cafe fetched
        self.get(key).await
    }

    async fn delete(&self, key: &str) -> RepoResult<Deleted> {
        self.db()
            .query("DELETE menu_item WHERE slug = $slug")
            .bind(("slug", key.to_string()))
            .await?
            .check()?;

        Ok(Deleted::default())
    }
}
