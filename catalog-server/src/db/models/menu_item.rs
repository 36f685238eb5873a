//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::cafe::{Cafe, CafeOut};

pub type MenuItemId = RecordId;

/// Menu item record as read from the store.
///
/// The owning cafe is always fetched alongside the row (single retrieval),
/// so the read model embeds it rather than carrying a bare record link.
/// Names are unique per cafe, not globally; the slug is whatever the caller
/// supplied at creation (possibly empty) and is never generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<MenuItemId>,
    pub cafe: Cafe,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    pub description: Option<String>,
    /// 2 fractional digits, rounded on write
    pub price: Decimal,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub created_on: i64,
    #[serde(default)]
    pub updated: i64,
    pub created_by: Option<RecordId>,
    pub updated_by: Option<RecordId>,
}

fn default_true() -> bool {
    true
}

/// Menu item creation payload. `cafe_slug` must resolve to an existing
/// cafe; `slug` is stored as supplied (empty when omitted).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub cafe_slug: String,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price: Decimal,
    pub is_available: Option<bool>,
}

/// Menu item update payload — full replacement of every non-identity
/// field. Neither the slug nor the owning cafe can be changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub is_available: bool,
}

/// Full response shape for single-item views, with the owning cafe resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemOut {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub is_available: bool,
    pub cafe: CafeOut,
    pub created_on: i64,
    pub updated: i64,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

impl From<MenuItem> for MenuItemOut {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            slug: item.slug,
            name: item.name,
            description: item.description,
            price: item.price,
            is_available: item.is_available,
            cafe: CafeOut::from(item.cafe),
            created_on: item.created_on,
            updated: item.updated,
            created_by: item.created_by.as_ref().map(|id| id.to_string()),
            updated_by: item.updated_by.as_ref().map(|id| id.to_string()),
        }
    }
}

/// Summary shape for list views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemListOut {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub is_available: bool,
}

impl From<&MenuItem> for MenuItemListOut {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            name: item.name.clone(),
            price: item.price,
            is_available: item.is_available,
        }
    }
}
