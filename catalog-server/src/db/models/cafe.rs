//! Cafe Model

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type CafeId = RecordId;

/// Cafe record
///
/// Public identity is the `slug`; the record id shows up in output but is
/// never accepted as a lookup key. `created_by`/`updated_by` are opaque
/// actor references recorded for audit and never resolved here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cafe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CafeId>,
    pub name: String,
    pub location: String,
    /// Derived from `name` at creation, immutable afterward
    pub slug: String,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub thumbnail: Option<String>,
    /// Unix millis, set once
    #[serde(default)]
    pub created_on: i64,
    /// Unix millis, refreshed on every mutation
    #[serde(default)]
    pub updated: i64,
    pub created_by: Option<RecordId>,
    pub updated_by: Option<RecordId>,
}

fn default_true() -> bool {
    true
}

/// Cafe creation payload. The slug is not accepted from callers; it is
/// derived from the name by the slug generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CafeCreate {
    pub name: String,
    pub location: String,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    pub is_active: Option<bool>,
    pub thumbnail: Option<String>,
}

/// Cafe update payload — full replacement of every non-identity field.
/// The slug is identity and cannot be changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CafeUpdate {
    pub name: String,
    pub location: String,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    pub is_active: bool,
    pub thumbnail: Option<String>,
}

/// Full response shape for single-cafe views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CafeOut {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub location: String,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    pub is_active: bool,
    pub thumbnail: Option<String>,
    pub created_on: i64,
    pub updated: i64,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

impl From<Cafe> for CafeOut {
    fn from(cafe: Cafe) -> Self {
        Self {
            id: cafe.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            slug: cafe.slug,
            name: cafe.name,
            location: cafe.location,
            opening_time: cafe.opening_time,
            closing_time: cafe.closing_time,
            is_active: cafe.is_active,
            thumbnail: cafe.thumbnail,
            created_on: cafe.created_on,
            updated: cafe.updated,
            created_by: cafe.created_by.as_ref().map(|id| id.to_string()),
            updated_by: cafe.updated_by.as_ref().map(|id| id.to_string()),
        }
    }
}

/// Summary shape for list views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CafeListOut {
    pub id: String,
    pub name: String,
    pub slug: String,
}

impl From<&Cafe> for CafeListOut {
    fn from(cafe: &Cafe) -> Self {
        Self {
            id: cafe.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            name: cafe.name.clone(),
            slug: cafe.slug.clone(),
        }
    }
}
