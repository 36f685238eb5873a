//! API routing module
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`cafes`] - cafe management endpoints
//! - [`menu_items`] - menu item management endpoints

pub mod cafes;
pub mod health;
pub mod menu_items;

use http::HeaderMap;
use serde::Deserialize;
use surrealdb::RecordId;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Offset/limit paging parameters shared by the list endpoints.
/// The defaults mirror the catalog's public API contract.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub offset: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

/// Parameters for the search endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub active_only: bool,
}

/// Opaque actor reference forwarded by the caller.
///
/// Identity is someone else's problem: whatever arrives in `x-actor-id`
/// (either `user:jane` or a bare key) is recorded on writes verbatim and
/// never resolved here.
pub fn actor_from_headers(headers: &HeaderMap) -> Option<RecordId> {
    let value = headers.get("x-actor-id")?.to_str().ok()?.trim();
    if value.is_empty() {
        return None;
    }
    if value.contains(':') {
        value.parse().ok()
    } else {
        Some(RecordId::from_table_key("user", value))
    }
}
