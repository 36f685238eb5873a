//! Menu Item API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use http::{HeaderMap, StatusCode};

use crate::api::{Pagination, SearchParams, actor_from_headers};
use crate::core::ServerState;
use crate::db::models::{MenuItemCreate, MenuItemListOut, MenuItemOut, MenuItemUpdate};
use crate::db::repository::{Crud, Deleted, MenuItemRepository};
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, validate_optional_text, validate_required_text,
};

/// GET /api/menu-items - list menu items, paged
pub async fn list(
    State(state): State<ServerState>,
    Query(page): Query<Pagination>,
) -> AppResult<Json<Vec<MenuItemListOut>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo.get_multiple(page.limit, page.offset).await?;
    Ok(Json(items.iter().map(MenuItemListOut::from).collect()))
}

/// GET /api/menu-items/search - substring search over name and description
pub async fn search(
    State(state): State<ServerState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<MenuItemListOut>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo.search(&params.q, params.active_only).await?;
    Ok(Json(items.iter().map(MenuItemListOut::from).collect()))
}

/// GET /api/menu-items/{slug} - fetch a single menu item with its cafe
pub async fn get_by_slug(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> AppResult<Json<MenuItemOut>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.get(&slug).await?;
    Ok(Json(MenuItemOut::from(item)))
}

/// POST /api/menu-items - create a menu item under an existing cafe
pub async fn create(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<(StatusCode, Json<MenuItemOut>)> {
    validate_required_text(&payload.name, "Name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.slug, "Slug", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "Description", MAX_DESCRIPTION_LEN)?;

    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.create(payload, actor_from_headers(&headers)).await?;

    tracing::info!(name = %item.name, cafe = %item.cafe.slug, "Menu item created");

    Ok((StatusCode::CREATED, Json(MenuItemOut::from(item))))
}

/// PUT /api/menu-items/{slug} - replace a menu item's mutable fields
pub async fn update(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItemOut>> {
    validate_required_text(&payload.name, "Name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "Description", MAX_DESCRIPTION_LEN)?;

    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo
        .update(payload, &slug, actor_from_headers(&headers))
        .await?;

    Ok(Json(MenuItemOut::from(item)))
}

/// DELETE /api/menu-items/{slug} - delete a menu item
pub async fn delete(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Deleted>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let confirmation = repo.delete(&slug).await?;

    tracing::info!(slug = %slug, "Menu item deleted");

    Ok(Json(confirmation))
}
