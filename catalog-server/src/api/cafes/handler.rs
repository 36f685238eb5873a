//! Cafe API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use http::{HeaderMap, StatusCode};

use crate::api::{Pagination, SearchParams, actor_from_headers};
use crate::core::ServerState;
use crate::db::models::{CafeCreate, CafeListOut, CafeOut, CafeUpdate, MenuItemListOut};
use crate::db::repository::{CafeRepository, Crud, Deleted, MenuItemRepository};
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_LOCATION_LEN, MAX_NAME_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
    validate_text,
};

fn validate_payload(name: &str, location: &str, thumbnail: &Option<String>) -> AppResult<()> {
    validate_required_text(name, "Name", MAX_NAME_LEN)?;
    validate_text(location, "Location", MAX_LOCATION_LEN)?;
    validate_optional_text(thumbnail, "Thumbnail", MAX_URL_LEN)?;
    Ok(())
}

/// GET /api/cafes - list cafes, paged
pub async fn list(
    State(state): State<ServerState>,
    Query(page): Query<Pagination>,
) -> AppResult<Json<Vec<CafeListOut>>> {
    let repo = CafeRepository::new(state.db.clone());
    let cafes = repo.get_multiple(page.limit, page.offset).await?;
    Ok(Json(cafes.iter().map(CafeListOut::from).collect()))
}

/// GET /api/cafes/search - substring search over name and location
pub async fn search(
    State(state): State<ServerState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<CafeListOut>>> {
    let repo = CafeRepository::new(state.db.clone());
    let cafes = repo.search(&params.q, params.active_only).await?;
    Ok(Json(cafes.iter().map(CafeListOut::from).collect()))
}

/// GET /api/cafes/{slug} - fetch a single cafe
pub async fn get_by_slug(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> AppResult<Json<CafeOut>> {
    let repo = CafeRepository::new(state.db.clone());
    let cafe = repo.get(&slug).await?;
    Ok(Json(CafeOut::from(cafe)))
}

/// POST /api/cafes - create a cafe
pub async fn create(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(payload): Json<CafeCreate>,
) -> AppResult<(StatusCode, Json<CafeOut>)> {
    validate_payload(&payload.name, &payload.location, &payload.thumbnail)?;

    let repo = CafeRepository::new(state.db.clone());
    let cafe = repo.create(payload, actor_from_headers(&headers)).await?;

    tracing::info!(slug = %cafe.slug, "Cafe created");

    Ok((StatusCode::CREATED, Json(CafeOut::from(cafe))))
}

/// PUT /api/cafes/{slug} - replace a cafe's mutable fields
pub async fn update(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<CafeUpdate>,
) -> AppResult<Json<CafeOut>> {
    validate_payload(&payload.name, &payload.location, &payload.thumbnail)?;

    let repo = CafeRepository::new(state.db.clone());
    let cafe = repo
        .update(payload, &slug, actor_from_headers(&headers))
        .await?;

    Ok(Json(CafeOut::from(cafe)))
}

/// DELETE /api/cafes/{slug} - delete a cafe and its menu items
pub async fn delete(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Deleted>> {
    let repo = CafeRepository::new(state.db.clone());
    let confirmation = repo.delete(&slug).await?;

    tracing::info!(slug = %slug, "Cafe deleted");

    Ok(Json(confirmation))
}

/// GET /api/cafes/{slug}/menu-items - all menu items of one cafe
///
/// An empty list is a valid answer; only an unknown cafe slug is 404.
pub async fn list_menu_items(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Vec<MenuItemListOut>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo.get_by_cafe(&slug).await?;
    Ok(Json(items.iter().map(MenuItemListOut::from).collect()))
}
