//! Cafe API module

mod handler;

use axum::{
    Router,
    routing::get,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/cafes", cafe_routes())
}

fn cafe_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/search", get(handler::search))
        .route(
            "/{slug}",
            get(handler::get_by_slug)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{slug}/menu-items", get(handler::list_menu_items))
}
