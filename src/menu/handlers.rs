//! REST API handlers for navigation menu operations
//!
//! The admin screens push the flat record list; the storefront reads the
//! assembled tree.

use super::{helpers::build_menu_tree, models::*};
use crate::state::SharedState;
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

/// Creates routes for menu-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/sync_menu", post(sync_menu))
        .route("/menu_tree", get(menu_tree))
}

/// Endpoint: POST /sync_menu
/// Replaces the stored flat menu record list wholesale.
async fn sync_menu(
    State(state): State<SharedState>,
    Json(payload): Json<SyncMenuInput>,
) -> impl IntoResponse {
    let count = payload.items.len();
    *state.menu_items.write().unwrap() = payload.items;

    Json(MenuSyncResponse {
        status: "updated".to_string(),
        count,
    })
}

/// Endpoint: GET /menu_tree
/// Builds the navigation tree from the current flat list.
async fn menu_tree(State(state): State<SharedState>) -> impl IntoResponse {
    let items = state.menu_items.read().unwrap().clone();

    Json(MenuTreeResponse {
        menu: build_menu_tree(&items),
    })
}
