//! Axum router configuration for group endpoints.

use axum::{routing::get, Router};

use super::handlers::{create_group, get_group, list_groups, remove_group, rename_group};
use crate::adapters::http::state::LedgerAppState;

/// Create the group API router.
///
/// # Routes
///
/// - `GET /` - List groups
/// - `POST /` - Create a group
/// - `GET /:id` - Get a group
/// - `PATCH /:id` - Rename a group
/// - `DELETE /:id` - Remove a group and its payments
pub fn group_routes() -> Router<LedgerAppState> {
    Router::new()
        .route("/", get(list_groups).post(create_group))
        .route(
            "/:id",
            get(get_group).patch(rename_group).delete(remove_group),
        )
}
