//! HTTP handlers for group endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    CreateGroupCommand, GetGroupQuery, ListGroupsQuery, RemoveGroupCommand, RenameGroupCommand,
};
use crate::domain::foundation::GroupId;

use super::dto::{CreateGroupRequest, RenameGroupRequest};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::LedgerAppState;

/// GET /api/groups
pub async fn list_groups(
    State(state): State<LedgerAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let groups = state.list_groups_handler().handle(ListGroupsQuery).await?;
    Ok(Json(groups))
}

/// POST /api/groups
pub async fn create_group(
    State(state): State<LedgerAppState>,
    body: Result<Json<CreateGroupRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let group = state
        .create_group_handler()
        .handle(CreateGroupCommand { name: request.name })
        .await?;
    Ok((StatusCode::CREATED, Json(group)))
}

/// GET /api/groups/:id
pub async fn get_group(
    State(state): State<LedgerAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let group_id: GroupId = id.parse()?;
    let group = state
        .get_group_handler()
        .handle(GetGroupQuery { group_id })
        .await?;
    Ok(Json(group))
}

/// PATCH /api/groups/:id
pub async fn rename_group(
    State(state): State<LedgerAppState>,
    Path(id): Path<String>,
    body: Result<Json<RenameGroupRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let group_id: GroupId = id.parse()?;
    let Json(request) = body?;
    let group = state
        .rename_group_handler()
        .handle(RenameGroupCommand {
            group_id,
            new_name: request.name,
        })
        .await?;
    Ok(Json(group))
}

/// DELETE /api/groups/:id - Removes the group and its payments
pub async fn remove_group(
    State(state): State<LedgerAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let group_id: GroupId = id.parse()?;
    state
        .remove_group_handler()
        .handle(RemoveGroupCommand { group_id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
