use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        api::ErrorDto,
        group::{AddMembersDto, GroupMembersDto},
    },
    service::group::GroupService,
    state::AppState,
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

#[utoipa::path(
    post,
    path = "/api/groups/{id}/members",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    request_body = AddMembersDto,
    responses(
        (status = 201, description = "Successfully added members", body = GroupMembersDto),
        (status = 400, description = "Empty user list or user already a member", body = ErrorDto),
        (status = 404, description = "Group or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_group_members(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AddMembersDto>,
) -> Result<impl IntoResponse, AppError> {
    let members = GroupService::new(&state.db).add_members(id, payload).await?;

    Ok((StatusCode::CREATED, Json(members)))
}

#[utoipa::path(
    delete,
    path = "/api/groups/{id}/members/{user_id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID"),
        ("user_id" = i32, Path, description = "User ID to remove")
    ),
    responses(
        (status = 200, description = "Successfully removed member", body = GroupMembersDto),
        (status = 404, description = "Group not found or user not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_group_member(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let members = GroupService::new(&state.db)
        .remove_member(id, user_id)
        .await?;

    Ok((StatusCode::OK, Json(members)))
}

#[utoipa::path(
    get,
    path = "/api/groups/{id}/members",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved members", body = GroupMembersDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group_members(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let members = GroupService::new(&state.db).get_members(id).await?;

    Ok((StatusCode::OK, Json(members)))
}
