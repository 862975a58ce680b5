//! User API handlers
//!
//! CRUD endpoints over the sample user directory. Every handler checks
//! that the path id and body are well formed before doing anything else;
//! there is no business-rule validation and nothing is persisted.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, info};

use super::dto::{
    CreateUserRequest, CreateUserResponse, GetUserResponse, PatchUserRequest, PatchUserResponse,
    UpdateUserRequest, UpdateUserResponse, UserDto,
};
use crate::domain::{User, UserDirectory};
use crate::infrastructure::SampleUserDirectory;
use crate::interfaces::http::common::{ApiError, JsonBody, UserId};

/// Body returned by a successful delete.
pub const DELETE_CONFIRMATION: &str = "User deletion successful";

/// User handler state
#[derive(Clone)]
pub struct UserHandlerState {
    pub directory: Arc<dyn UserDirectory>,
}

impl UserHandlerState {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }
}

impl Default for UserHandlerState {
    fn default() -> Self {
        Self::new(Arc::new(SampleUserDirectory::new()))
    }
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "User list", body = Vec<UserDto>)
    )
)]
pub async fn list_users(State(state): State<UserHandlerState>) -> Json<Vec<UserDto>> {
    let users: Vec<UserDto> = state.directory.list().into_iter().map(UserDto::from).collect();
    debug!(count = users.len(), "Listing users");
    Json(users)
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = GetUserResponse),
        (status = 400, description = "Invalid ID format", body = String),
        (status = 404, description = "User not found", body = String)
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    UserId(id): UserId,
) -> Result<Json<GetUserResponse>, ApiError> {
    let user = state
        .directory
        .find(id)
        .ok_or_else(ApiError::user_not_found)?;
    Ok(Json(UserDto::from(user)))
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = CreateUserResponse),
        (status = 400, description = "Invalid request", body = String)
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    JsonBody(request): JsonBody<CreateUserRequest>,
) -> (StatusCode, Json<CreateUserResponse>) {
    let id = state.directory.assign_id(request.id);
    let user = request.into_user(id);
    info!(user_id = user.id, "User created");
    (StatusCode::CREATED, Json(UserDto::from(user)))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UpdateUserResponse),
        (status = 400, description = "Invalid ID format or request body", body = String)
    )
)]
pub async fn update_user(
    UserId(id): UserId,
    JsonBody(request): JsonBody<UpdateUserRequest>,
) -> Json<UpdateUserResponse> {
    let user = request.into_user(id);
    info!(user_id = id, "User replaced");
    Json(UserDto::from(user))
}

#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    request_body = PatchUserRequest,
    responses(
        (status = 200, description = "User patched", body = PatchUserResponse),
        (status = 400, description = "Invalid ID format or request body", body = String)
    )
)]
pub async fn patch_user(
    State(state): State<UserHandlerState>,
    UserId(id): UserId,
    JsonBody(request): JsonBody<PatchUserRequest>,
) -> Json<PatchUserResponse> {
    let base = state.directory.find(id).unwrap_or_else(|| User::blank(id));
    let user = base.patched(request.into());
    info!(user_id = id, "User patched");
    Json(UserDto::from(user))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deletion successful", body = String),
        (status = 400, description = "Invalid ID format", body = String),
        (status = 404, description = "User not found", body = String)
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    UserId(id): UserId,
) -> Result<Json<&'static str>, ApiError> {
    state
        .directory
        .find(id)
        .ok_or_else(ApiError::user_not_found)?;
    info!(user_id = id, "User deleted");
    Ok(Json(DELETE_CONFIRMATION))
}
