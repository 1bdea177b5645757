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
        user::{UserDto, UserPayload},
    },
    service::user::UserService,
    state::AppState,
    validation::{validate_new_user, validate_updated_user},
};

pub static USER_TAG: &str = "user";

#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All registered users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(users)))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The requested user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user)))
}

#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = UserPayload,
    responses(
        (status = 200, description = "Created user", body = UserDto),
        (status = 400, description = "Invalid user data", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<impl IntoResponse, AppError> {
    validate_new_user(&payload)?;

    let user = UserService::new(&state.db).add(payload).await?;

    Ok((StatusCode::OK, Json(user)))
}

#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Invalid user data", body = Vec<String>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UserPayload>,
) -> Result<impl IntoResponse, AppError> {
    validate_updated_user(&payload)?;

    let user = UserService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(user)))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db).delete(id).await?;

    Ok(StatusCode::OK)
}
