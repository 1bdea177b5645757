use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::param::PaginationParam,
    error::AppError,
    middleware::identity::SharerId,
    model::{
        api::ErrorDto,
        request::{RequestInfoDto, RequestPayload},
    },
    service::request::RequestService,
    state::AppState,
    validation::validate_new_request,
};

pub static REQUEST_TAG: &str = "request";

#[utoipa::path(
    post,
    path = "/requests",
    tag = REQUEST_TAG,
    params(
        ("X-Sharer-User-Id" = i64, Header, description = "Requester user ID")
    ),
    request_body = RequestPayload,
    responses(
        (status = 200, description = "Created item request", body = RequestInfoDto),
        (status = 400, description = "Invalid request data", body = Vec<String>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_request(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Json(payload): Json<RequestPayload>,
) -> Result<impl IntoResponse, AppError> {
    validate_new_request(&payload)?;

    let request = RequestService::new(&state.db).add(user_id, payload).await?;

    Ok((StatusCode::OK, Json(request)))
}

#[utoipa::path(
    get,
    path = "/requests",
    tag = REQUEST_TAG,
    params(
        ("X-Sharer-User-Id" = i64, Header, description = "Requester user ID"),
        ("from" = Option<i64>, Query, description = "Offset of the first element (default: 0)"),
        ("size" = Option<i64>, Query, description = "Page size (default: 10)")
    ),
    responses(
        (status = 200, description = "The caller's requests, newest first", body = Vec<RequestInfoDto>),
        (status = 400, description = "Invalid pagination parameters", body = Vec<String>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_requests(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = pagination.resolve()?;

    let requests = RequestService::new(&state.db)
        .get_all_own(user_id, page)
        .await?;

    Ok((StatusCode::OK, Json(requests)))
}

#[utoipa::path(
    get,
    path = "/requests/all",
    tag = REQUEST_TAG,
    params(
        ("X-Sharer-User-Id" = i64, Header, description = "Calling user ID"),
        ("from" = Option<i64>, Query, description = "Offset of the first element (default: 0)"),
        ("size" = Option<i64>, Query, description = "Page size (default: 10)")
    ),
    responses(
        (status = 200, description = "Other users' requests, newest first", body = Vec<RequestInfoDto>),
        (status = 400, description = "Invalid pagination parameters", body = Vec<String>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_requests(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = pagination.resolve()?;

    let requests = RequestService::new(&state.db)
        .get_all_from_others(user_id, page)
        .await?;

    Ok((StatusCode::OK, Json(requests)))
}

#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = REQUEST_TAG,
    params(
        ("id" = i64, Path, description = "Request ID"),
        ("X-Sharer-User-Id" = i64, Header, description = "Calling user ID")
    ),
    responses(
        (status = 200, description = "The request with its fulfilling items", body = RequestInfoDto),
        (status = 404, description = "Request or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_request(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let request = RequestService::new(&state.db).get_by_id(user_id, id).await?;

    Ok((StatusCode::OK, Json(request)))
}
