use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::param::{PaginationParam, SearchParam},
    error::AppError,
    middleware::identity::SharerId,
    model::{
        api::ErrorDto,
        comment::{CommentDto, CommentPayload},
        item::{ItemDto, ItemInfoDto, ItemPayload},
    },
    service::item::ItemService,
    state::AppState,
    validation::{validate_new_comment, validate_new_item},
};

pub static ITEM_TAG: &str = "item";

#[utoipa::path(
    post,
    path = "/items",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i64, Header, description = "Calling user ID")
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Created item as an enriched view", body = ItemInfoDto),
        (status = 400, description = "Invalid item data", body = Vec<String>),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Json(payload): Json<ItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    validate_new_item(&payload)?;

    let item = ItemService::new(&state.db).add(user_id, payload).await?;

    Ok((StatusCode::OK, Json(item)))
}

#[utoipa::path(
    patch,
    path = "/items/{id}",
    tag = ITEM_TAG,
    params(
        ("id" = i64, Path, description = "Item ID"),
        ("X-Sharer-User-Id" = i64, Header, description = "Calling user ID")
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Updated item as an enriched view", body = ItemInfoDto),
        (status = 403, description = "Caller does not own the item", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(id): Path<i64>,
    Json(payload): Json<ItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    let item = ItemService::new(&state.db).update(user_id, id, payload).await?;

    Ok((StatusCode::OK, Json(item)))
}

#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = ITEM_TAG,
    params(
        ("id" = i64, Path, description = "Item ID"),
        ("X-Sharer-User-Id" = i64, Header, description = "Calling user ID")
    ),
    responses(
        (status = 200, description = "Enriched item view", body = ItemInfoDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let item = ItemService::new(&state.db).get_by_id(user_id, id).await?;

    Ok((StatusCode::OK, Json(item)))
}

#[utoipa::path(
    get,
    path = "/items",
    tag = ITEM_TAG,
    params(
        ("X-Sharer-User-Id" = i64, Header, description = "Calling user ID"),
        ("from" = Option<i64>, Query, description = "Offset of the first element (default: 0)"),
        ("size" = Option<i64>, Query, description = "Page size (default: 10)")
    ),
    responses(
        (status = 200, description = "The owner's items", body = Vec<ItemInfoDto>),
        (status = 400, description = "Invalid pagination parameters", body = Vec<String>),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_items(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = pagination.resolve()?;

    let items = ItemService::new(&state.db).get_all_by_owner(user_id, page).await?;

    Ok((StatusCode::OK, Json(items)))
}

#[utoipa::path(
    get,
    path = "/items/search",
    tag = ITEM_TAG,
    params(
        ("text" = Option<String>, Query, description = "Search text"),
        ("from" = Option<i64>, Query, description = "Offset of the first element (default: 0)"),
        ("size" = Option<i64>, Query, description = "Page size (default: 10)")
    ),
    responses(
        (status = 200, description = "Available items matching the text", body = Vec<ItemDto>),
        (status = 400, description = "Invalid pagination parameters", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_items(
    State(state): State<AppState>,
    Query(params): Query<SearchParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = params.resolve_page()?;
    let text = params.text.unwrap_or_default();

    let items = ItemService::new(&state.db).search(&text, page).await?;

    Ok((StatusCode::OK, Json(items)))
}

#[utoipa::path(
    post,
    path = "/items/{id}/comment",
    tag = ITEM_TAG,
    params(
        ("id" = i64, Path, description = "Item ID"),
        ("X-Sharer-User-Id" = i64, Header, description = "Calling user ID")
    ),
    request_body = CommentPayload,
    responses(
        (status = 200, description = "Created comment", body = CommentDto),
        (status = 400, description = "No finished booking of the item", body = ErrorDto),
        (status = 404, description = "Item or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_comment(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(id): Path<i64>,
    Json(payload): Json<CommentPayload>,
) -> Result<impl IntoResponse, AppError> {
    validate_new_comment(&payload)?;

    let comment = ItemService::new(&state.db)
        .add_comment(user_id, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(comment)))
}

#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = ITEM_TAG,
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted"),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    ItemService::new(&state.db).delete(id).await?;

    Ok(StatusCode::OK)
}
