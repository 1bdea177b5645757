use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::param::{ApprovedParam, BookingListParam},
    error::AppError,
    middleware::identity::SharerId,
    model::{
        api::ErrorDto,
        booking::{BookingDto, BookingPayload},
    },
    service::booking::BookingService,
    state::AppState,
    validation::validate_date_range,
};

pub static BOOKING_TAG: &str = "booking";

#[utoipa::path(
    post,
    path = "/bookings",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i64, Header, description = "Booker user ID")
    ),
    request_body = BookingPayload,
    responses(
        (status = 200, description = "Created booking in WAITING status", body = BookingDto),
        (status = 400, description = "Invalid date range or item unavailable", body = ErrorDto),
        (status = 404, description = "Item or user not found, or caller owns the item", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Json(payload): Json<BookingPayload>,
) -> Result<impl IntoResponse, AppError> {
    validate_date_range(payload.start, payload.end)?;

    let booking = BookingService::new(&state.db).add(user_id, payload).await?;

    Ok((StatusCode::OK, Json(booking)))
}

#[utoipa::path(
    patch,
    path = "/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i64, Path, description = "Booking ID"),
        ("approved" = bool, Query, description = "true approves the booking, false rejects it"),
        ("X-Sharer-User-Id" = i64, Header, description = "Item owner user ID")
    ),
    responses(
        (status = 200, description = "Booking moved to its terminal status", body = BookingDto),
        (status = 400, description = "Booking already finalized", body = ErrorDto),
        (status = 404, description = "Booking not found or caller is not the owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(id): Path<i64>,
    Query(param): Query<ApprovedParam>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db)
        .update(user_id, id, param.approved)
        .await?;

    Ok((StatusCode::OK, Json(booking)))
}

#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i64, Path, description = "Booking ID"),
        ("X-Sharer-User-Id" = i64, Header, description = "Calling user ID")
    ),
    responses(
        (status = 200, description = "The booking, visible to its booker or the item owner", body = BookingDto),
        (status = 404, description = "Booking not found or not visible to the caller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db).get_by_id(user_id, id).await?;

    Ok((StatusCode::OK, Json(booking)))
}

#[utoipa::path(
    get,
    path = "/bookings",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i64, Header, description = "Booker user ID"),
        ("state" = Option<String>, Query, description = "State filter (default: ALL)"),
        ("from" = Option<i64>, Query, description = "Offset of the first element (default: 0)"),
        ("size" = Option<i64>, Query, description = "Page size (default: 10)")
    ),
    responses(
        (status = 200, description = "The caller's bookings", body = Vec<BookingDto>),
        (status = 400, description = "Invalid pagination parameters", body = Vec<String>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Unsupported state filter or internal error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Query(params): Query<BookingListParam>,
) -> Result<impl IntoResponse, AppError> {
    let filter = params.resolve_state()?;
    let page = params.resolve_page()?;

    let bookings = BookingService::new(&state.db)
        .get_all_by_user_id(user_id, filter, page)
        .await?;

    Ok((StatusCode::OK, Json(bookings)))
}

#[utoipa::path(
    get,
    path = "/bookings/owner",
    tag = BOOKING_TAG,
    params(
        ("X-Sharer-User-Id" = i64, Header, description = "Item owner user ID"),
        ("state" = Option<String>, Query, description = "State filter (default: ALL)"),
        ("from" = Option<i64>, Query, description = "Offset of the first element (default: 0)"),
        ("size" = Option<i64>, Query, description = "Page size (default: 10)")
    ),
    responses(
        (status = 200, description = "Bookings against the caller's items", body = Vec<BookingDto>),
        (status = 400, description = "Invalid pagination parameters", body = Vec<String>),
        (status = 404, description = "Caller owns no items", body = ErrorDto),
        (status = 500, description = "Unsupported state filter or internal error", body = ErrorDto)
    ),
)]
pub async fn get_owner_bookings(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Query(params): Query<BookingListParam>,
) -> Result<impl IntoResponse, AppError> {
    let filter = params.resolve_state()?;
    let page = params.resolve_page()?;

    let bookings = BookingService::new(&state.db)
        .get_all_by_owner_id(user_id, filter, page)
        .await?;

    Ok((StatusCode::OK, Json(bookings)))
}
