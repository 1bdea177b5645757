use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{booking, item, request, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        user::get_users,
        user::get_user,
        user::create_user,
        user::update_user,
        user::delete_user,
        item::create_item,
        item::update_item,
        item::get_item,
        item::get_items,
        item::search_items,
        item::add_comment,
        item::delete_item,
        booking::create_booking,
        booking::update_booking,
        booking::get_booking,
        booking::get_bookings,
        booking::get_owner_bookings,
        request::create_request,
        request::get_own_requests,
        request::get_all_requests,
        request::get_request,
    ),
    tags(
        (name = "user", description = "User accounts"),
        (name = "item", description = "Shareable items, search, and comments"),
        (name = "booking", description = "Booking lifecycle"),
        (name = "request", description = "Item requests"),
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(user::get_users).post(user::create_user))
        .route(
            "/users/{id}",
            get(user::get_user)
                .patch(user::update_user)
                .delete(user::delete_user),
        )
        .route("/items", get(item::get_items).post(item::create_item))
        .route("/items/search", get(item::search_items))
        .route(
            "/items/{id}",
            get(item::get_item)
                .patch(item::update_item)
                .delete(item::delete_item),
        )
        .route("/items/{id}/comment", post(item::add_comment))
        .route(
            "/bookings",
            get(booking::get_bookings).post(booking::create_booking),
        )
        .route("/bookings/owner", get(booking::get_owner_bookings))
        .route(
            "/bookings/{id}",
            get(booking::get_booking).patch(booking::update_booking),
        )
        .route(
            "/requests",
            get(request::get_own_requests).post(request::create_request),
        )
        .route("/requests/all", get(request::get_all_requests))
        .route("/requests/{id}", get(request::get_request))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}
