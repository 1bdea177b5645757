use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{comment::CommentDto, user::UserDto};

/// Short item view: the shape embedded in booking views and request
/// enrichment, without booking or comment data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: i64,
    pub request_id: Option<i64>,
    pub name: String,
    pub description: String,
    pub available: bool,
}

impl ItemDto {
    pub fn from_model(model: entity::item::Model) -> Self {
        Self {
            id: model.id,
            request_id: model.request_id,
            name: model.name,
            description: model.description,
            available: model.available,
        }
    }
}

/// Reference to a booking embedded in an owner's item view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemBookingDto {
    pub id: i64,
    pub booker_id: i64,
}

impl ItemBookingDto {
    pub fn from_model(model: &entity::booking::Model) -> Self {
        Self {
            id: model.id,
            booker_id: model.booker_id,
        }
    }
}

/// Full item view with owner, request link, comments, and (for the owner
/// only) the nearest past and upcoming bookings.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemInfoDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner: UserDto,
    pub request_id: Option<i64>,
    pub last_booking: Option<ItemBookingDto>,
    pub next_booking: Option<ItemBookingDto>,
    pub comments: Vec<CommentDto>,
}

/// Incoming item payload for create and partial update.
///
/// All fields optional: creation enforces presence of name, description, and
/// available through validation; update leaves absent fields unchanged.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
    pub request_id: Option<i64>,
}
