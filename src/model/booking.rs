use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppError,
    model::{item::ItemDto, user::UserDto},
};

/// Booking view returned by every booking route, enriched with the full item
/// and booker rather than bare ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookingDto {
    pub id: i64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub item: ItemDto,
    pub booker: UserDto,
    pub status: String,
}

impl BookingDto {
    pub fn from_model(
        model: entity::booking::Model,
        item: entity::item::Model,
        booker: entity::user::Model,
    ) -> Self {
        Self {
            id: model.id,
            start: model.start,
            end: model.end,
            item: ItemDto::from_model(item),
            booker: UserDto::from_model(booker),
            status: model.status.as_str().to_string(),
        }
    }
}

/// Incoming booking payload.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub item_id: i64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Booking list filter.
///
/// Distinct from the persisted `BookingStatus`: three of the variants select
/// on status, three partition by time relative to "now", and `All` selects
/// everything. Parsing is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryState {
    All,
    Current,
    Past,
    Future,
    Waiting,
    Approved,
    Rejected,
}

impl FromStr for QueryState {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_uppercase().as_str() {
            "ALL" => Ok(Self::All),
            "CURRENT" => Ok(Self::Current),
            "PAST" => Ok(Self::Past),
            "FUTURE" => Ok(Self::Future),
            "WAITING" => Ok(Self::Waiting),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(AppError::UnsupportedState),
        }
    }
}
