use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::item::ItemDto;

/// Item request view enriched with the items created to fulfill it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RequestInfoDto {
    pub id: i64,
    pub description: String,
    pub created: NaiveDateTime,
    pub items: Vec<ItemDto>,
}

impl RequestInfoDto {
    pub fn from_model(model: entity::item_request::Model, items: Vec<ItemDto>) -> Self {
        Self {
            id: model.id,
            description: model.description,
            created: model.created,
            items,
        }
    }
}

/// Incoming item request payload.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RequestPayload {
    pub description: Option<String>,
}
