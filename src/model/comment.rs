use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Comment view with the author's display name resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub text: String,
    pub item_id: i64,
    pub author_name: String,
    pub created: NaiveDateTime,
}

impl CommentDto {
    pub fn from_model(model: entity::comment::Model, author_name: String) -> Self {
        Self {
            id: model.id,
            text: model.text,
            item_id: model.item_id,
            author_name,
            created: model.created,
        }
    }
}

/// Incoming comment payload.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CommentPayload {
    pub text: Option<String>,
}
