use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User view returned by the user routes and embedded in booking and item
/// views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl UserDto {
    pub fn from_model(model: entity::user::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
        }
    }
}

/// Incoming user payload for create and partial update.
///
/// Both fields are optional so the same shape serves `POST /users` (where
/// presence is enforced by validation) and `PATCH /users/{id}` (where absent
/// fields are left unchanged).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
}
