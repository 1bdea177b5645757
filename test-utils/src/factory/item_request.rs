//! Item request factory for creating test item request entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test item requests with customizable fields.
pub struct ItemRequestFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i64,
    description: String,
    created: NaiveDateTime,
}

impl<'a> ItemRequestFactory<'a> {
    /// Creates a new ItemRequestFactory with default values.
    ///
    /// Defaults:
    /// - description: `"Looking for item {id}"` where id is auto-incremented
    /// - created: now
    pub fn new(db: &'a DatabaseConnection, user_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            description: format!("Looking for item {}", id),
            created: Utc::now().naive_utc(),
        }
    }

    /// Sets the request description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created(mut self, created: NaiveDateTime) -> Self {
        self.created = created;
        self
    }

    /// Builds and inserts the item request entity into the database.
    pub async fn build(self) -> Result<entity::item_request::Model, DbErr> {
        entity::item_request::ActiveModel {
            description: ActiveValue::Set(self.description),
            created: ActiveValue::Set(self.created),
            user_id: ActiveValue::Set(self.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an item request authored by the given user.
pub async fn create_request(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<entity::item_request::Model, DbErr> {
    ItemRequestFactory::new(db, user_id).build().await
}
