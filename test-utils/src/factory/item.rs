//! Item factory for creating test item entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test items with customizable fields.
///
/// The owner is mandatory since every item belongs to a user; all other fields
/// default to an available item with generated name and description.
pub struct ItemFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i64,
    name: String,
    description: String,
    available: bool,
    request_id: Option<i64>,
}

impl<'a> ItemFactory<'a> {
    /// Creates a new ItemFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Item {id}"` where id is auto-incremented
    /// - description: `"Description for item {id}"`
    /// - available: `true`
    /// - request_id: `None`
    pub fn new(db: &'a DatabaseConnection, owner_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Item {}", id),
            description: format!("Description for item {}", id),
            available: true,
            request_id: None,
        }
    }

    /// Sets the item name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the item description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the availability flag.
    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Links the item to the item request it fulfills.
    pub fn request_id(mut self, request_id: Option<i64>) -> Self {
        self.request_id = request_id;
        self
    }

    /// Builds and inserts the item entity into the database.
    pub async fn build(self) -> Result<entity::item::Model, DbErr> {
        entity::item::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            available: ActiveValue::Set(self.available),
            owner_id: ActiveValue::Set(self.owner_id),
            request_id: ActiveValue::Set(self.request_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available item owned by the given user.
pub async fn create_item(
    db: &DatabaseConnection,
    owner_id: i64,
) -> Result<entity::item::Model, DbErr> {
    ItemFactory::new(db, owner_id).build().await
}
