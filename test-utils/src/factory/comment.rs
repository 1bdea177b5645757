//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    item_id: i64,
    author_id: i64,
    text: String,
    created: NaiveDateTime,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - text: `"Comment {id}"` where id is auto-incremented
    /// - created: now
    pub fn new(db: &'a DatabaseConnection, item_id: i64, author_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            item_id,
            author_id,
            text: format!("Comment {}", id),
            created: Utc::now().naive_utc(),
        }
    }

    /// Sets the comment text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created(mut self, created: NaiveDateTime) -> Self {
        self.created = created;
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            text: ActiveValue::Set(self.text),
            item_id: ActiveValue::Set(self.item_id),
            author_id: ActiveValue::Set(self.author_id),
            created: ActiveValue::Set(self.created),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
