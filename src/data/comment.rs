use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Parameters for creating a new comment.
pub struct NewComment {
    pub text: String,
    pub item_id: i64,
    pub author_id: i64,
    pub created: NaiveDateTime,
}

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: NewComment) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            text: ActiveValue::Set(params.text),
            item_id: ActiveValue::Set(params.item_id),
            author_id: ActiveValue::Set(params.author_id),
            created: ActiveValue::Set(params.created),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Comments on one item, oldest first.
    pub async fn find_by_item_id(
        &self,
        item_id: i64,
    ) -> Result<Vec<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::ItemId.eq(item_id))
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await
    }

    /// Comments across a set of items, for enriching owner listings in one
    /// round trip.
    pub async fn find_by_item_ids(
        &self,
        item_ids: Vec<i64>,
    ) -> Result<Vec<entity::comment::Model>, DbErr> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::ItemId.is_in(item_ids))
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await
    }
}
