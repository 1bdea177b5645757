use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::api::Page;

pub struct RequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        description: String,
        user_id: i64,
        created: NaiveDateTime,
    ) -> Result<entity::item_request::Model, DbErr> {
        entity::item_request::ActiveModel {
            description: ActiveValue::Set(description),
            user_id: ActiveValue::Set(user_id),
            created: ActiveValue::Set(created),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<Option<entity::item_request::Model>, DbErr> {
        entity::prelude::ItemRequest::find_by_id(id).one(self.db).await
    }

    /// The requester's own requests, newest first, paged.
    pub async fn find_all_by_user_id(
        &self,
        user_id: i64,
        page: Page,
    ) -> Result<Vec<entity::item_request::Model>, DbErr> {
        entity::prelude::ItemRequest::find()
            .filter(entity::item_request::Column::UserId.eq(user_id))
            .order_by_desc(entity::item_request::Column::Created)
            .offset(page.from)
            .limit(page.size)
            .all(self.db)
            .await
    }

    /// Requests placed by everyone else, newest first, paged.
    pub async fn find_all_from_others(
        &self,
        user_id: i64,
        page: Page,
    ) -> Result<Vec<entity::item_request::Model>, DbErr> {
        entity::prelude::ItemRequest::find()
            .filter(entity::item_request::Column::UserId.ne(user_id))
            .order_by_desc(entity::item_request::Column::Created)
            .offset(page.from)
            .limit(page.size)
            .all(self.db)
            .await
    }
}
