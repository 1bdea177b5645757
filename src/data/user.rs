use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Fetches multiple users at once, for resolving authors in bulk.
    pub async fn find_by_ids(&self, ids: Vec<i64>) -> Result<Vec<entity::user::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    pub async fn create(&self, name: String, email: String) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Writes the merged name and email back for an existing user.
    pub async fn update(
        &self,
        user: entity::user::Model,
        name: String,
        email: String,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active: entity::user::ActiveModel = user.into();
        active.name = ActiveValue::Set(name);
        active.email = ActiveValue::Set(email);

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
