use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::api::Page;

/// Parameters for creating a new item.
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i64,
    pub request_id: Option<i64>,
}

pub struct ItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: NewItem) -> Result<entity::item::Model, DbErr> {
        entity::item::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            available: ActiveValue::Set(params.available),
            owner_id: ActiveValue::Set(params.owner_id),
            request_id: ActiveValue::Set(params.request_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<entity::item::Model>, DbErr> {
        entity::prelude::Item::find_by_id(id).one(self.db).await
    }

    /// Fetches multiple items at once, for enriching booking lists in bulk.
    pub async fn find_by_ids(&self, ids: Vec<i64>) -> Result<Vec<entity::item::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        entity::prelude::Item::find()
            .filter(entity::item::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    /// Pages through an owner's items, ordered by id ascending.
    pub async fn find_by_owner_id(
        &self,
        owner_id: i64,
        page: Page,
    ) -> Result<Vec<entity::item::Model>, DbErr> {
        entity::prelude::Item::find()
            .filter(entity::item::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::item::Column::Id)
            .offset(page.from)
            .limit(page.size)
            .all(self.db)
            .await
    }

    /// Checks whether the user owns at least one item.
    pub async fn exists_by_owner_id(&self, owner_id: i64) -> Result<bool, DbErr> {
        let count = entity::prelude::Item::find()
            .filter(entity::item::Column::OwnerId.eq(owner_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Items created to fulfill the given request, oldest first.
    pub async fn find_all_by_request_id(
        &self,
        request_id: i64,
    ) -> Result<Vec<entity::item::Model>, DbErr> {
        entity::prelude::Item::find()
            .filter(entity::item::Column::RequestId.eq(request_id))
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await
    }

    /// Case-insensitive substring search on name OR description, restricted to
    /// available items.
    pub async fn search(
        &self,
        text: &str,
        page: Page,
    ) -> Result<Vec<entity::item::Model>, DbErr> {
        let pattern = format!("%{}%", text.to_lowercase());

        entity::prelude::Item::find()
            .filter(entity::item::Column::Available.eq(true))
            .filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::item::Column::Name)))
                            .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::item::Column::Description)))
                            .like(pattern),
                    ),
            )
            .order_by_asc(entity::item::Column::Id)
            .offset(page.from)
            .limit(page.size)
            .all(self.db)
            .await
    }

    /// Writes the merged mutable fields back for an existing item.
    pub async fn update(
        &self,
        item: entity::item::Model,
        name: String,
        description: String,
        available: bool,
    ) -> Result<entity::item::Model, DbErr> {
        let mut active: entity::item::ActiveModel = item.into();
        active.name = ActiveValue::Set(name);
        active.description = ActiveValue::Set(description);
        active.available = ActiveValue::Set(available);

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbErr> {
        entity::prelude::Item::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
