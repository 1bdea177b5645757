use chrono::NaiveDateTime;
use entity::booking::BookingStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::model::api::Page;

/// Parameters for creating a new booking.
pub struct NewBooking {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub item_id: i64,
    pub booker_id: i64,
}

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: NewBooking) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            start: ActiveValue::Set(params.start),
            end: ActiveValue::Set(params.end),
            item_id: ActiveValue::Set(params.item_id),
            booker_id: ActiveValue::Set(params.booker_id),
            status: ActiveValue::Set(BookingStatus::Waiting),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id).one(self.db).await
    }

    pub async fn update_status(
        &self,
        booking: entity::booking::Model,
        status: BookingStatus,
    ) -> Result<entity::booking::Model, DbErr> {
        let mut active: entity::booking::ActiveModel = booking.into();
        active.status = ActiveValue::Set(status);

        active.update(self.db).await
    }

    /// All bookings recorded against one item, unordered.
    pub async fn find_by_item_id(
        &self,
        item_id: i64,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::ItemId.eq(item_id))
            .all(self.db)
            .await
    }

    /// Bookings across a set of items, for enriching owner listings in one
    /// round trip.
    pub async fn find_by_item_ids(
        &self,
        item_ids: Vec<i64>,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::ItemId.is_in(item_ids))
            .all(self.db)
            .await
    }

    /// Every booking the user has placed for a particular item. Used to check
    /// comment eligibility.
    pub async fn find_all_by_booker_and_item(
        &self,
        booker_id: i64,
        item_id: i64,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::BookerId.eq(booker_id))
            .filter(entity::booking::Column::ItemId.eq(item_id))
            .all(self.db)
            .await
    }

    // Booker-side finders. All ordered start descending and paged.

    pub async fn find_all_by_booker_id(
        &self,
        booker_id: i64,
        page: Page,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        paged(booker_query(booker_id), page).all(self.db).await
    }

    pub async fn find_current_by_booker_id(
        &self,
        booker_id: i64,
        now: NaiveDateTime,
        page: Page,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        let query = booker_query(booker_id)
            .filter(entity::booking::Column::Start.lte(now))
            .filter(entity::booking::Column::End.gte(now));

        paged(query, page).all(self.db).await
    }

    pub async fn find_past_by_booker_id(
        &self,
        booker_id: i64,
        now: NaiveDateTime,
        page: Page,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        let query = booker_query(booker_id).filter(entity::booking::Column::End.lt(now));

        paged(query, page).all(self.db).await
    }

    pub async fn find_future_by_booker_id(
        &self,
        booker_id: i64,
        now: NaiveDateTime,
        page: Page,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        let query = booker_query(booker_id).filter(entity::booking::Column::Start.gt(now));

        paged(query, page).all(self.db).await
    }

    pub async fn find_by_booker_id_and_status(
        &self,
        booker_id: i64,
        status: BookingStatus,
        page: Page,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        let query = booker_query(booker_id).filter(entity::booking::Column::Status.eq(status));

        paged(query, page).all(self.db).await
    }

    // Owner-side finders: same shapes, joined through the item to reach the
    // owner column.

    pub async fn find_all_by_owner_id(
        &self,
        owner_id: i64,
        page: Page,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        paged(owner_query(owner_id), page).all(self.db).await
    }

    pub async fn find_current_by_owner_id(
        &self,
        owner_id: i64,
        now: NaiveDateTime,
        page: Page,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        let query = owner_query(owner_id)
            .filter(entity::booking::Column::Start.lte(now))
            .filter(entity::booking::Column::End.gte(now));

        paged(query, page).all(self.db).await
    }

    pub async fn find_past_by_owner_id(
        &self,
        owner_id: i64,
        now: NaiveDateTime,
        page: Page,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        let query = owner_query(owner_id).filter(entity::booking::Column::End.lt(now));

        paged(query, page).all(self.db).await
    }

    pub async fn find_future_by_owner_id(
        &self,
        owner_id: i64,
        now: NaiveDateTime,
        page: Page,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        let query = owner_query(owner_id).filter(entity::booking::Column::Start.gt(now));

        paged(query, page).all(self.db).await
    }

    pub async fn find_by_owner_id_and_status(
        &self,
        owner_id: i64,
        status: BookingStatus,
        page: Page,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        let query = owner_query(owner_id).filter(entity::booking::Column::Status.eq(status));

        paged(query, page).all(self.db).await
    }
}

fn booker_query(booker_id: i64) -> Select<entity::prelude::Booking> {
    entity::prelude::Booking::find().filter(entity::booking::Column::BookerId.eq(booker_id))
}

fn owner_query(owner_id: i64) -> Select<entity::prelude::Booking> {
    entity::prelude::Booking::find()
        .join(JoinType::InnerJoin, entity::booking::Relation::Item.def())
        .filter(entity::item::Column::OwnerId.eq(owner_id))
}

fn paged(
    query: Select<entity::prelude::Booking>,
    page: Page,
) -> Select<entity::prelude::Booking> {
    query
        .order_by_desc(entity::booking::Column::Start)
        .offset(page.from)
        .limit(page.size)
}
