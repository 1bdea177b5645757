//! Booking factory for creating test booking entities.

use chrono::{Duration, NaiveDateTime, Utc};
use entity::booking::BookingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// Item and booker are mandatory; dates default to a one-day booking starting
/// tomorrow, and the status defaults to `Waiting` as freshly created bookings
/// always do.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    item_id: i64,
    booker_id: i64,
    start: NaiveDateTime,
    end: NaiveDateTime,
    status: BookingStatus,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - start: now + 1 day
    /// - end: now + 2 days
    /// - status: `Waiting`
    pub fn new(db: &'a DatabaseConnection, item_id: i64, booker_id: i64) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            db,
            item_id,
            booker_id,
            start: now + Duration::days(1),
            end: now + Duration::days(2),
            status: BookingStatus::Waiting,
        }
    }

    /// Sets the booking start timestamp.
    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = start;
        self
    }

    /// Sets the booking end timestamp.
    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = end;
        self
    }

    /// Sets the booking status.
    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Shifts the booking interval to the past: start two days ago, end one
    /// day ago. Useful for comment-eligibility and "last booking" scenarios.
    pub fn in_past(mut self) -> Self {
        let now = Utc::now().naive_utc();
        self.start = now - Duration::days(2);
        self.end = now - Duration::days(1);
        self
    }

    /// Makes the booking interval contain the current instant.
    pub fn current(mut self) -> Self {
        let now = Utc::now().naive_utc();
        self.start = now - Duration::hours(1);
        self.end = now + Duration::hours(1);
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            start: ActiveValue::Set(self.start),
            end: ActiveValue::Set(self.end),
            item_id: ActiveValue::Set(self.item_id),
            booker_id: ActiveValue::Set(self.booker_id),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a future `Waiting` booking for the given item and booker.
pub async fn create_booking(
    db: &DatabaseConnection,
    item_id: i64,
    booker_id: i64,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, item_id, booker_id).build().await
}
