use std::collections::HashMap;

use chrono::Utc;
use entity::booking::BookingStatus;
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        booking::{BookingRepository, NewBooking},
        item::ItemRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        api::Page,
        booking::{BookingDto, BookingPayload, QueryState},
    },
};

/// Owns the booking lifecycle: creation in WAITING, the single owner-driven
/// transition to a terminal status, visibility rules, and state-filtered
/// retrieval for both sides of a booking.
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a booking in WAITING status.
    ///
    /// Precondition order matters for the reported error: item existence and
    /// availability are checked before the booker, and an owner booking their
    /// own item is hidden behind a not-found response.
    pub async fn add(&self, booker_id: i64, payload: BookingPayload) -> Result<BookingDto, AppError> {
        let item_id = payload.item_id;

        let item = ItemRepository::new(self.db)
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::ItemNotFound(format!("Item with id {item_id} not found")))?;

        if !item.available {
            return Err(AppError::BadRequest(format!(
                "Item with id {item_id} is not available"
            )));
        }

        let booker = UserRepository::new(self.db)
            .find_by_id(booker_id)
            .await?
            .ok_or_else(|| AppError::UserNotFound(format!("User with id {booker_id} not found")))?;

        if item.owner_id == booker_id {
            return Err(AppError::BookingOwnershipViolation(format!(
                "Item with id {item_id} cannot be booked by its owner"
            )));
        }

        let booking = BookingRepository::new(self.db)
            .create(NewBooking {
                start: payload.start,
                end: payload.end,
                item_id,
                booker_id,
            })
            .await?;

        tracing::info!("created booking {} for item {item_id}", booking.id);

        Ok(BookingDto::from_model(booking, item, booker))
    }

    /// Approves or rejects a WAITING booking.
    ///
    /// Only the item's owner may transition a booking; anyone else gets the
    /// same not-found error a nonexistent booking would produce. APPROVED and
    /// REJECTED are terminal.
    pub async fn update(
        &self,
        owner_id: i64,
        booking_id: i64,
        approved: bool,
    ) -> Result<BookingDto, AppError> {
        let repo = BookingRepository::new(self.db);

        let booking = repo.find_by_id(booking_id).await?.ok_or_else(|| {
            AppError::BookingNotFound(format!("Booking with id {booking_id} not found"))
        })?;

        let item = ItemRepository::new(self.db)
            .find_by_id(booking.item_id)
            .await?
            .ok_or_else(|| {
                AppError::ItemNotFound(format!("Item with id {} not found", booking.item_id))
            })?;

        if item.owner_id != owner_id {
            return Err(AppError::BookingNotFound(format!(
                "Booking with id {booking_id} not found"
            )));
        }

        if booking.status.is_terminal() {
            return Err(AppError::BadRequest(format!(
                "Booking with id {booking_id} has already been finalized"
            )));
        }

        let status = if approved {
            BookingStatus::Approved
        } else {
            BookingStatus::Rejected
        };

        let booking = repo.update_status(booking, status).await?;

        tracing::info!(
            "booking {booking_id} set to {} by owner {owner_id}",
            booking.status.as_str()
        );

        let booker = self.fetch_booker(booking.booker_id).await?;

        Ok(BookingDto::from_model(booking, item, booker))
    }

    /// Fetches one booking, visible only to its booker or the item's owner.
    /// Any other requester gets the not-found error.
    pub async fn get_by_id(
        &self,
        requester_id: i64,
        booking_id: i64,
    ) -> Result<BookingDto, AppError> {
        let booking = BookingRepository::new(self.db)
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| {
                AppError::BookingNotFound(format!("Booking with id {booking_id} not found"))
            })?;

        let item = ItemRepository::new(self.db)
            .find_by_id(booking.item_id)
            .await?
            .ok_or_else(|| {
                AppError::ItemNotFound(format!("Item with id {} not found", booking.item_id))
            })?;

        if requester_id != booking.booker_id && requester_id != item.owner_id {
            return Err(AppError::BookingNotFound(format!(
                "Booking with id {booking_id} not found"
            )));
        }

        let booker = self.fetch_booker(booking.booker_id).await?;

        Ok(BookingDto::from_model(booking, item, booker))
    }

    /// Bookings placed by the user, filtered by state.
    pub async fn get_all_by_user_id(
        &self,
        booker_id: i64,
        state: QueryState,
        page: Page,
    ) -> Result<Vec<BookingDto>, AppError> {
        UserRepository::new(self.db)
            .find_by_id(booker_id)
            .await?
            .ok_or_else(|| AppError::UserNotFound(format!("User with id {booker_id} not found")))?;

        let repo = BookingRepository::new(self.db);
        let now = Utc::now().naive_utc();

        let bookings = match state {
            QueryState::All => repo.find_all_by_booker_id(booker_id, page).await?,
            QueryState::Current => repo.find_current_by_booker_id(booker_id, now, page).await?,
            QueryState::Past => repo.find_past_by_booker_id(booker_id, now, page).await?,
            QueryState::Future => repo.find_future_by_booker_id(booker_id, now, page).await?,
            QueryState::Waiting => {
                repo.find_by_booker_id_and_status(booker_id, BookingStatus::Waiting, page)
                    .await?
            }
            QueryState::Approved => {
                repo.find_by_booker_id_and_status(booker_id, BookingStatus::Approved, page)
                    .await?
            }
            QueryState::Rejected => {
                repo.find_by_booker_id_and_status(booker_id, BookingStatus::Rejected, page)
                    .await?
            }
        };

        self.to_dtos(bookings).await
    }

    /// Bookings placed against the owner's items, filtered by state. An owner
    /// with no items has nothing to query and gets an item not-found error;
    /// a nonexistent user is reported the same way.
    pub async fn get_all_by_owner_id(
        &self,
        owner_id: i64,
        state: QueryState,
        page: Page,
    ) -> Result<Vec<BookingDto>, AppError> {
        if !ItemRepository::new(self.db).exists_by_owner_id(owner_id).await? {
            return Err(AppError::ItemNotFound(format!(
                "User with id {owner_id} has no items"
            )));
        }

        let repo = BookingRepository::new(self.db);
        let now = Utc::now().naive_utc();

        let bookings = match state {
            QueryState::All => repo.find_all_by_owner_id(owner_id, page).await?,
            QueryState::Current => repo.find_current_by_owner_id(owner_id, now, page).await?,
            QueryState::Past => repo.find_past_by_owner_id(owner_id, now, page).await?,
            QueryState::Future => repo.find_future_by_owner_id(owner_id, now, page).await?,
            QueryState::Waiting => {
                repo.find_by_owner_id_and_status(owner_id, BookingStatus::Waiting, page)
                    .await?
            }
            QueryState::Approved => {
                repo.find_by_owner_id_and_status(owner_id, BookingStatus::Approved, page)
                    .await?
            }
            QueryState::Rejected => {
                repo.find_by_owner_id_and_status(owner_id, BookingStatus::Rejected, page)
                    .await?
            }
        };

        self.to_dtos(bookings).await
    }

    async fn fetch_booker(&self, booker_id: i64) -> Result<entity::user::Model, AppError> {
        UserRepository::new(self.db)
            .find_by_id(booker_id)
            .await?
            .ok_or_else(|| AppError::UserNotFound(format!("User with id {booker_id} not found")))
    }

    /// Maps a page of bookings to views, resolving items and bookers in bulk.
    /// The result is sorted by id descending regardless of the query order.
    async fn to_dtos(&self, bookings: Vec<entity::booking::Model>) -> Result<Vec<BookingDto>, AppError> {
        let item_ids: Vec<i64> = bookings.iter().map(|b| b.item_id).collect();
        let booker_ids: Vec<i64> = bookings.iter().map(|b| b.booker_id).collect();

        let items: HashMap<i64, entity::item::Model> = ItemRepository::new(self.db)
            .find_by_ids(item_ids)
            .await?
            .into_iter()
            .map(|item| (item.id, item))
            .collect();

        let bookers: HashMap<i64, entity::user::Model> = UserRepository::new(self.db)
            .find_by_ids(booker_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        let mut dtos = Vec::with_capacity(bookings.len());

        for booking in bookings {
            let item = items
                .get(&booking.item_id)
                .cloned()
                .ok_or_else(|| {
                    AppError::ItemNotFound(format!("Item with id {} not found", booking.item_id))
                })?;
            let booker = bookers
                .get(&booking.booker_id)
                .cloned()
                .ok_or_else(|| {
                    AppError::UserNotFound(format!("User with id {} not found", booking.booker_id))
                })?;

            dtos.push(BookingDto::from_model(booking, item, booker));
        }

        dtos.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(dtos)
    }
}
