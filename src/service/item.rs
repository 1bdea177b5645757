use std::collections::HashMap;

use chrono::{NaiveDateTime, Utc};
use entity::booking::BookingStatus;
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        booking::BookingRepository,
        comment::{CommentRepository, NewComment},
        item::{ItemRepository, NewItem},
        request::RequestRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        api::Page,
        comment::{CommentDto, CommentPayload},
        item::{ItemBookingDto, ItemDto, ItemInfoDto, ItemPayload},
        user::UserDto,
    },
    validation::is_blank_str,
};

/// Among the item's bookings, the most recently ended one: non-rejected with
/// `end <= now`, greatest end wins.
pub fn find_last_booking(
    bookings: &[entity::booking::Model],
    now: NaiveDateTime,
) -> Option<&entity::booking::Model> {
    bookings
        .iter()
        .filter(|b| b.status != BookingStatus::Rejected && b.end <= now)
        .max_by_key(|b| b.end)
}

/// The nearest upcoming booking: non-rejected with `start > now`, smallest
/// start wins.
pub fn find_next_booking(
    bookings: &[entity::booking::Model],
    now: NaiveDateTime,
) -> Option<&entity::booking::Model> {
    bookings
        .iter()
        .filter(|b| b.status != BookingStatus::Rejected && b.start > now)
        .min_by_key(|b| b.start)
}

pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new item for the owner and returns the enriched view the
    /// read path produces. A `request_id` pointing at a nonexistent request is
    /// dropped rather than rejected.
    pub async fn add(&self, owner_id: i64, payload: ItemPayload) -> Result<ItemInfoDto, AppError> {
        let owner = UserRepository::new(self.db)
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| AppError::UserNotFound(format!("User with id {owner_id} not found")))?;

        let request_id = match payload.request_id {
            Some(id) => RequestRepository::new(self.db)
                .find_by_id(id)
                .await?
                .map(|request| request.id),
            None => None,
        };

        let item = ItemRepository::new(self.db)
            .create(NewItem {
                name: payload.name.unwrap_or_default(),
                description: payload.description.unwrap_or_default(),
                available: payload.available.unwrap_or_default(),
                owner_id,
                request_id,
            })
            .await?;

        tracing::info!("created item {} for owner {owner_id}", item.id);

        // Nothing can be booked or commented on yet.
        self.to_item_info(
            item,
            UserDto::from_model(owner),
            true,
            &[],
            Vec::new(),
            &HashMap::new(),
            Utc::now().naive_utc(),
        )
    }

    /// Partial update, permitted only for the item's owner. Returns the same
    /// enriched view as the owner's read path.
    pub async fn update(
        &self,
        owner_id: i64,
        item_id: i64,
        payload: ItemPayload,
    ) -> Result<ItemInfoDto, AppError> {
        let repo = ItemRepository::new(self.db);

        let item = repo
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::ItemNotFound(format!("Item with id {item_id} not found")))?;

        if item.owner_id != owner_id {
            return Err(AppError::OwnershipViolation(format!(
                "User with id {owner_id} does not own item with id {item_id}"
            )));
        }

        let name = payload.name.unwrap_or_else(|| item.name.clone());
        let description = payload
            .description
            .unwrap_or_else(|| item.description.clone());
        let available = payload.available.unwrap_or(item.available);

        let item = repo.update(item, name, description, available).await?;

        tracing::info!("updated item {item_id}");

        let owner = UserRepository::new(self.db)
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| AppError::UserNotFound(format!("User with id {owner_id} not found")))?;

        let bookings = BookingRepository::new(self.db).find_by_item_id(item_id).await?;
        let comments = CommentRepository::new(self.db).find_by_item_id(item_id).await?;
        let author_names = self.resolve_author_names(&comments).await?;

        self.to_item_info(
            item,
            UserDto::from_model(owner),
            true,
            &bookings,
            comments,
            &author_names,
            Utc::now().naive_utc(),
        )
    }

    /// Fetches one enriched item view. Last/next booking data is visible only
    /// to the owner; comments are visible to everyone.
    pub async fn get_by_id(&self, requester_id: i64, item_id: i64) -> Result<ItemInfoDto, AppError> {
        let item = ItemRepository::new(self.db)
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::ItemNotFound(format!("Item with id {item_id} not found")))?;

        let owner = UserRepository::new(self.db)
            .find_by_id(item.owner_id)
            .await?
            .ok_or_else(|| {
                AppError::UserNotFound(format!("User with id {} not found", item.owner_id))
            })?;

        let bookings = BookingRepository::new(self.db).find_by_item_id(item_id).await?;
        let comments = CommentRepository::new(self.db).find_by_item_id(item_id).await?;
        let author_names = self.resolve_author_names(&comments).await?;

        let for_owner = requester_id == item.owner_id;

        self.to_item_info(
            item,
            UserDto::from_model(owner),
            for_owner,
            &bookings,
            comments,
            &author_names,
            Utc::now().naive_utc(),
        )
    }

    /// The owner's items as enriched views, id ascending, paged.
    pub async fn get_all_by_owner(
        &self,
        owner_id: i64,
        page: Page,
    ) -> Result<Vec<ItemInfoDto>, AppError> {
        let owner = UserRepository::new(self.db)
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| AppError::UserNotFound(format!("User with id {owner_id} not found")))?;
        let owner = UserDto::from_model(owner);

        let items = ItemRepository::new(self.db)
            .find_by_owner_id(owner_id, page)
            .await?;
        let item_ids: Vec<i64> = items.iter().map(|item| item.id).collect();

        let bookings = BookingRepository::new(self.db)
            .find_by_item_ids(item_ids.clone())
            .await?;
        let comments = CommentRepository::new(self.db).find_by_item_ids(item_ids).await?;
        let author_names = self.resolve_author_names(&comments).await?;

        let mut bookings_by_item: HashMap<i64, Vec<entity::booking::Model>> = HashMap::new();
        for booking in bookings {
            bookings_by_item.entry(booking.item_id).or_default().push(booking);
        }

        let mut comments_by_item: HashMap<i64, Vec<entity::comment::Model>> = HashMap::new();
        for comment in comments {
            comments_by_item.entry(comment.item_id).or_default().push(comment);
        }

        let now = Utc::now().naive_utc();
        let mut views = Vec::with_capacity(items.len());

        for item in items {
            let item_bookings = bookings_by_item.remove(&item.id).unwrap_or_default();
            let item_comments = comments_by_item.remove(&item.id).unwrap_or_default();

            views.push(self.to_item_info(
                item,
                owner.clone(),
                true,
                &item_bookings,
                item_comments,
                &author_names,
                now,
            )?);
        }

        Ok(views)
    }

    pub async fn delete(&self, item_id: i64) -> Result<(), AppError> {
        let repo = ItemRepository::new(self.db);

        repo.find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::ItemNotFound(format!("Item with id {item_id} not found")))?;

        repo.delete(item_id).await?;

        tracing::info!("deleted item {item_id}");

        Ok(())
    }

    /// Text search over available items. Blank text short-circuits to an empty
    /// result without touching the store.
    pub async fn search(&self, text: &str, page: Page) -> Result<Vec<ItemDto>, AppError> {
        if is_blank_str(text) {
            return Ok(Vec::new());
        }

        let items = ItemRepository::new(self.db).search(text, page).await?;

        Ok(items.into_iter().map(ItemDto::from_model).collect())
    }

    /// Records a comment from a user who has a finished, non-rejected booking
    /// of the item.
    pub async fn add_comment(
        &self,
        author_id: i64,
        item_id: i64,
        payload: CommentPayload,
    ) -> Result<CommentDto, AppError> {
        ItemRepository::new(self.db)
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::ItemNotFound(format!("Item with id {item_id} not found")))?;

        let author = UserRepository::new(self.db)
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| AppError::UserNotFound(format!("User with id {author_id} not found")))?;

        let now = Utc::now().naive_utc();

        let eligible = BookingRepository::new(self.db)
            .find_all_by_booker_and_item(author_id, item_id)
            .await?
            .iter()
            .any(|b| b.status != BookingStatus::Rejected && b.end <= now);

        if !eligible {
            return Err(AppError::BadRequest(format!(
                "User with id {author_id} has no finished booking of item with id {item_id}"
            )));
        }

        let comment = CommentRepository::new(self.db)
            .create(NewComment {
                text: payload.text.unwrap_or_default(),
                item_id,
                author_id,
                created: now,
            })
            .await?;

        tracing::info!("user {author_id} commented on item {item_id}");

        Ok(CommentDto::from_model(comment, author.name))
    }

    async fn resolve_author_names(
        &self,
        comments: &[entity::comment::Model],
    ) -> Result<HashMap<i64, String>, AppError> {
        let author_ids: Vec<i64> = comments.iter().map(|c| c.author_id).collect();

        let names = UserRepository::new(self.db)
            .find_by_ids(author_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user.name))
            .collect();

        Ok(names)
    }

    #[allow(clippy::too_many_arguments)]
    fn to_item_info(
        &self,
        item: entity::item::Model,
        owner: UserDto,
        for_owner: bool,
        bookings: &[entity::booking::Model],
        comments: Vec<entity::comment::Model>,
        author_names: &HashMap<i64, String>,
        now: NaiveDateTime,
    ) -> Result<ItemInfoDto, AppError> {
        let (last_booking, next_booking) = if for_owner {
            (
                find_last_booking(bookings, now).map(ItemBookingDto::from_model),
                find_next_booking(bookings, now).map(ItemBookingDto::from_model),
            )
        } else {
            (None, None)
        };

        let mut comment_dtos = Vec::with_capacity(comments.len());
        for comment in comments {
            let author_name = author_names.get(&comment.author_id).cloned().ok_or_else(|| {
                AppError::UserNotFound(format!("User with id {} not found", comment.author_id))
            })?;

            comment_dtos.push(CommentDto::from_model(comment, author_name));
        }

        Ok(ItemInfoDto {
            id: item.id,
            name: item.name,
            description: item.description,
            available: item.available,
            owner,
            request_id: item.request_id,
            last_booking,
            next_booking,
            comments: comment_dtos,
        })
    }
}
