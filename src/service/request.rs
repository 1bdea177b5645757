use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::{item::ItemRepository, request::RequestRepository, user::UserRepository},
    error::AppError,
    model::{
        api::Page,
        item::ItemDto,
        request::{RequestInfoDto, RequestPayload},
    },
};

pub struct RequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new item request. `created` is stamped server-side; the
    /// response carries an empty items list, nothing can fulfill it yet.
    pub async fn add(
        &self,
        user_id: i64,
        payload: RequestPayload,
    ) -> Result<RequestInfoDto, AppError> {
        self.ensure_user_exists(user_id).await?;

        let request = RequestRepository::new(self.db)
            .create(
                payload.description.unwrap_or_default(),
                user_id,
                Utc::now().naive_utc(),
            )
            .await?;

        tracing::info!("created request {} for user {user_id}", request.id);

        Ok(RequestInfoDto::from_model(request, Vec::new()))
    }

    pub async fn get_by_id(
        &self,
        user_id: i64,
        request_id: i64,
    ) -> Result<RequestInfoDto, AppError> {
        self.ensure_user_exists(user_id).await?;

        let request = RequestRepository::new(self.db)
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| {
                AppError::RequestNotFound(format!("Request with id {request_id} not found"))
            })?;

        self.enrich(request).await
    }

    /// The requester's own requests, newest first and paged, each with its
    /// fulfilling items.
    pub async fn get_all_own(
        &self,
        user_id: i64,
        page: Page,
    ) -> Result<Vec<RequestInfoDto>, AppError> {
        self.ensure_user_exists(user_id).await?;

        let requests = RequestRepository::new(self.db)
            .find_all_by_user_id(user_id, page)
            .await?;

        let mut views = Vec::with_capacity(requests.len());
        for request in requests {
            views.push(self.enrich(request).await?);
        }

        Ok(views)
    }

    /// Requests placed by other users, newest first, paged.
    pub async fn get_all_from_others(
        &self,
        user_id: i64,
        page: Page,
    ) -> Result<Vec<RequestInfoDto>, AppError> {
        self.ensure_user_exists(user_id).await?;

        let requests = RequestRepository::new(self.db)
            .find_all_from_others(user_id, page)
            .await?;

        let mut views = Vec::with_capacity(requests.len());
        for request in requests {
            views.push(self.enrich(request).await?);
        }

        Ok(views)
    }

    async fn ensure_user_exists(&self, user_id: i64) -> Result<(), AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::UserNotFound(format!("User with id {user_id} not found")))?;

        Ok(())
    }

    async fn enrich(
        &self,
        request: entity::item_request::Model,
    ) -> Result<RequestInfoDto, AppError> {
        let items = ItemRepository::new(self.db)
            .find_all_by_request_id(request.id)
            .await?
            .into_iter()
            .map(ItemDto::from_model)
            .collect();

        Ok(RequestInfoDto::from_model(request, items))
    }
}
