use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{UserDto, UserPayload},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<UserDto>, AppError> {
        let users = UserRepository::new(self.db).find_all().await?;

        Ok(users.into_iter().map(UserDto::from_model).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<UserDto, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::UserNotFound(format!("User with id {id} not found")))?;

        Ok(UserDto::from_model(user))
    }

    /// Registers a new user. The payload passed boundary validation, so name
    /// and email are present and well-formed here.
    pub async fn add(&self, payload: UserPayload) -> Result<UserDto, AppError> {
        let name = payload.name.unwrap_or_default();
        let email = payload.email.unwrap_or_default();

        let user = UserRepository::new(self.db).create(name, email).await?;

        tracing::info!("created user {}", user.id);

        Ok(UserDto::from_model(user))
    }

    /// Partial update: absent fields keep their current values.
    pub async fn update(&self, id: i64, payload: UserPayload) -> Result<UserDto, AppError> {
        let repo = UserRepository::new(self.db);

        let user = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::UserNotFound(format!("User with id {id} not found")))?;

        let name = payload.name.unwrap_or_else(|| user.name.clone());
        let email = payload.email.unwrap_or_else(|| user.email.clone());

        let user = repo.update(user, name, email).await?;

        tracing::info!("updated user {}", user.id);

        Ok(UserDto::from_model(user))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::UserNotFound(format!("User with id {id} not found")))?;

        repo.delete(id).await?;

        tracing::info!("deleted user {id}");

        Ok(())
    }
}
