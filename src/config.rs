use crate::error::{config::ConfigError, AppError};

const DEFAULT_APP_ADDRESS: &str = "0.0.0.0:9090";

pub struct Config {
    pub database_url: String,
    pub app_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_address: std::env::var("APP_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_APP_ADDRESS.to_string()),
        })
    }
}
