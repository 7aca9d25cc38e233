use fasthealth_mealplan::PlanError;
use fasthealth_recipe::CatalogError;
use fasthealth_shopping::ItemKeyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("Plan error: {0}")]
    PlanError(#[from] PlanError),

    #[error("Invalid item key: {0}")]
    ItemKeyError(#[from] ItemKeyError),

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Time format error: {0}")]
    TimeFormatError(String),
}

impl From<time::error::Format> for AppError {
    fn from(err: time::error::Format) -> Self {
        AppError::TimeFormatError(err.to_string())
    }
}

impl From<time::error::InvalidFormatDescription> for AppError {
    fn from(err: time::error::InvalidFormatDescription) -> Self {
        AppError::TimeFormatError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
