use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlanError>;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Unknown day: {0}")]
    UnknownDay(String),

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Failed to write plan: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
