pub mod config;
pub mod error;
pub mod export;
pub mod observability;
pub mod state;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
