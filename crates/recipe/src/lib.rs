pub mod catalog;
pub mod error;
pub mod filter;

pub use catalog::RecipeCatalog;
pub use error::{CatalogError, CatalogResult};
pub use filter::RecipeFilter;
