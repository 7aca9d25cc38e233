mod command;
mod error;
mod store;
mod summary;

pub use command::*;
pub use error::*;
pub use store::*;
pub use summary::*;
