pub mod error;
mod repository;
pub mod types;

pub use error::*;
pub use repository::RepositoryId;
pub use types::*;
