//! Database access - connection management and blog repositories.

mod connections;
mod memory;

#[cfg(feature = "mongo")]
mod document;
#[cfg(feature = "mongo")]
mod mongo_repo;

pub use connections::{MongoConfig, MongoConnection};
pub use memory::InMemoryBlogRepository;

#[cfg(feature = "mongo")]
pub use document::BlogDocument;
#[cfg(feature = "mongo")]
pub use mongo_repo::MongoBlogRepository;
