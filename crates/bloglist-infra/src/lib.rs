//! # Bloglist Infrastructure
//!
//! Concrete implementations of the ports defined in `bloglist-core`.
//! This crate contains the database integrations.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `mongo` - MongoDB persistence via the official driver

pub mod database;

// Re-exports - In-Memory
pub use database::InMemoryBlogRepository;
pub use database::{MongoConfig, MongoConnection};

#[cfg(feature = "mongo")]
pub use database::MongoBlogRepository;
