use async_trait::async_trait;

use crate::domain::{Blog, NewBlog};
use crate::error::RepoError;

/// Blog repository - the storage boundary for blog records.
///
/// Implementations normalize the storage-internal key to the public `id`
/// on every record they hand out.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// All persisted blogs, in storage order.
    async fn list_all(&self) -> Result<Vec<Blog>, RepoError>;

    /// Persist a validated candidate. Storage assigns the `id`.
    async fn create(&self, new_blog: NewBlog) -> Result<Blog, RepoError>;

    /// Delete the blog matching `id`. Succeeds whether or not a match
    /// existed; only storage-level faults are errors.
    async fn delete_by_id(&self, id: &str) -> Result<(), RepoError>;
}
