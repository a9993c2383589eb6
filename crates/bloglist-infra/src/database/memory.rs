//! In-memory blog repository - used as fallback when MongoDB is unavailable.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use bloglist_core::domain::{Blog, NewBlog};
use bloglist_core::error::RepoError;
use bloglist_core::ports::BlogRepository;

/// In-memory blog repository backed by a Vec with an async RwLock.
///
/// This is the fallback implementation when no database is configured,
/// and the storage used by the HTTP integration tests.
/// Note: Data is lost on process restart.
pub struct InMemoryBlogRepository {
    store: RwLock<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn list_all(&self) -> Result<Vec<Blog>, RepoError> {
        let store = self.store.read().await;
        Ok(store.clone())
    }

    async fn create(&self, new_blog: NewBlog) -> Result<Blog, RepoError> {
        let blog = Blog {
            id: Uuid::new_v4().simple().to_string(),
            title: new_blog.title,
            author: new_blog.author,
            url: new_blog.url,
            likes: new_blog.likes,
        };

        let mut store = self.store.write().await;
        store.push(blog.clone());
        Ok(blog)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.retain(|blog| blog.id != id);
        Ok(())
    }
}
