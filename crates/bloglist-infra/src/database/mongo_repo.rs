//! MongoDB repository implementation.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Collection, Database};

use bloglist_core::domain::{Blog, NewBlog};
use bloglist_core::error::RepoError;
use bloglist_core::ports::BlogRepository;

use super::document::BlogDocument;

const COLLECTION: &str = "blogs";

/// MongoDB blog repository - one document per blog record.
pub struct MongoBlogRepository {
    collection: Collection<BlogDocument>,
}

impl MongoBlogRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl BlogRepository for MongoBlogRepository {
    async fn list_all(&self) -> Result<Vec<Blog>, RepoError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        let documents: Vec<BlogDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        documents
            .into_iter()
            .map(BlogDocument::into_blog)
            .collect()
    }

    async fn create(&self, new_blog: NewBlog) -> Result<Blog, RepoError> {
        tracing::debug!(blog_title = %new_blog.title, "Inserting blog");

        let document = BlogDocument::from(new_blog);
        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| RepoError::Query("insert did not return an ObjectId".to_string()))?;

        Ok(document.into_blog_with_id(id))
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), RepoError> {
        let oid =
            ObjectId::parse_str(id).map_err(|_| RepoError::MalformedId(id.to_string()))?;

        // Idempotent: a zero-match delete is still a success.
        self.collection
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(())
    }
}
