//! Persisted document shape for blog records.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use bloglist_core::domain::{Blog, NewBlog};
use bloglist_core::error::RepoError;

/// One blog record as stored in the collection.
///
/// The storage-internal `_id` never leaks past this module: every read
/// path goes through [`BlogDocument::into_blog`], which renames it to the
/// public `id`. On insert the field is omitted so storage assigns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
}

impl From<NewBlog> for BlogDocument {
    fn from(new_blog: NewBlog) -> Self {
        Self {
            id: None,
            title: new_blog.title,
            author: new_blog.author,
            url: new_blog.url,
            likes: new_blog.likes,
        }
    }
}

impl BlogDocument {
    /// Convert a document read from storage into the domain entity.
    ///
    /// Stored documents always carry an `_id`; one without it is a
    /// storage fault, not a domain state.
    pub fn into_blog(self) -> Result<Blog, RepoError> {
        let id = self
            .id
            .ok_or_else(|| RepoError::Query("document is missing _id".to_string()))?;

        Ok(Blog {
            id: id.to_hex(),
            title: self.title,
            author: self.author,
            url: self.url,
            likes: self.likes,
        })
    }

    /// Convert a just-inserted document into the domain entity, using the
    /// key storage assigned for it.
    pub fn into_blog_with_id(self, id: ObjectId) -> Blog {
        Blog {
            id: id.to_hex(),
            title: self.title,
            author: self.author,
            url: self.url,
            likes: self.likes,
        }
    }
}
