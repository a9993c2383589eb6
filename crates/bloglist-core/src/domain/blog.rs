use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Blog entity - one persisted blog record.
///
/// The `id` is assigned by storage on creation and is immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
}

/// An unvalidated creation candidate, exactly as submitted by a caller.
///
/// Every field is optional here; [`BlogDraft::validate`] decides what is
/// actually acceptable.
#[derive(Debug, Clone, Default)]
pub struct BlogDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

/// A validated candidate, ready to be persisted. Has no `id` yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBlog {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
}

impl BlogDraft {
    /// Validate the draft into a persistable candidate.
    ///
    /// `title` and `url` must be present and non-empty. A missing `likes`
    /// defaults to 0; an explicit 0 is kept as-is; negative values are
    /// rejected so persisted counts stay non-negative.
    pub fn validate(self) -> Result<NewBlog, DomainError> {
        let title = self
            .title
            .filter(|t| !t.is_empty())
            .ok_or_else(|| DomainError::Validation("title is required".to_string()))?;

        let url = self
            .url
            .filter(|u| !u.is_empty())
            .ok_or_else(|| DomainError::Validation("url is required".to_string()))?;

        let likes = self.likes.unwrap_or(0);
        if likes < 0 {
            return Err(DomainError::Validation(
                "likes must not be negative".to_string(),
            ));
        }

        Ok(NewBlog {
            title,
            author: self.author,
            url,
            likes,
        })
    }
}
