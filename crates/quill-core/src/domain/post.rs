use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{ValidationErrors, require_present};

/// Post entity - a titled entry with a free-form description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating or updating a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAttributes {
    pub title: String,
    pub description: String,
}

impl PostAttributes {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Check every required field, collecting all failures.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        require_present(&mut errors, "title", &self.title);
        require_present(&mut errors, "description", &self.description);
        errors.into_result()
    }
}

impl Post {
    /// Build a new post from validated attributes.
    ///
    /// The id and both timestamps are assigned here; nothing is persisted.
    pub fn create(attrs: PostAttributes, now: DateTime<Utc>) -> Result<Self, ValidationErrors> {
        attrs.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            title: attrs.title,
            description: attrs.description,
            created_at: now,
            updated_at: now,
        })
    }

    /// Produce the candidate that would replace this post.
    ///
    /// `self` is left untouched, so a failed validation cannot leak into the
    /// stored record.
    pub fn revise(&self, attrs: PostAttributes, now: DateTime<Utc>) -> Result<Self, ValidationErrors> {
        attrs.validate()?;
        Ok(Self {
            id: self.id,
            title: attrs.title,
            description: attrs.description,
            created_at: self.created_at,
            updated_at: now,
        })
    }
}
