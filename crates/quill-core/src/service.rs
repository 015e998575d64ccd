//! Post resource service - validation and CRUD over a `PostRepository`.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{Post, PostAttributes};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

const ENTITY: &str = "Post";

/// Owns the post collection (through its repository) and every operation on it.
///
/// Writes validate a candidate record first and only then hand it to the
/// repository, which applies it atomically.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// All persisted posts, oldest first.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: ENTITY,
                id,
            })
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.repo.find_by_id(id).await?.is_some())
    }

    pub async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.repo.count().await?)
    }

    /// Validate and persist a new post.
    pub async fn create(&self, attrs: PostAttributes) -> Result<Post, DomainError> {
        let post = Post::create(attrs, Utc::now())?;
        Ok(self.repo.insert(post).await?)
    }

    /// Validate and replace the title and description of an existing post.
    ///
    /// An unknown id is reported before validation runs.
    pub async fn update(&self, id: Uuid, attrs: PostAttributes) -> Result<Post, DomainError> {
        let current = self.get(id).await?;
        let candidate = current.revise(attrs, Utc::now())?;
        self.repo
            .update(candidate)
            .await
            .map_err(|e| not_found_or(e, id))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.repo.delete(id).await.map_err(|e| not_found_or(e, id))
    }
}

fn not_found_or(err: RepoError, id: Uuid) -> DomainError {
    match err {
        RepoError::NotFound => DomainError::NotFound {
            entity_type: ENTITY,
            id,
        },
        other => DomainError::Repository(other),
    }
}
