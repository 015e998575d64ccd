//! In-memory post repository - used when no database is configured.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository};

#[derive(Default)]
struct Store {
    /// Insertion sequence -> post. Iteration order is list order.
    posts: BTreeMap<u64, Post>,
    index: HashMap<Uuid, u64>,
    next_seq: u64,
}

/// In-memory post repository behind a single async RwLock.
///
/// Every write holds the lock for its whole check-and-mutate step.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::default()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .index
            .get(&id)
            .and_then(|seq| store.posts.get(seq))
            .cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        if store.index.contains_key(&post.id) {
            return Err(RepoError::Constraint(format!(
                "post {} already exists",
                post.id
            )));
        }

        let seq = store.next_seq;
        store.next_seq += 1;
        store.index.insert(post.id, seq);
        store.posts.insert(seq, post.clone());

        tracing::debug!(post_id = %post.id, "Inserted post");
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let seq = *store.index.get(&post.id).ok_or(RepoError::NotFound)?;
        store.posts.insert(seq, post.clone());

        tracing::debug!(post_id = %post.id, "Updated post");
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let seq = store.index.remove(&id).ok_or(RepoError::NotFound)?;
        store.posts.remove(&seq);

        tracing::debug!(post_id = %id, "Deleted post");
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.values().cloned().collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        let store = self.store.read().await;
        Ok(store.index.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;
    use quill_core::PostService;
    use quill_core::domain::PostAttributes;

    use super::*;

    fn post(title: &str) -> Post {
        Post::create(PostAttributes::new(title, "Content"), Utc::now()).unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryPostRepository::new();
        let saved = repo.insert(post("First")).await.unwrap();

        let found = repo.find_by_id(saved.id).await.unwrap();
        assert_eq!(found, Some(saved));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_duplicate_id_is_rejected() {
        let repo = InMemoryPostRepository::new();
        let saved = repo.insert(post("First")).await.unwrap();

        let err = repo.insert(saved).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_keeps_position() {
        let repo = InMemoryPostRepository::new();
        let first = repo.insert(post("First")).await.unwrap();
        let second = repo.insert(post("Second")).await.unwrap();

        let mut changed = first.clone();
        changed.title = "First, edited".to_string();
        repo.update(changed).await.unwrap();

        let titles: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["First, edited".to_string(), second.title]);
    }

    #[tokio::test]
    async fn test_update_missing_does_not_insert() {
        let repo = InMemoryPostRepository::new();

        let err = repo.update(post("Ghost")).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryPostRepository::new();
        let saved = repo.insert(post("First")).await.unwrap();

        repo.delete(saved.id).await.unwrap();
        assert_eq!(repo.find_by_id(saved.id).await.unwrap(), None);
        assert!(matches!(
            repo.delete(saved.id).await.unwrap_err(),
            RepoError::NotFound
        ));
    }

    #[tokio::test]
    async fn test_concurrent_creates_are_all_kept() {
        let service = PostService::new(Arc::new(InMemoryPostRepository::new()));

        let mut handles = Vec::new();
        for i in 0..16 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service
                    .create(PostAttributes::new(format!("Post {i}"), "Body"))
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(service.count().await.unwrap(), 16);
    }
}
