use std::collections::BTreeMap;

use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
use uuid::Uuid;

use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository};

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn model(title: &str) -> post::Model {
    let now = Utc::now();
    post::Model {
        id: Uuid::new_v4(),
        title: title.to_owned(),
        description: "This is a test description".to_owned(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let row = model("Test Post");
    let post_id = row.id;

    // Mock the query expectation
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.description, "This is a test description");
    assert_eq!(post.id, post_id);
}

#[tokio::test]
async fn test_find_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(Uuid::new_v4()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_insert_returns_stored_row() {
    let row = model("Test Post");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row.clone()]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let saved: Post = repo.insert(Post::from(row.clone())).await.unwrap();
    assert_eq!(saved.id, row.id);
    assert_eq!(saved.title, "Test Post");
}

#[tokio::test]
async fn test_find_all_keeps_row_order() {
    let first = model("First");
    let second = model("Second");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![first.clone(), second.clone()]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let ids: Vec<Uuid> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn test_update_returns_revised_row() {
    let row = model("Updated Title");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row.clone()]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let saved: Post = repo.update(Post::from(row.clone())).await.unwrap();
    assert_eq!(saved.id, row.id);
    assert_eq!(saved.title, "Updated Title");
}

#[tokio::test]
async fn test_update_missing_row_is_not_found() {
    // UPDATE ... RETURNING yields no row when the id is gone.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let err = BaseRepository::<Post, Uuid>::update(&repo, Post::from(model("Gone")))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_count_posts() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![BTreeMap::from([(
            "num_items",
            Value::BigInt(Some(3)),
        )])]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert_eq!(repo.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_delete_missing_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let err = BaseRepository::<Post, Uuid>::delete(&repo, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_delete_existing_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    BaseRepository::<Post, Uuid>::delete(&repo, Uuid::new_v4())
        .await
        .unwrap();
}
