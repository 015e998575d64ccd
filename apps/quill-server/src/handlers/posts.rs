//! Post resource handlers.
//!
//! Successful writes answer `302 Found` with a `Location` pointing at the
//! show page (create, update) or the index (destroy).

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;

use quill_core::domain::{Post, PostAttributes};
use quill_shared::ApiResponse;
use quill_shared::dto::{PostFields, PostFormParams, PostFormResponse, PostParams, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// Either body encoding accepted by create and update.
type PostBody = web::Either<web::Json<PostParams>, web::Form<PostFormParams>>;

const POSTS_PATH: &str = "/posts";

fn post_path(id: Uuid) -> String {
    format!("{POSTS_PATH}/{id}")
}

fn post_response(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title.clone(),
        description: post.description.clone(),
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}

fn attributes(body: PostBody) -> AppResult<PostAttributes> {
    let params: PostParams = match body {
        web::Either::Left(json) => json.into_inner(),
        web::Either::Right(form) => form
            .into_inner()
            .into_params()
            .ok_or_else(|| AppError::BadRequest("missing field `post`".to_string()))?,
    };
    Ok(PostAttributes::new(params.post.title, params.post.description))
}

fn redirect<T: serde::Serialize>(location: String, body: ApiResponse<T>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .json(body)
}

/// GET /posts
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let body: Vec<PostResponse> = posts.iter().map(post_response).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}

/// GET /posts/{id}
pub async fn show(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post = state.posts.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post_response(&post))))
}

/// HEAD /posts/{id}
pub async fn exists(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    if state.posts.exists(id.into_inner()).await? {
        Ok(HttpResponse::Ok().finish())
    } else {
        Ok(HttpResponse::NotFound().finish())
    }
}

/// GET /posts/new
pub async fn new_form() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(PostFormResponse {
        action: POSTS_PATH.to_string(),
        method: "POST".to_string(),
        post: PostFields::default(),
    }))
}

/// GET /posts/{id}/edit
pub async fn edit_form(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post = state.posts.get(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostFormResponse {
        action: post_path(post.id),
        method: "PATCH".to_string(),
        post: PostFields {
            title: post.title,
            description: post.description,
        },
    })))
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: PostBody,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(attributes(body)?).await?;

    tracing::info!(post_id = %post.id, request_id = %request_id.as_str(), "Post created");

    Ok(redirect(
        post_path(post.id),
        ApiResponse::ok_with_message(post_response(&post), "Post was successfully created."),
    ))
}

/// PATCH|PUT /posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    request_id: RequestId,
    id: web::Path<Uuid>,
    body: PostBody,
) -> AppResult<HttpResponse> {
    let post = state.posts.update(id.into_inner(), attributes(body)?).await?;

    tracing::info!(post_id = %post.id, request_id = %request_id.as_str(), "Post updated");

    Ok(redirect(
        post_path(post.id),
        ApiResponse::ok_with_message(post_response(&post), "Post was successfully updated."),
    ))
}

/// DELETE /posts/{id}
pub async fn destroy(
    state: web::Data<AppState>,
    request_id: RequestId,
    id: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    state.posts.delete(id).await?;

    tracing::info!(post_id = %id, request_id = %request_id.as_str(), "Post destroyed");

    Ok(redirect(
        POSTS_PATH.to_string(),
        ApiResponse::message("Post was successfully destroyed."),
    ))
}
