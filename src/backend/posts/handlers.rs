/**
 * Post HTTP Handlers
 *
 * # Endpoints
 *
 * - `GET    /api/posts` - All posts, newest first (`?user_id=` filters by author)
 * - `GET    /api/posts/{id}` - One post
 * - `POST   /api/posts` - Create (auth)
 * - `PUT    /api/posts/{id}` - Partial update by the author (auth)
 * - `DELETE /api/posts/{id}` - Delete by the author (auth)
 * - `POST   /api/posts/like/{id}` - Like (auth)
 * - `DELETE /api/posts/unlike/{id}` - Remove like (auth)
 */

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::extract::{ApiJson, ApiQuery, EntityId};
use crate::backend::middleware::AuthUser;
use crate::backend::posts::db;
use crate::shared::{CreatePostRequest, MessageResponse, PostResponse, PostView, UpdatePostRequest};

/// Optional filters on the post listing
#[derive(Debug, Default, Deserialize)]
pub struct PostFilter {
    pub user_id: Option<i64>,
}

fn post_not_found() -> BackendError {
    BackendError::not_found("Post not found")
}

pub async fn list_posts(
    State(pool): State<SqlitePool>,
    ApiQuery(filter): ApiQuery<PostFilter>,
) -> BackendResult<Json<Vec<PostView>>> {
    let posts = db::list_posts(&pool, filter.user_id).await?;
    tracing::debug!("Listing {} posts", posts.len());
    Ok(Json(posts))
}

pub async fn get_post(
    State(pool): State<SqlitePool>,
    EntityId(post_id): EntityId,
) -> BackendResult<Json<PostView>> {
    let post = db::get_post(&pool, post_id).await?.ok_or_else(post_not_found)?;
    Ok(Json(post))
}

/// Create a post authored by the caller
///
/// Responds `201 Created` with the stored record.
pub async fn create_post(
    State(pool): State<SqlitePool>,
    user: AuthUser,
    ApiJson(request): ApiJson<CreatePostRequest>,
) -> BackendResult<(StatusCode, Json<PostResponse>)> {
    let (content, image_url) = request.validate()?;
    let post = db::create_post(&pool, user.id(), content, image_url).await?;
    tracing::info!("User {} created post {}", user.id(), post.id);
    Ok((
        StatusCode::CREATED,
        Json(PostResponse {
            msg: "Post created successfully".to_string(),
            post,
        }),
    ))
}

/// Update content and/or image of a post
///
/// Absent or blank fields keep their stored value. Only the author may
/// update; anyone else gets 403.
pub async fn update_post(
    State(pool): State<SqlitePool>,
    user: AuthUser,
    EntityId(post_id): EntityId,
    ApiJson(request): ApiJson<UpdatePostRequest>,
) -> BackendResult<Json<PostResponse>> {
    let owner = db::get_post_owner(&pool, post_id).await?.ok_or_else(post_not_found)?;
    user.ensure_owns(owner, "Not authorized to update this post")?;

    let post = db::update_post(&pool, post_id, user.id(), request.content(), request.image_url())
        .await?
        .ok_or_else(post_not_found)?;
    tracing::info!("User {} updated post {}", user.id(), post_id);
    Ok(Json(PostResponse {
        msg: "Post updated successfully".to_string(),
        post,
    }))
}

pub async fn delete_post(
    State(pool): State<SqlitePool>,
    user: AuthUser,
    EntityId(post_id): EntityId,
) -> BackendResult<Json<MessageResponse>> {
    let owner = db::get_post_owner(&pool, post_id).await?.ok_or_else(post_not_found)?;
    user.ensure_owns(owner, "Not authorized to delete this post")?;

    if !db::delete_post(&pool, post_id, user.id()).await? {
        return Err(BackendError::not_found("Post not found (or already deleted)"));
    }
    tracing::info!("User {} deleted post {}", user.id(), post_id);
    Ok(Json(MessageResponse::new("Post deleted successfully")))
}

pub async fn like_post(
    State(pool): State<SqlitePool>,
    user: AuthUser,
    EntityId(post_id): EntityId,
) -> BackendResult<Json<MessageResponse>> {
    db::like_post(&pool, post_id, user.id()).await?;
    Ok(Json(MessageResponse::new("Post liked successfully")))
}

pub async fn unlike_post(
    State(pool): State<SqlitePool>,
    user: AuthUser,
    EntityId(post_id): EntityId,
) -> BackendResult<Json<MessageResponse>> {
    if !db::unlike_post(&pool, post_id, user.id()).await? {
        return Err(BackendError::NotLiked);
    }
    Ok(Json(MessageResponse::new("Post unliked successfully")))
}
