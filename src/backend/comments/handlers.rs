/**
 * Comment HTTP Handlers
 *
 * All four endpoints share the path `/api/comments/{id}`. For GET and POST
 * the id names the post; for PUT and DELETE it names the comment.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::SqlitePool;

use crate::backend::comments::db;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::extract::{ApiJson, EntityId};
use crate::backend::middleware::AuthUser;
use crate::shared::{CommentRequest, CommentResponse, CommentView, MessageResponse};

fn comment_not_found() -> BackendError {
    BackendError::not_found("Comment not found")
}

/// Comments of a post, oldest first. An unknown post has no comments.
pub async fn list_comments(
    State(pool): State<SqlitePool>,
    EntityId(post_id): EntityId,
) -> BackendResult<Json<Vec<CommentView>>> {
    Ok(Json(db::list_comments(&pool, post_id).await?))
}

pub async fn create_comment(
    State(pool): State<SqlitePool>,
    user: AuthUser,
    EntityId(post_id): EntityId,
    ApiJson(request): ApiJson<CommentRequest>,
) -> BackendResult<(StatusCode, Json<CommentResponse>)> {
    let content = request.validate()?;
    let comment = db::create_comment(&pool, post_id, user.id(), content).await?;
    tracing::info!("User {} commented on post {}", user.id(), post_id);
    Ok((
        StatusCode::CREATED,
        Json(CommentResponse {
            msg: "Comment added successfully".to_string(),
            comment,
        }),
    ))
}

pub async fn update_comment(
    State(pool): State<SqlitePool>,
    user: AuthUser,
    EntityId(comment_id): EntityId,
    ApiJson(request): ApiJson<CommentRequest>,
) -> BackendResult<Json<CommentResponse>> {
    let content = request.validate()?;
    let author = db::get_comment_author(&pool, comment_id)
        .await?
        .ok_or_else(comment_not_found)?;
    user.ensure_owns(author, "Not authorized to update this comment")?;

    let comment = db::update_comment(&pool, comment_id, user.id(), content)
        .await?
        .ok_or_else(comment_not_found)?;
    Ok(Json(CommentResponse {
        msg: "Comment updated successfully".to_string(),
        comment,
    }))
}

pub async fn delete_comment(
    State(pool): State<SqlitePool>,
    user: AuthUser,
    EntityId(comment_id): EntityId,
) -> BackendResult<Json<MessageResponse>> {
    let author = db::get_comment_author(&pool, comment_id)
        .await?
        .ok_or_else(comment_not_found)?;
    user.ensure_owns(author, "Not authorized to delete this comment")?;

    if !db::delete_comment(&pool, comment_id, user.id()).await? {
        return Err(BackendError::not_found("Comment not found (or already deleted)"));
    }
    tracing::info!("User {} deleted comment {}", user.id(), comment_id);
    Ok(Json(MessageResponse::new("Comment deleted successfully")))
}
