/**
 * Comment Database Operations
 *
 * Comments hang off a post and are listed oldest first with their author's
 * public fields. Like posts, updates and deletes are conditional on the
 * author id.
 */

use chrono::Utc;
use sqlx::SqlitePool;

use crate::backend::error::{is_foreign_key_violation, BackendError, BackendResult};
use crate::shared::{CommentRecord, CommentView};

/// Add a comment by `user_id` to `post_id`
///
/// Fails with `NotFound` when the post does not exist.
pub async fn create_comment(
    pool: &SqlitePool,
    post_id: i64,
    user_id: i64,
    content: &str,
) -> BackendResult<CommentRecord> {
    let result = sqlx::query_as::<_, CommentRecord>(
        r#"
        INSERT INTO comments (post_id, user_id, content, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, post_id, user_id, content, created_at
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .bind(content)
    .bind(Utc::now())
    .fetch_one(pool)
    .await;

    match result {
        Ok(comment) => Ok(comment),
        Err(e) if is_foreign_key_violation(&e) => Err(BackendError::not_found("Post not found")),
        Err(e) => Err(e.into()),
    }
}

pub async fn list_comments(pool: &SqlitePool, post_id: i64) -> Result<Vec<CommentView>, sqlx::Error> {
    sqlx::query_as::<_, CommentView>(
        r#"
        SELECT c.id, c.content, c.created_at,
               u.id AS user_id, u.username, u.profile_picture
        FROM comments c
        JOIN users u ON c.user_id = u.id
        WHERE c.post_id = ?
        ORDER BY c.created_at ASC, c.id ASC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}

/// Author of a comment, if the comment exists
pub async fn get_comment_author(
    pool: &SqlitePool,
    comment_id: i64,
) -> Result<Option<i64>, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT user_id FROM comments WHERE id = ?")
        .bind(comment_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|(user_id,)| user_id))
}

pub async fn update_comment(
    pool: &SqlitePool,
    comment_id: i64,
    user_id: i64,
    content: &str,
) -> Result<Option<CommentRecord>, sqlx::Error> {
    sqlx::query_as::<_, CommentRecord>(
        r#"
        UPDATE comments SET content = ?
        WHERE id = ? AND user_id = ?
        RETURNING id, post_id, user_id, content, created_at
        "#,
    )
    .bind(content)
    .bind(comment_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Returns whether a row was removed
pub async fn delete_comment(
    pool: &SqlitePool,
    comment_id: i64,
    user_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM comments WHERE id = ? AND user_id = ?")
        .bind(comment_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::test_support::{memory_pool, seed_post, seed_user};

    #[tokio::test]
    async fn test_comments_are_oldest_first() {
        let pool = memory_pool().await;
        let alice = seed_user(&pool, "alice").await;
        let bob = seed_user(&pool, "bob").await;
        let post = seed_post(&pool, &alice, "post").await;

        let first = create_comment(&pool, post.id, bob.id, "first").await.unwrap();
        let second = create_comment(&pool, post.id, alice.id, "second").await.unwrap();

        let comments = list_comments(&pool, post.id).await.unwrap();
        let ids: Vec<i64> = comments.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
        assert_eq!(comments[0].username, "bob");
    }

    #[tokio::test]
    async fn test_comment_on_missing_post() {
        let pool = memory_pool().await;
        let alice = seed_user(&pool, "alice").await;

        let err = create_comment(&pool, 999, alice.id, "hello").await.unwrap_err();
        assert!(matches!(err, BackendError::NotFound(_)));
        assert!(list_comments(&pool, 999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete_are_author_scoped() {
        let pool = memory_pool().await;
        let alice = seed_user(&pool, "alice").await;
        let bob = seed_user(&pool, "bob").await;
        let post = seed_post(&pool, &alice, "post").await;
        let comment = create_comment(&pool, post.id, alice.id, "original").await.unwrap();

        assert!(update_comment(&pool, comment.id, bob.id, "hijack")
            .await
            .unwrap()
            .is_none());
        let updated = update_comment(&pool, comment.id, alice.id, "edited")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.content, "edited");
        assert_eq!(get_comment_author(&pool, comment.id).await.unwrap(), Some(alice.id));

        assert!(!delete_comment(&pool, comment.id, bob.id).await.unwrap());
        assert!(delete_comment(&pool, comment.id, alice.id).await.unwrap());
        assert!(!delete_comment(&pool, comment.id, alice.id).await.unwrap());
    }
}
