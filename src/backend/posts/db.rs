/**
 * Post Database Operations
 *
 * Queries for the `posts` and `likes` tables. Reads return `PostView`, the
 * post joined with its author and like count; writes return the bare
 * `PostRecord`.
 *
 * Updates and deletes are conditional on the author id so a concurrent
 * ownership change cannot slip between the ownership check in the handler
 * and the write itself.
 */

use chrono::Utc;
use sqlx::SqlitePool;

use crate::backend::error::{
    is_foreign_key_violation, is_unique_violation, BackendError, BackendResult,
};
use crate::shared::{PostRecord, PostView};

const POST_VIEW_SELECT: &str = r#"
    SELECT p.id, p.content, p.image_url, p.created_at,
           u.id AS user_id, u.username, u.profile_picture,
           (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.id) AS likes_count
    FROM posts p
    JOIN users u ON p.user_id = u.id
"#;

/// Create a post owned by `user_id`
pub async fn create_post(
    pool: &SqlitePool,
    user_id: i64,
    content: &str,
    image_url: Option<&str>,
) -> BackendResult<PostRecord> {
    let result = sqlx::query_as::<_, PostRecord>(
        r#"
        INSERT INTO posts (user_id, content, image_url, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, user_id, content, image_url, created_at
        "#,
    )
    .bind(user_id)
    .bind(content)
    .bind(image_url)
    .bind(Utc::now())
    .fetch_one(pool)
    .await;

    match result {
        Ok(post) => Ok(post),
        Err(e) if is_foreign_key_violation(&e) => Err(BackendError::not_found("User not found")),
        Err(e) => Err(e.into()),
    }
}

/// All posts, newest first, optionally restricted to one author
pub async fn list_posts(
    pool: &SqlitePool,
    author_id: Option<i64>,
) -> Result<Vec<PostView>, sqlx::Error> {
    let sql = format!(
        "{} WHERE (? IS NULL OR p.user_id = ?) ORDER BY p.created_at DESC, p.id DESC",
        POST_VIEW_SELECT
    );
    sqlx::query_as::<_, PostView>(&sql)
        .bind(author_id)
        .bind(author_id)
        .fetch_all(pool)
        .await
}

/// Get one post with author and like count
pub async fn get_post(pool: &SqlitePool, post_id: i64) -> Result<Option<PostView>, sqlx::Error> {
    let sql = format!("{} WHERE p.id = ?", POST_VIEW_SELECT);
    sqlx::query_as::<_, PostView>(&sql)
        .bind(post_id)
        .fetch_optional(pool)
        .await
}

/// Author of a post, if the post exists
pub async fn get_post_owner(pool: &SqlitePool, post_id: i64) -> Result<Option<i64>, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT user_id FROM posts WHERE id = ?")
        .bind(post_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|(user_id,)| user_id))
}

/// Replace the provided fields of a post owned by `user_id`
///
/// `None` keeps the stored value. Returns `None` when no post with that id
/// and owner exists.
pub async fn update_post(
    pool: &SqlitePool,
    post_id: i64,
    user_id: i64,
    content: Option<&str>,
    image_url: Option<&str>,
) -> Result<Option<PostRecord>, sqlx::Error> {
    sqlx::query_as::<_, PostRecord>(
        r#"
        UPDATE posts
        SET content = COALESCE(?, content),
            image_url = COALESCE(?, image_url)
        WHERE id = ? AND user_id = ?
        RETURNING id, user_id, content, image_url, created_at
        "#,
    )
    .bind(content)
    .bind(image_url)
    .bind(post_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Delete a post owned by `user_id`. Comments and likes cascade.
///
/// Returns whether a row was removed.
pub async fn delete_post(pool: &SqlitePool, post_id: i64, user_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = ? AND user_id = ?")
        .bind(post_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Record that `user_id` likes `post_id`
pub async fn like_post(pool: &SqlitePool, post_id: i64, user_id: i64) -> BackendResult<()> {
    let result = sqlx::query("INSERT INTO likes (post_id, user_id, created_at) VALUES (?, ?, ?)")
        .bind(post_id)
        .bind(user_id)
        .bind(Utc::now())
        .execute(pool)
        .await;

    match result {
        Ok(_) => Ok(()),
        Err(e) if is_unique_violation(&e) => Err(BackendError::DuplicateLike),
        Err(e) if is_foreign_key_violation(&e) => Err(BackendError::not_found("Post not found")),
        Err(e) => Err(e.into()),
    }
}

/// Remove a like. Returns whether one existed.
pub async fn unlike_post(pool: &SqlitePool, post_id: i64, user_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM likes WHERE post_id = ? AND user_id = ?")
        .bind(post_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count_likes(pool: &SqlitePool, post_id: i64) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM likes WHERE post_id = ?")
        .bind(post_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}
