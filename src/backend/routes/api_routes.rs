/**
 * API Route Tables
 *
 * Routes are split by whether they need a session. The protected table is
 * wrapped in the auth middleware by `router::create_router`; both tables
 * may register different methods on the same path.
 *
 * # Public
 * - `POST /api/auth/register`, `POST /api/auth/login`
 * - `GET /api/posts`, `GET /api/posts/{id}`
 * - `GET /api/comments/{post_id}`
 * - `GET /api/users/{id}`, `GET /api/users/{id}/followers`, `GET /api/users/{id}/following`
 *
 * # Protected
 * - `GET /api/auth/me`
 * - `POST /api/posts`, `PUT /api/posts/{id}`, `DELETE /api/posts/{id}`
 * - `POST /api/posts/like/{id}`, `DELETE /api/posts/unlike/{id}`
 * - `POST /api/comments/{post_id}`, `PUT /api/comments/{id}`, `DELETE /api/comments/{id}`
 * - `POST /api/users/follow/{id}`, `DELETE /api/users/unfollow/{id}`
 */

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::comments::{create_comment, delete_comment, list_comments, update_comment};
use crate::backend::posts::{
    create_post, delete_post, get_post, like_post, list_posts, unlike_post, update_post,
};
use crate::backend::server::state::AppState;
use crate::backend::users::{follow_user, get_user, list_followers, list_following, unfollow_user};

/// Routes reachable without a token
pub fn configure_public_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        // Posts
        .route("/api/posts", get(list_posts))
        .route("/api/posts/{id}", get(get_post))
        // Comments, keyed by post id
        .route("/api/comments/{id}", get(list_comments))
        // Users and follow graph
        .route("/api/users/{id}", get(get_user))
        .route("/api/users/{id}/followers", get(list_followers))
        .route("/api/users/{id}/following", get(list_following))
}

/// Routes that require a valid session token
pub fn configure_protected_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/me", get(get_me))
        .route("/api/posts", post(create_post))
        .route("/api/posts/{id}", put(update_post).delete(delete_post))
        .route("/api/posts/like/{id}", post(like_post))
        .route("/api/posts/unlike/{id}", delete(unlike_post))
        // POST takes a post id; PUT and DELETE take a comment id
        .route(
            "/api/comments/{id}",
            post(create_comment).put(update_comment).delete(delete_comment),
        )
        .route("/api/users/follow/{id}", post(follow_user))
        .route("/api/users/unfollow/{id}", delete(unfollow_user))
}
