//! Posts Module
//!
//! Post CRUD and likes.
//!
//! - **`db`** - Queries on `posts` and `likes`
//! - **`handlers`** - HTTP handlers under `/api/posts`
//!
//! A post belongs to its author: only the author may update or delete it.
//! Deleting a post removes its comments and likes. A user likes a post at
//! most once.

pub mod db;
pub mod handlers;

pub use handlers::{create_post, delete_post, get_post, like_post, list_posts, unlike_post, update_post};
