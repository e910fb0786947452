//! Comments Module
//!
//! Comments on posts. Anyone may read them; only signed-in users may add
//! one, and only its author may edit or delete it.

pub mod db;
pub mod handlers;

pub use handlers::{create_comment, delete_comment, list_comments, update_comment};
