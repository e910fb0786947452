//! Users Module
//!
//! Public profiles and the follow graph.

pub mod db;
pub mod handlers;

pub use handlers::{follow_user, get_user, list_followers, list_following, unfollow_user};
