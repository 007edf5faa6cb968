//! Content module - locates, loads and writes back posts

pub mod loader;
mod post;

pub use loader::{pick_last, select_latest, ContentLoader};
pub use post::Post;
