//! Window location and inspection.
//!
//! Resolves a target window from a raw handle or a title substring and
//! reads its geometry. Leaf dependency for every command.

pub mod errors;
pub mod handler;
pub mod types;

pub use errors::WindowError;
pub use handler::{
    find_window_by_id, find_window_by_title, list_windows, resize_window, window_at_point,
};
pub use types::{WindowInfo, aspect_ratio};
