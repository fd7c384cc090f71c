//! Object utilities over `serde_json::Value`.
//!
//! Deep clone, recursive merge, and dot-path access for dynamic JSON
//! documents.

mod clone;
mod merge;
mod path;

pub use clone::{deep_clone, is_object};
pub use merge::merge;
pub use path::{get_path, get_paths, set_path};
