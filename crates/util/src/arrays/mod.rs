//! Array utilities.
//!
//! Order-preserving slice helpers: deduplication, chunking, set
//! operations, grouping, shuffling, and nested-array flattening.

mod chunk;
mod flatten;
mod group_by;
mod set_ops;
mod shuffle;
mod unique;

pub use chunk::chunk;
pub use flatten::flatten;
pub use group_by::group_by;
pub use set_ops::{difference, intersection};
pub use shuffle::shuffle;
pub use unique::unique;
