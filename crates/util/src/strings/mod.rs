//! String utilities.
//!
//! Provides functions for case conversion, truncation, HTML stripping, and
//! random string generation.

mod case;
mod html;
mod random;
mod truncate;

pub use case::{camel_case, capitalize, kebab_case, snake_case};
pub use html::strip_html;
pub use random::{random_string, DEFAULT_CHARSET};
pub use truncate::truncate;
