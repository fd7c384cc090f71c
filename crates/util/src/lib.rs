//! fe-kit-util - Utility functions for fe-kit
//!
//! Small, independent helper functions for strings, arrays, numbers,
//! JSON objects, and input validation. Each helper is a pure or near-pure
//! transformation of its inputs with no shared state.

pub mod arrays;
pub mod numbers;
pub mod object;
pub mod strings;
pub mod validate;

// Re-exports for convenience
pub use arrays::{chunk, difference, flatten, group_by, intersection, shuffle, unique};
pub use numbers::{format_thousands, is_even, is_odd, percentage, random_int, to_fixed};
pub use object::{deep_clone, get_path, get_paths, is_object, merge, set_path};
pub use strings::{camel_case, capitalize, kebab_case, random_string, snake_case, strip_html, truncate};
pub use validate::{
    is_bank_card, is_chinese, is_email, is_id_card, is_ip, is_numeric, is_phone,
    is_strong_password, is_url,
};
