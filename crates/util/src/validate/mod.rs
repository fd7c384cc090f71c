//! Input format validators.
//!
//! Regex-backed checks for common string formats. The password and IP
//! validators use character-class loops where a single pattern cannot
//! express the rule.

mod ip;
mod password;
mod patterns;

pub use ip::is_ip;
pub use password::is_strong_password;
pub use patterns::{is_bank_card, is_chinese, is_email, is_id_card, is_numeric, is_phone, is_url};
