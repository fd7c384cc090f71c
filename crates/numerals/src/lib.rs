//! fe-kit-numerals - Chinese numeral rendering
//!
//! Converts non-negative integers in `[0, 999_999_999]` into their written
//! Chinese form, with magnitude-unit words (十, 百, 千, 万, ...) and the
//! placeholder 零 inserted for internal zero digits.

mod chinese;

pub use chinese::{to_chinese, to_chinese_f64, NumeralError, DIGITS, MAX_SUPPORTED, UNITS};
