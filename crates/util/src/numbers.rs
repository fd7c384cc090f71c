//! Number utilities.
//!
//! Formatting, rounding, parity, and random-integer helpers.

use rand::Rng;

/// Format an integer with a thousands separator.
///
/// The separator defaults to `","`. Negative values keep their sign in
/// front of the first group.
///
/// # Examples
///
/// ```
/// use fe_kit_util::numbers::format_thousands;
///
/// assert_eq!(format_thousands(1234567, None), "1,234,567");
/// assert_eq!(format_thousands(1234567, Some(" ")), "1 234 567");
/// assert_eq!(format_thousands(-1234, None), "-1,234");
/// ```
pub fn format_thousands(n: i64, separator: Option<&str>) -> String {
    let separator = separator.unwrap_or(",");
    let digits = n.unsigned_abs().to_string();

    let mut result = String::new();
    if n < 0 {
        result.push('-');
    }

    let first_group = match digits.len() % 3 {
        0 => 3,
        r => r,
    };
    result.push_str(&digits[..first_group]);
    let mut rest = &digits[first_group..];
    while !rest.is_empty() {
        result.push_str(separator);
        result.push_str(&rest[..3]);
        rest = &rest[3..];
    }

    result
}

/// Generate a random integer in `[min, max]` inclusive.
///
/// # Panics
///
/// Panics if `min > max`.
///
/// # Examples
///
/// ```
/// use fe_kit_util::numbers::random_int;
///
/// let n = random_int(1, 10);
/// assert!((1..=10).contains(&n));
/// ```
pub fn random_int(min: i64, max: i64) -> i64 {
    rand::thread_rng().gen_range(min..=max)
}

/// Round a float to the given number of decimal places.
///
/// Halfway cases round away from zero.
///
/// # Examples
///
/// ```
/// use fe_kit_util::numbers::to_fixed;
///
/// assert_eq!(to_fixed(3.14159, 2), 3.14);
/// assert_eq!(to_fixed(3.14159, 4), 3.1416);
/// assert_eq!(to_fixed(3.14159, 0), 3.0);
/// ```
pub fn to_fixed(num: f64, digits: u32) -> f64 {
    let factor = 10_f64.powi(digits as i32);
    (num * factor).round() / factor
}

/// Whether an integer is even.
pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// Whether an integer is odd.
pub fn is_odd(n: i64) -> bool {
    n % 2 != 0
}

/// Percentage of `value` relative to `total`, rounded to `digits` decimal
/// places (default 2).
///
/// A zero `total` yields infinity, mirroring plain float division.
///
/// # Examples
///
/// ```
/// use fe_kit_util::numbers::percentage;
///
/// assert_eq!(percentage(1.0, 3.0, None), 33.33);
/// assert_eq!(percentage(1.0, 3.0, Some(1)), 33.3);
/// ```
pub fn percentage(value: f64, total: f64, digits: Option<u32>) -> f64 {
    to_fixed(value / total * 100.0, digits.unwrap_or(2))
}
