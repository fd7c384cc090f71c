use thiserror::Error;

/// Magnitude-unit words, indexed by the positional exponent of a digit
/// (0 = ones place, which carries no unit word).
pub const UNITS: [&str; 9] = ["", "十", "百", "千", "万", "十万", "百万", "千万", "亿"];

/// Written-word glyphs for the digits 0-9.
pub const DIGITS: [&str; 10] = ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// Largest value `to_chinese` accepts, inclusive.
pub const MAX_SUPPORTED: i64 = 999_999_999;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumeralError {
    #[error("number out of supported range (0-999999999) or not an integer")]
    OutOfRange,
}

/// Render an integer as its written Chinese numeral.
///
/// Walks the decimal digits most-significant first. Each non-zero digit
/// emits its glyph followed by the unit word for its position; runs of
/// internal zero digits collapse into a single 零, and trailing zeros emit
/// nothing. A literal leading 一十 is rewritten to 十, so 10-19 read
/// idiomatically (十, 十一, ...).
///
/// # Errors
///
/// Returns [`NumeralError::OutOfRange`] when `n` is negative or exceeds
/// [`MAX_SUPPORTED`]. No clamping or coercion is performed.
///
/// # Examples
///
/// ```
/// use fe_kit_numerals::to_chinese;
///
/// assert_eq!(to_chinese(0).unwrap(), "零");
/// assert_eq!(to_chinese(123).unwrap(), "一百二十三");
/// assert_eq!(to_chinese(505).unwrap(), "五百零五");
/// assert_eq!(to_chinese(10).unwrap(), "十");
/// ```
pub fn to_chinese(n: i64) -> Result<String, NumeralError> {
    if !(0..=MAX_SUPPORTED).contains(&n) {
        return Err(NumeralError::OutOfRange);
    }
    if n == 0 {
        return Ok(DIGITS[0].to_string());
    }

    let decimal = n.to_string();
    let len = decimal.len();
    let mut result = String::new();
    let mut pending_zero = false;

    for (i, byte) in decimal.bytes().enumerate() {
        let digit = (byte - b'0') as usize;
        let unit = len - i - 1;

        if digit != 0 {
            // At most one 零 between emitted glyphs, and never at the start.
            if pending_zero && !result.is_empty() {
                result.push_str(DIGITS[0]);
            }
            result.push_str(DIGITS[digit]);
            if unit > 0 {
                result.push_str(UNITS[unit]);
            }
            pending_zero = false;
        } else {
            pending_zero = true;
        }
    }

    // 一十 -> 十, applied to a literal prefix of the whole output only.
    Ok(match result.strip_prefix("一十") {
        Some(rest) => format!("十{rest}"),
        None => result,
    })
}

/// Render a float as its written Chinese numeral.
///
/// Accepts only finite values with no fractional part; everything else
/// fails with the same error as an out-of-range integer.
///
/// # Examples
///
/// ```
/// use fe_kit_numerals::{to_chinese_f64, NumeralError};
///
/// assert_eq!(to_chinese_f64(42.0).unwrap(), "四十二");
/// assert_eq!(to_chinese_f64(1.5), Err(NumeralError::OutOfRange));
/// ```
pub fn to_chinese_f64(x: f64) -> Result<String, NumeralError> {
    if !x.is_finite() || x.fract() != 0.0 {
        return Err(NumeralError::OutOfRange);
    }
    to_chinese(x as i64)
}
