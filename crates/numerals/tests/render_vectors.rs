use fe_kit_numerals::{to_chinese, to_chinese_f64, NumeralError, MAX_SUPPORTED};

#[test]
fn test_canonical_regression_vector() {
    // 12345 exercises every magnitude position once.
    assert_eq!(to_chinese(12345).unwrap(), "一万二千三百四十五");
}

#[test]
fn test_each_magnitude_alone() {
    assert_eq!(to_chinese(1).unwrap(), "一");
    assert_eq!(to_chinese(10).unwrap(), "十");
    assert_eq!(to_chinese(100).unwrap(), "一百");
    assert_eq!(to_chinese(1_000).unwrap(), "一千");
    assert_eq!(to_chinese(10_000).unwrap(), "一万");
    assert_eq!(to_chinese(100_000).unwrap(), "十万");
    assert_eq!(to_chinese(1_000_000).unwrap(), "一百万");
    assert_eq!(to_chinese(10_000_000).unwrap(), "一千万");
    assert_eq!(to_chinese(100_000_000).unwrap(), "一亿");
}

#[test]
fn test_placeholder_between_groups() {
    assert_eq!(to_chinese(505).unwrap(), "五百零五");
    assert_eq!(to_chinese(5005).unwrap(), "五千零五");
    assert_eq!(to_chinese(50005).unwrap(), "五万零五");
    assert_eq!(to_chinese(100_000_001).unwrap(), "一亿零一");
}

#[test]
fn test_rejects_values_just_past_the_bounds() {
    assert_eq!(to_chinese(-1), Err(NumeralError::OutOfRange));
    assert_eq!(to_chinese(MAX_SUPPORTED + 1), Err(NumeralError::OutOfRange));
    assert!(to_chinese(MAX_SUPPORTED).is_ok());
    assert!(to_chinese(0).is_ok());
}

#[test]
fn test_float_entry_rejects_fractions() {
    assert_eq!(to_chinese_f64(1.5), Err(NumeralError::OutOfRange));
    assert_eq!(to_chinese_f64(0.0).unwrap(), "零");
    assert_eq!(to_chinese_f64(999_999_999.0).unwrap(), to_chinese(999_999_999).unwrap());
}
