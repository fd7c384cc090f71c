use fe_kit_numerals::{to_chinese, DIGITS, MAX_SUPPORTED, UNITS};
use proptest::prelude::*;

fn vocabulary() -> Vec<char> {
    let mut chars: Vec<char> = DIGITS.iter().flat_map(|s| s.chars()).collect();
    chars.extend(UNITS.iter().flat_map(|s| s.chars()));
    chars
}

proptest! {
    #[test]
    fn renders_every_in_range_value(n in 0_i64..=MAX_SUPPORTED) {
        let rendered = to_chinese(n).unwrap();
        prop_assert!(!rendered.is_empty());
        let vocab = vocabulary();
        for ch in rendered.chars() {
            prop_assert!(vocab.contains(&ch), "unexpected glyph {ch:?} in {rendered}");
        }
    }

    #[test]
    fn rendering_is_deterministic(n in 0_i64..=MAX_SUPPORTED) {
        prop_assert_eq!(to_chinese(n).unwrap(), to_chinese(n).unwrap());
    }

    #[test]
    fn never_starts_with_one_ten(n in 0_i64..=MAX_SUPPORTED) {
        prop_assert!(!to_chinese(n).unwrap().starts_with("一十"));
    }

    #[test]
    fn no_doubled_placeholder(n in 0_i64..=MAX_SUPPORTED) {
        prop_assert!(!to_chinese(n).unwrap().contains("零零"));
    }

    #[test]
    fn rejects_everything_out_of_range(n in prop_oneof![i64::MIN..0, (MAX_SUPPORTED + 1)..i64::MAX]) {
        prop_assert!(to_chinese(n).is_err());
    }
}
