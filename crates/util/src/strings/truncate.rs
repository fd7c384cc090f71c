/// Truncate a string to `length` characters, appending a suffix when cut.
///
/// The suffix defaults to `"..."` and is only appended when the input is
/// actually longer than `length`. Lengths are counted in characters, not
/// bytes, so multi-byte input never splits mid-character.
///
/// # Examples
///
/// ```
/// use fe_kit_util::strings::truncate;
///
/// assert_eq!(truncate("hello world", 5, None), "hello...");
/// assert_eq!(truncate("hello", 10, None), "hello");
/// assert_eq!(truncate("hello world", 5, Some("…")), "hello…");
/// ```
pub fn truncate(s: &str, length: usize, suffix: Option<&str>) -> String {
    let suffix = suffix.unwrap_or("...");
    let mut result = String::new();
    let mut count = 0;

    for ch in s.chars() {
        if count == length {
            result.push_str(suffix);
            return result;
        }
        result.push(ch);
        count += 1;
    }

    result
}
