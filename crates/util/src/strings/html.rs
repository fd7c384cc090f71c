use std::sync::OnceLock;

fn tag_regex() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r"<[^>]*>").unwrap())
}

/// Remove HTML tags from a string.
///
/// Strips anything between `<` and the next `>`, including attributes.
/// Text content between tags is preserved.
///
/// # Examples
///
/// ```
/// use fe_kit_util::strings::strip_html;
///
/// assert_eq!(strip_html("<p>hello</p>"), "hello");
/// assert_eq!(strip_html("<a href=\"#\">link</a>"), "link");
/// assert_eq!(strip_html("plain text"), "plain text");
/// ```
pub fn strip_html(s: &str) -> String {
    tag_regex().replace_all(s, "").into_owned()
}
