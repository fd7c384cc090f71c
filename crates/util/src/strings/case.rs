/// Uppercase the first character and lowercase the rest.
///
/// # Examples
///
/// ```
/// use fe_kit_util::strings::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize("WORLD"), "World");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Convert a `-`, `_`, or whitespace separated string to camelCase.
///
/// Separators are dropped and the character following each separator is
/// uppercased. Characters outside separator positions keep their case.
///
/// # Examples
///
/// ```
/// use fe_kit_util::strings::camel_case;
///
/// assert_eq!(camel_case("hello-world"), "helloWorld");
/// assert_eq!(camel_case("foo_bar baz"), "fooBarBaz");
/// ```
pub fn camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut upper_next = false;

    for ch in s.chars() {
        if ch == '-' || ch == '_' || ch.is_whitespace() {
            upper_next = true;
        } else if upper_next {
            result.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            result.push(ch);
        }
    }

    result
}

/// Convert camelCase or PascalCase to kebab-case.
///
/// Each ASCII uppercase letter becomes `-` plus its lowercase form; a
/// leading `-` produced by a PascalCase input is removed.
///
/// # Examples
///
/// ```
/// use fe_kit_util::strings::kebab_case;
///
/// assert_eq!(kebab_case("helloWorld"), "hello-world");
/// assert_eq!(kebab_case("FooBar"), "foo-bar");
/// ```
pub fn kebab_case(s: &str) -> String {
    separate_uppercase(s, '-')
}

/// Convert camelCase or PascalCase to snake_case.
///
/// # Examples
///
/// ```
/// use fe_kit_util::strings::snake_case;
///
/// assert_eq!(snake_case("helloWorld"), "hello_world");
/// assert_eq!(snake_case("FooBar"), "foo_bar");
/// ```
pub fn snake_case(s: &str) -> String {
    separate_uppercase(s, '_')
}

fn separate_uppercase(s: &str, separator: char) -> String {
    let mut result = String::with_capacity(s.len());

    for ch in s.chars() {
        if ch.is_ascii_uppercase() {
            result.push(separator);
            result.push(ch.to_ascii_lowercase());
        } else {
            result.push(ch);
        }
    }

    if result.starts_with(separator) {
        result.remove(0);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("hello world"), "Hello world");
        assert_eq!(capitalize("HELLO"), "Hello");
        assert_eq!(capitalize("h"), "H");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("hello-world"), "helloWorld");
        assert_eq!(camel_case("hello_world"), "helloWorld");
        assert_eq!(camel_case("hello world"), "helloWorld");
        assert_eq!(camel_case("foo-bar_baz qux"), "fooBarBazQux");
        assert_eq!(camel_case("already"), "already");
        assert_eq!(camel_case(""), "");
    }

    #[test]
    fn test_camel_case_leading_separator() {
        assert_eq!(camel_case("-foo"), "Foo");
        assert_eq!(camel_case("_foo_bar"), "FooBar");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("helloWorld"), "hello-world");
        assert_eq!(kebab_case("FooBar"), "foo-bar");
        assert_eq!(kebab_case("plain"), "plain");
        assert_eq!(kebab_case(""), "");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("helloWorld"), "hello_world");
        assert_eq!(snake_case("FooBar"), "foo_bar");
        assert_eq!(snake_case("plain"), "plain");
    }
}
