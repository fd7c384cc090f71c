use rand::Rng;

/// Character set used by [`random_string`] when none is given.
pub const DEFAULT_CHARSET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a random string of `length` characters drawn from `charset`.
///
/// The charset defaults to ASCII letters and digits. An empty charset
/// yields an empty string regardless of the requested length.
///
/// # Examples
///
/// ```
/// use fe_kit_util::strings::random_string;
///
/// let s = random_string(16, None);
/// assert_eq!(s.len(), 16);
/// assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn random_string(length: usize, charset: Option<&str>) -> String {
    let charset: Vec<char> = charset.unwrap_or(DEFAULT_CHARSET).chars().collect();
    if charset.is_empty() {
        return String::new();
    }

    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| charset[rng.gen_range(0..charset.len())])
        .collect()
}
