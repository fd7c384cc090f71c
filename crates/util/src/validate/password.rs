/// Special characters a strong password may (and must) contain.
const SPECIALS: &str = "@$!%*?&";

/// Validate password strength.
///
/// Requires at least 8 characters with at least one lowercase letter, one
/// uppercase letter, one digit, and one special character from
/// `@$!%*?&`. Characters outside ASCII letters, digits, and that special
/// set disqualify the password.
///
/// # Examples
///
/// ```
/// use fe_kit_util::validate::is_strong_password;
///
/// assert!(is_strong_password("Abcdef1!"));
/// assert!(!is_strong_password("abcdefg1"));
/// ```
pub fn is_strong_password(password: &str) -> bool {
    if password.chars().count() < 8 {
        return false;
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || SPECIALS.contains(c);

    password.chars().all(allowed)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| SPECIALS.contains(c))
}
