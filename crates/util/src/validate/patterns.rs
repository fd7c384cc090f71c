use std::sync::OnceLock;

fn email_regex() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

fn phone_regex() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r"^1[3-9]\d{9}$").unwrap())
}

fn id_card_regex() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r"^(\d{15}|\d{18}|\d{17}[\dXx])$").unwrap())
}

fn bank_card_regex() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r"^[1-9]\d{12,18}$").unwrap())
}

fn numeric_regex() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r"^\d+$").unwrap())
}

fn chinese_regex() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r"^[\x{4e00}-\x{9fa5}]+$").unwrap())
}

fn url_regex() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r"^[a-zA-Z][a-zA-Z\d+.-]*://\S+$").unwrap())
}

/// Validate an email address.
///
/// Accepts `local@domain.tld` with no whitespace or extra `@`; this is
/// the permissive form-input check, not a full RFC 5322 parser.
///
/// # Examples
///
/// ```
/// use fe_kit_util::validate::is_email;
///
/// assert!(is_email("user@example.com"));
/// assert!(!is_email("not-an-email"));
/// ```
pub fn is_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Validate a mainland-China mobile phone number (11 digits, `1[3-9]...`).
pub fn is_phone(phone: &str) -> bool {
    phone_regex().is_match(phone)
}

/// Validate a mainland-China ID card number (15 digits, 18 digits, or 17
/// digits plus a check character `X`/`x`).
pub fn is_id_card(id_card: &str) -> bool {
    id_card_regex().is_match(id_card)
}

/// Validate a bank card number: 13-19 digits with no leading zero.
pub fn is_bank_card(card_number: &str) -> bool {
    bank_card_regex().is_match(card_number)
}

/// Whether a string consists solely of ASCII digits (non-empty).
pub fn is_numeric(s: &str) -> bool {
    numeric_regex().is_match(s)
}

/// Whether a string consists solely of CJK characters in the common
/// U+4E00..=U+9FA5 block (non-empty).
pub fn is_chinese(s: &str) -> bool {
    chinese_regex().is_match(s)
}

/// Validate a hierarchical URL of the form `scheme://rest`.
///
/// Only `://` URLs are recognized; opaque forms like `mailto:` are
/// rejected.
///
/// # Examples
///
/// ```
/// use fe_kit_util::validate::is_url;
///
/// assert!(is_url("https://example.com/path?q=1"));
/// assert!(!is_url("example.com"));
/// ```
pub fn is_url(url: &str) -> bool {
    url_regex().is_match(url)
}
