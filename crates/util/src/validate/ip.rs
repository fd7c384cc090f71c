/// Validate a dotted-quad IPv4 address.
///
/// Four octets separated by `.`, each 0-255, digits only. Leading zeros
/// are rejected (except the lone octet `0`), so ambiguous octal-looking
/// forms like `01.2.3.4` do not pass.
///
/// # Examples
///
/// ```
/// use fe_kit_util::validate::is_ip;
///
/// assert!(is_ip("192.168.1.1"));
/// assert!(!is_ip("256.1.1.1"));
/// assert!(!is_ip("192.168.01.1"));
/// ```
pub fn is_ip(ip: &str) -> bool {
    let parts: Vec<&str> = ip.split('.').collect();
    if parts.len() != 4 {
        return false;
    }

    parts.iter().all(|part| {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        if part.len() > 1 && part.starts_with('0') {
            return false;
        }
        matches!(part.parse::<u32>(), Ok(n) if n <= 255)
    })
}
