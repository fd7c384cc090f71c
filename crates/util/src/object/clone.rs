use serde_json::Value;

/// Deep-copy a JSON value.
///
/// The clone shares no structure with the original; mutating one never
/// affects the other.
///
/// # Examples
///
/// ```
/// use fe_kit_util::object::deep_clone;
/// use serde_json::json;
///
/// let original = json!({"a": {"b": [1, 2]}});
/// let copy = deep_clone(&original);
/// assert_eq!(copy, original);
/// ```
pub fn deep_clone(value: &Value) -> Value {
    value.clone()
}

/// Whether a value is a JSON object (not an array, not null).
///
/// # Examples
///
/// ```
/// use fe_kit_util::object::is_object;
/// use serde_json::json;
///
/// assert!(is_object(&json!({})));
/// assert!(!is_object(&json!([])));
/// assert!(!is_object(&json!(null)));
/// ```
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}
