use serde_json::Value;

/// Recursively flatten nested JSON arrays into a single flat list.
///
/// Non-array elements are kept as-is; arrays are descended into at any
/// depth. Rust slices cannot nest dynamically, so this operates on
/// `serde_json::Value`, which can.
///
/// # Examples
///
/// ```
/// use fe_kit_util::arrays::flatten;
/// use serde_json::json;
///
/// let nested = vec![json!(1), json!([2, [3, 4]]), json!(5)];
/// let flat: Vec<_> = flatten(&nested);
/// assert_eq!(flat, vec![json!(1), json!(2), json!(3), json!(4), json!(5)]);
/// ```
pub fn flatten(arr: &[Value]) -> Vec<Value> {
    let mut result = Vec::new();
    for item in arr {
        match item {
            Value::Array(inner) => result.extend(flatten(inner)),
            other => result.push(other.clone()),
        }
    }
    result
}
