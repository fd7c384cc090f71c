use serde_json::Value;

/// Get a value from a JSON document by dot-separated path.
///
/// Path steps descend object keys; numeric steps also index into arrays.
/// Returns `None` when any step is missing, so callers pick their own
/// default with `unwrap_or`.
///
/// # Examples
///
/// ```
/// use fe_kit_util::object::get_path;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": [10, 20]}});
/// assert_eq!(get_path(&doc, "a.b.1"), Some(&json!(20)));
/// assert_eq!(get_path(&doc, "a.missing"), None);
/// ```
pub fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for step in path.split('.') {
        match current {
            Value::Object(map) => {
                current = map.get(step)?;
            }
            Value::Array(arr) => {
                let idx: usize = step.parse().ok()?;
                current = arr.get(idx)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Set a value in a JSON document by dot-separated path.
///
/// Missing or non-object intermediate steps are replaced with empty
/// objects, including a non-object root.
///
/// # Examples
///
/// ```
/// use fe_kit_util::object::set_path;
/// use serde_json::json;
///
/// let mut doc = json!({});
/// set_path(&mut doc, "a.b.c", json!(1));
/// assert_eq!(doc, json!({"a": {"b": {"c": 1}}}));
/// ```
pub fn set_path(value: &mut Value, path: &str, new_value: Value) {
    let steps: Vec<&str> = path.split('.').collect();
    let Some((last, init)) = steps.split_last() else {
        return;
    };

    let mut current = value;
    for step in init {
        if !current.is_object() {
            *current = Value::Object(Default::default());
        }
        let Some(map) = current.as_object_mut() else {
            return;
        };
        current = map
            .entry((*step).to_string())
            .or_insert_with(|| Value::Object(Default::default()));
    }

    if !current.is_object() {
        *current = Value::Object(Default::default());
    }
    if let Some(map) = current.as_object_mut() {
        map.insert((*last).to_string(), new_value);
    }
}

/// Collect every dot path in a JSON document, pre-order.
///
/// Each object key contributes its own path; nested objects are descended
/// into. Arrays and scalars are leaves.
///
/// # Examples
///
/// ```
/// use fe_kit_util::object::get_paths;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": 1}, "c": 2});
/// assert_eq!(get_paths(&doc), vec!["a", "a.b", "c"]);
/// ```
pub fn get_paths(value: &Value) -> Vec<String> {
    let mut paths = Vec::new();
    collect_paths(value, "", &mut paths);
    paths
}

fn collect_paths(value: &Value, prefix: &str, paths: &mut Vec<String>) {
    let Value::Object(map) = value else {
        return;
    };
    for (key, child) in map {
        let current = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        paths.push(current.clone());
        collect_paths(child, &current, paths);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_path_nested() {
        let doc = json!({"a": {"b": {"c": 42}}});
        assert_eq!(get_path(&doc, "a.b.c"), Some(&json!(42)));
        assert_eq!(get_path(&doc, "a.b"), Some(&json!({"c": 42})));
    }

    #[test]
    fn test_get_path_missing() {
        let doc = json!({"a": 1});
        assert_eq!(get_path(&doc, "b"), None);
        assert_eq!(get_path(&doc, "a.b"), None);
    }

    #[test]
    fn test_get_path_array_index() {
        let doc = json!({"items": [{"id": 1}, {"id": 2}]});
        assert_eq!(get_path(&doc, "items.1.id"), Some(&json!(2)));
        assert_eq!(get_path(&doc, "items.5"), None);
        assert_eq!(get_path(&doc, "items.x"), None);
    }

    #[test]
    fn test_get_path_with_default() {
        let doc = json!({"a": 1});
        let value = get_path(&doc, "missing").cloned().unwrap_or(json!("default"));
        assert_eq!(value, json!("default"));
    }

    #[test]
    fn test_set_path_creates_intermediates() {
        let mut doc = json!({});
        set_path(&mut doc, "a.b.c", json!(1));
        assert_eq!(doc, json!({"a": {"b": {"c": 1}}}));
    }

    #[test]
    fn test_set_path_overwrites_leaf() {
        let mut doc = json!({"a": {"b": 1}});
        set_path(&mut doc, "a.b", json!(2));
        assert_eq!(doc, json!({"a": {"b": 2}}));
    }

    #[test]
    fn test_set_path_replaces_scalar_intermediate() {
        let mut doc = json!({"a": 5});
        set_path(&mut doc, "a.b", json!(1));
        assert_eq!(doc, json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_set_path_single_step() {
        let mut doc = json!({});
        set_path(&mut doc, "key", json!("value"));
        assert_eq!(doc, json!({"key": "value"}));
    }

    #[test]
    fn test_get_paths() {
        let doc = json!({"a": {"b": 1, "c": {"d": 2}}, "e": 3});
        assert_eq!(get_paths(&doc), vec!["a", "a.b", "a.c", "a.c.d", "e"]);
    }

    #[test]
    fn test_get_paths_non_object() {
        assert_eq!(get_paths(&json!(42)), Vec::<String>::new());
        assert_eq!(get_paths(&json!([1, 2])), Vec::<String>::new());
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let mut doc = json!({});
        set_path(&mut doc, "x.y.z", json!([1, 2, 3]));
        assert_eq!(get_path(&doc, "x.y.z"), Some(&json!([1, 2, 3])));
    }
}
