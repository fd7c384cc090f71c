use serde_json::Value;

/// Recursively merge `source` into `target`.
///
/// Object values merge key-by-key; anything else in `source` overwrites
/// the corresponding entry in `target`. When `source` holds an object
/// where `target` holds a non-object, the target entry is replaced by an
/// empty object before descending. Non-object roots are left untouched.
///
/// # Examples
///
/// ```
/// use fe_kit_util::object::merge;
/// use serde_json::json;
///
/// let mut target = json!({"a": 1, "b": {"c": 2}});
/// merge(&mut target, &json!({"b": {"d": 3}, "e": 4}));
/// assert_eq!(target, json!({"a": 1, "b": {"c": 2, "d": 3}, "e": 4}));
/// ```
pub fn merge(target: &mut Value, source: &Value) {
    let (Value::Object(target_map), Value::Object(source_map)) = (target, source) else {
        return;
    };

    for (key, source_value) in source_map {
        if source_value.is_object() {
            let entry = target_map
                .entry(key.clone())
                .or_insert_with(|| Value::Object(Default::default()));
            if !entry.is_object() {
                *entry = Value::Object(Default::default());
            }
            merge(entry, source_value);
        } else {
            target_map.insert(key.clone(), source_value.clone());
        }
    }
}
