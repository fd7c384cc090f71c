use std::collections::HashMap;
use std::hash::Hash;

/// Group elements by a key extracted from each element.
///
/// Within each group, elements keep their input order.
///
/// # Examples
///
/// ```
/// use fe_kit_util::arrays::group_by;
///
/// let groups = group_by(&[1, 2, 3, 4, 5], |n| n % 2);
/// assert_eq!(groups[&0], vec![2, 4]);
/// assert_eq!(groups[&1], vec![1, 3, 5]);
/// ```
pub fn group_by<T, K, F>(arr: &[T], key: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in arr {
        groups.entry(key(item)).or_default().push(item.clone());
    }
    groups
}
