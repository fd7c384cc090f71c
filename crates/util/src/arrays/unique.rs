/// Remove duplicate elements, keeping the first occurrence of each.
///
/// Order is preserved. Uses `PartialEq` rather than hashing so element
/// types only need equality.
///
/// # Examples
///
/// ```
/// use fe_kit_util::arrays::unique;
///
/// assert_eq!(unique(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// assert_eq!(unique(&["a", "b", "a"]), vec!["a", "b"]);
/// ```
pub fn unique<T: PartialEq + Clone>(arr: &[T]) -> Vec<T> {
    let mut result: Vec<T> = Vec::new();
    for item in arr {
        if !result.contains(item) {
            result.push(item.clone());
        }
    }
    result
}
