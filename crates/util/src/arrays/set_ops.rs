/// Elements of `a` that also appear in `b`, in the order they appear in `a`.
///
/// Duplicates in `a` are kept if they appear in `b`.
///
/// # Examples
///
/// ```
/// use fe_kit_util::arrays::intersection;
///
/// assert_eq!(intersection(&[1, 2, 3], &[2, 3, 4]), vec![2, 3]);
/// ```
pub fn intersection<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|&item| b.contains(item)).cloned().collect()
}

/// Elements of `a` that do not appear in `b`, in the order they appear in `a`.
///
/// # Examples
///
/// ```
/// use fe_kit_util::arrays::difference;
///
/// assert_eq!(difference(&[1, 2, 3], &[2, 3, 4]), vec![1]);
/// ```
pub fn difference<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|&item| !b.contains(item)).cloned().collect()
}
