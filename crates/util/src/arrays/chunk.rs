/// Split a slice into chunks of at most `size` elements.
///
/// The last chunk may be shorter. A `size` of zero yields no chunks.
///
/// # Examples
///
/// ```
/// use fe_kit_util::arrays::chunk;
///
/// assert_eq!(chunk(&[1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn chunk<T: Clone>(arr: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    arr.chunks(size).map(<[T]>::to_vec).collect()
}
