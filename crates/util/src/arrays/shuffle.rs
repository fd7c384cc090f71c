use rand::seq::SliceRandom;

/// Return a shuffled copy of a slice.
///
/// The input is left untouched; a Fisher-Yates shuffle runs over the copy.
///
/// # Examples
///
/// ```
/// use fe_kit_util::arrays::shuffle;
///
/// let arr = vec![1, 2, 3, 4, 5];
/// let mut shuffled = shuffle(&arr);
/// shuffled.sort();
/// assert_eq!(shuffled, arr);
/// ```
pub fn shuffle<T: Clone>(arr: &[T]) -> Vec<T> {
    let mut result = arr.to_vec();
    result.shuffle(&mut rand::thread_rng());
    result
}
