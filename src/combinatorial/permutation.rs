use log::trace;

/// Advances `data` to its next lexicographic permutation in place, returning `true` on
/// success. When `data` already holds the last permutation (i.e. it is sorted in descending
/// order), it is reset to the first permutation (ascending order) and `false` is returned.
///
/// This is the classical algorithm: locate the longest non-increasing suffix, swap the element
/// just before it with the smallest suffix element that exceeds it, then reverse the suffix.
/// Sequences containing duplicate elements produce each distinct permutation exactly once.
///
/// # Example
/// ```
/// use arrangements::combinatorial::next_permutation;
///
/// let mut data = vec![1, 2, 3];
/// assert!(next_permutation(&mut data));
/// assert_eq!(data, vec![1, 3, 2]);
///
/// let mut last = vec![3, 2, 1];
/// assert!(!next_permutation(&mut last));
/// assert_eq!(last, vec![1, 2, 3]);
/// ```
pub fn next_permutation<T: Ord>(data: &mut [T]) -> bool {
    let n = data.len();
    if n < 2 {
        return false;
    }

    // Longest non-increasing suffix is data[i..]; data[i - 1] is the pivot.
    let mut i = n - 1;
    while i > 0 && data[i - 1] >= data[i] {
        i -= 1;
    }
    if i == 0 {
        data.reverse();
        return false;
    }

    // Smallest suffix element strictly greater than the pivot.
    let mut j = n - 1;
    while data[j] <= data[i - 1] {
        j -= 1;
    }
    data.swap(i - 1, j);
    data[i..].reverse();
    true
}

/// Invokes `callback` on each `k`-element partial permutation of the sorted slice `data`, in
/// lexicographic order. Elements are permuted in place; once this function returns, the slice
/// is once more in ascending order.
///
/// The callback receives a read-only view over the current `k`-element prefix. That view
/// aliases storage which is permuted again as soon as the callback returns, so callbacks that
/// want to retain an arrangement should copy it (e.g. with `to_vec()`). The callback fires
/// exactly `n! / (n - k)!` times for `n` distinct elements; duplicated elements yield each
/// distinct arrangement once. With `k == 0` the callback fires exactly once, with an empty
/// view, regardless of the slice length.
///
/// For the lexicographic guarantee to hold, `data` must be sorted in ascending order on entry.
///
/// # Panics
///
/// Panics if `k > data.len()`.
///
/// # Example
/// ```
/// use arrangements::combinatorial::k_permute;
///
/// let mut data = vec![0, 1, 2];
/// let mut prefixes = Vec::new();
/// k_permute(&mut data, 2, |prefix| prefixes.push(prefix.to_vec()));
///
/// assert_eq!(
///     prefixes,
///     vec![
///         vec![0, 1],
///         vec![0, 2],
///         vec![1, 0],
///         vec![1, 2],
///         vec![2, 0],
///         vec![2, 1],
///     ]
/// );
/// assert_eq!(data, vec![0, 1, 2]);
/// ```
pub fn k_permute<T, F>(data: &mut [T], k: usize, mut callback: F)
where
    T: Ord,
    F: FnMut(&[T]),
{
    assert!(k <= data.len(), "k is out of bounds");
    trace!("enumerating k-permutations: n = {}, k = {}", data.len(), k);

    loop {
        callback(&data[..k]);
        data[k..].reverse();
        if !next_permutation(data) {
            break;
        }
    }
}

/// Fallible variant of [`k_permute`]: the callback returns a `Result`, and the first error is
/// propagated out immediately. On an error return the slice is left in an unspecified permuted
/// state; the sorted-order postcondition of [`k_permute`] holds only on `Ok` completion.
///
/// # Panics
///
/// Panics if `k > data.len()`.
pub fn try_k_permute<T, E, F>(data: &mut [T], k: usize, mut callback: F) -> Result<(), E>
where
    T: Ord,
    F: FnMut(&[T]) -> Result<(), E>,
{
    assert!(k <= data.len(), "k is out of bounds");

    loop {
        callback(&data[..k])?;
        data[k..].reverse();
        if !next_permutation(data) {
            return Ok(());
        }
    }
}

/// Invokes `callback` on every partial permutation of the sorted slice `data`, for all subset
/// sizes `k` from zero to `data.len()` inclusive, as per [`k_permute`]. Arrangements are
/// produced in increasing order of size, and in lexicographic order within each size; the total
/// number of callbacks for `n` distinct elements is the sum of `n! / (n - k)!` over all `k`.
///
/// Each size restores the slice to ascending order before the next begins, so running this
/// function twice in succession produces identical callback sequences.
///
/// # Example
/// ```
/// use arrangements::combinatorial::sub_permute;
///
/// let mut data = vec![0, 1];
/// let mut arrangements = Vec::new();
/// sub_permute(&mut data, |prefix| arrangements.push(prefix.to_vec()));
///
/// assert_eq!(
///     arrangements,
///     vec![vec![], vec![0], vec![1], vec![0, 1], vec![1, 0]]
/// );
/// ```
pub fn sub_permute<T, F>(data: &mut [T], mut callback: F)
where
    T: Ord,
    F: FnMut(&[T]),
{
    trace!("enumerating sub-permutations of {} elements", data.len());

    for k in 0..=data.len() {
        k_permute(data, k, &mut callback);
    }
}

/// Fallible variant of [`sub_permute`]: the callback returns a `Result`, and the first error is
/// propagated out immediately, leaving the slice in an unspecified permuted state.
pub fn try_sub_permute<T, E, F>(data: &mut [T], mut callback: F) -> Result<(), E>
where
    T: Ord,
    F: FnMut(&[T]) -> Result<(), E>,
{
    for k in 0..=data.len() {
        try_k_permute(data, k, &mut callback)?;
    }
    Ok(())
}
