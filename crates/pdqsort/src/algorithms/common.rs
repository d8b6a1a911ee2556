#[inline]
pub fn floor_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        usize::BITS as usize - 1 - n.leading_zeros() as usize
    }
}

#[inline]
pub fn bit_length(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

/// Starting depth budget for an input of `n` elements: `2 * ceil(log2(n + 1))`.
///
/// The driver decrements it once per partition step but never falls back on it; only the
/// quality budget from [`allowed_bad_partitions`] can force the heap sort.
#[inline]
pub fn initial_depth_budget(n: usize) -> usize {
    2 * bit_length(n)
}

/// Highly unbalanced partitions tolerated on any path before the range is heap sorted.
#[inline]
pub fn allowed_bad_partitions(n: usize) -> usize {
    floor_log2(n)
}

#[inline]
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
