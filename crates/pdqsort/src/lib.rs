//! In-place, unstable, pattern-defeating quicksort.
//!
//! Partitioning follows Bentley and McIlroy with a duplicate-aware three-way split. Highly
//! unbalanced partitions are counted against a quality budget; once it runs out the remaining
//! range is heap sorted, which bounds the worst case at O(n log n). Ranges of at most
//! [`TunedParams::insertion_threshold`] elements are finished with a gap pass followed by
//! insertion sort.

mod algorithms;

use std::cmp::Ordering;

pub use algorithms::common::{allowed_bad_partitions, initial_depth_budget, is_sorted};

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    /// Ranges of at most this many elements go to the small-range sort.
    pub insertion_threshold: usize,
    /// Ranges longer than this use the ninther instead of a single median of three.
    pub ninther_threshold: usize,
    /// Gap of the compare-exchange pass that precedes insertion sort.
    pub shell_gap: usize,
    /// A side shorter than `total_len / unbalanced_divisor` makes a partition highly unbalanced.
    pub unbalanced_divisor: usize,
    /// A greater band shorter than this means duplicates are certain.
    pub duplicate_border: usize,
    /// A greater band shorter than `len / duplicate_window_divisor` triggers duplicate probing.
    pub duplicate_window_divisor: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_threshold: 12,
    ninther_threshold: 40,
    shell_gap: 6,
    unbalanced_divisor: 8,
    duplicate_border: 5,
    duplicate_window_divisor: 4,
};

/// Operation counters collected while sorting. They never influence control flow.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortStats {
    pub swaps: u64,
    pub partitions: u64,
    pub bad_partitions: u64,
    pub pattern_breaks: u64,
    pub duplicate_passes: u64,
    pub heap_sort_fallbacks: u64,
    pub heap_sorted_elements: u64,
    pub small_sorts: u64,
    /// Deepest nesting of explicit recursive calls, the top-level call being 1.
    pub max_recursion_depth: usize,
    /// Partition steps taken after the depth budget had already reached zero.
    pub depth_budget_overruns: u64,
}

#[derive(Clone, Debug, Default)]
pub struct SortContext {
    pub stats: SortStats,
    unbalanced_limit: usize,
}

impl SortContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.stats = SortStats::default();
    }

    /// Fixes the imbalance threshold against the length of the whole input.
    #[inline]
    pub(crate) fn begin(&mut self, total_len: usize) {
        self.unbalanced_limit = total_len / TUNED_PARAMS.unbalanced_divisor;
    }

    #[inline]
    pub(crate) fn unbalanced_limit(&self) -> usize {
        self.unbalanced_limit
    }

    #[inline]
    pub(crate) fn swap<T>(&mut self, v: &mut [T], a: usize, b: usize) {
        self.stats.swaps += 1;
        v.swap(a, b);
    }
}

/// Sorts `v` ascending in place. Not stable.
pub fn sort<T: Ord>(v: &mut [T]) {
    let mut ctx = SortContext::default();
    sort_with_ctx(v, &mut ctx);
}

/// Sorts `v` in place by the total order `compare`. Not stable.
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut ctx = SortContext::default();
    sort_by_with_ctx(v, compare, &mut ctx);
}

/// Like [`sort`], accumulating operation counters into `ctx.stats`.
pub fn sort_with_ctx<T: Ord>(v: &mut [T], ctx: &mut SortContext) {
    sort_by_with_ctx(v, T::cmp, ctx);
}

/// Like [`sort_by`], accumulating operation counters into `ctx.stats`.
///
/// If `compare` is not a total order the call still terminates, leaving `v` as some
/// permutation of its input.
pub fn sort_by_with_ctx<T, F>(v: &mut [T], mut compare: F, ctx: &mut SortContext)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut is_less = |a: &T, b: &T| compare(a, b) == Ordering::Less;
    algorithms::pdqsort::sort(v, &mut is_less, ctx);
}

/// The worst-case fallback on its own: O(n log n), in place.
pub fn heap_sort<T: Ord>(v: &mut [T]) {
    let mut ctx = SortContext::default();
    algorithms::heap_sort::heap_sort(v, &mut |a: &T, b: &T| a < b, &mut ctx);
}

/// The small-range leaf on its own: quadratic, linear on nearly sorted input.
pub fn insertion_sort<T: Ord>(v: &mut [T]) {
    let mut ctx = SortContext::default();
    algorithms::insertion_sort::insertion_sort(v, &mut |a: &T, b: &T| a < b, &mut ctx);
}
