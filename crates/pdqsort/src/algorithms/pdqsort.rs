use crate::{SortContext, TUNED_PARAMS};

use super::common::{allowed_bad_partitions, initial_depth_budget};
use super::heap_sort::heap_sort;
use super::insertion_sort::small_sort;
use super::partition::partition;

pub(crate) fn sort<T, F>(v: &mut [T], is_less: &mut F, ctx: &mut SortContext)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    ctx.begin(len);
    pdqsort(
        v,
        is_less,
        initial_depth_budget(len),
        allowed_bad_partitions(len),
        1,
        ctx,
    );
}

fn pdqsort<T, F>(
    mut v: &mut [T],
    is_less: &mut F,
    mut max_depth: usize,
    mut bad_allowed: usize,
    depth: usize,
    ctx: &mut SortContext,
) where
    F: FnMut(&T, &T) -> bool,
{
    ctx.stats.max_recursion_depth = ctx.stats.max_recursion_depth.max(depth);

    while v.len() > TUNED_PARAMS.insertion_threshold {
        if bad_allowed == 0 {
            fallback(v, is_less, ctx);
            return;
        }

        // Tracked only: exhausting the depth budget does not switch to heap sort.
        if max_depth == 0 {
            ctx.stats.depth_budget_overruns += 1;
        }
        max_depth = max_depth.saturating_sub(1);

        let len = v.len();
        let (mid, greater) = partition(v, is_less, ctx);

        // Measured against the whole input, not the current range.
        let left_len = mid;
        let right_len = len - (mid + 1);
        let limit = ctx.unbalanced_limit();
        let highly_unbalanced = left_len < limit || right_len < limit;

        if highly_unbalanced {
            ctx.stats.bad_partitions += 1;
            bad_allowed -= 1;
            if bad_allowed == 0 {
                fallback(v, is_less, ctx);
                return;
            }

            break_patterns(&mut v[..mid], ctx);
            break_patterns(&mut v[greater..], ctx);
        }

        let (left, rest) = v.split_at_mut(mid);
        let (_, right) = rest.split_at_mut(greater - mid);

        // Recursing only into the shorter side keeps the stack depth at most lg(len).
        if left.len() < right.len() {
            pdqsort(left, is_less, max_depth, bad_allowed, depth + 1, ctx);
            v = right;
        } else {
            pdqsort(right, is_less, max_depth, bad_allowed, depth + 1, ctx);
            v = left;
        }
    }

    small_sort(v, is_less, ctx);
}

fn fallback<T, F>(v: &mut [T], is_less: &mut F, ctx: &mut SortContext)
where
    F: FnMut(&T, &T) -> bool,
{
    ctx.stats.heap_sort_fallbacks += 1;
    ctx.stats.heap_sorted_elements += v.len() as u64;
    heap_sort(v, is_less, ctx);
}

/// Swaps a few fixed positions near the ends with positions near the middle.
fn break_patterns<T>(v: &mut [T], ctx: &mut SortContext) {
    let len = v.len();
    if len < 4 {
        return;
    }
    ctx.stats.pattern_breaks += 1;

    let half = len / 2;
    ctx.swap(v, 0, half);
    ctx.swap(v, len - 1, len - half);

    if len >= 8 {
        ctx.swap(v, 1, half + 1);
        ctx.swap(v, 2, half + 2);

        ctx.swap(v, len - 2, len - half - 1);
        ctx.swap(v, len - 3, len - half - 2);
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    use super::*;

    fn lt(a: &u32, b: &u32) -> bool {
        a < b
    }

    fn run(data: &mut [u32]) -> SortContext {
        let mut ctx = SortContext::default();
        sort(data, &mut lt, &mut ctx);
        ctx
    }

    #[test]
    fn break_patterns_fixed_swaps() {
        let mut ctx = SortContext::default();

        let mut short: Vec<u32> = (0..4).collect();
        break_patterns(&mut short, &mut ctx);
        assert_eq!(short, vec![2, 1, 3, 0]);

        let mut long: Vec<u32> = (0..10).collect();
        break_patterns(&mut long, &mut ctx);
        assert_eq!(long, vec![5, 6, 7, 2, 8, 9, 1, 3, 4, 0]);

        let mut tiny: Vec<u32> = (0..3).collect();
        break_patterns(&mut tiny, &mut ctx);
        assert_eq!(tiny, vec![0, 1, 2]);
        assert_eq!(ctx.stats.pattern_breaks, 2);
        assert_eq!(ctx.stats.swaps, 2 + 6);
    }

    #[test]
    fn short_ranges_skip_partitioning() {
        let mut data: Vec<u32> = (0..12).rev().collect();
        let ctx = run(&mut data);
        assert!(data.iter().copied().eq(0..12));
        assert_eq!(ctx.stats.partitions, 0);
        assert_eq!(ctx.stats.small_sorts, 1);
        assert_eq!(ctx.stats.max_recursion_depth, 1);
    }

    #[test]
    fn all_equal_input_spends_the_quality_budget() {
        // Every step leaves a single element on the right, so each partition is highly
        // unbalanced and the heap sort takes over once the budget is gone.
        let mut data = vec![3_u32; 1024];
        let ctx = run(&mut data);

        assert_eq!(data, vec![3; 1024]);
        assert_eq!(ctx.stats.bad_partitions, allowed_bad_partitions(1024) as u64);
        assert_eq!(ctx.stats.partitions, allowed_bad_partitions(1024) as u64);
        assert_eq!(ctx.stats.heap_sort_fallbacks, 1);
        // Each step before the last peels off the pivot and one element on the right.
        assert_eq!(ctx.stats.heap_sorted_elements, 1024 - 2 * 9);
        assert_eq!(ctx.stats.max_recursion_depth, 2);
    }

    #[test]
    fn multiplicative_permutation_sorts() {
        let mut data: Vec<u32> = (0..4096_u32)
            .map(|i| i.wrapping_mul(2_654_435_761) % 4096)
            .collect();
        let ctx = run(&mut data);
        assert!(data.iter().copied().eq(0..4096));
        assert!(ctx.stats.partitions > 0);
        assert!(ctx.stats.max_recursion_depth <= 13);
    }

    #[test]
    fn exhausted_depth_budget_keeps_partitioning() {
        let len = 4096;
        let mut data: Vec<u32> = (0..len as u32).collect();
        data.shuffle(&mut StdRng::seed_from_u64(0xDE97_2026));

        let mut ctx = SortContext::default();
        ctx.begin(len);
        pdqsort(&mut data, &mut lt, 0, usize::MAX, 1, &mut ctx);

        assert!(data.iter().copied().eq(0..len as u32));
        assert!(ctx.stats.partitions > 0);
        assert_eq!(ctx.stats.depth_budget_overruns, ctx.stats.partitions);
        assert_eq!(ctx.stats.heap_sort_fallbacks, 0);
    }

    #[test]
    fn overruns_are_counted_once_the_depth_budget_runs_out() {
        let len = 4096;
        let mut data: Vec<u32> = (0..len as u32).collect();
        data.shuffle(&mut StdRng::seed_from_u64(0xDE98_2026));

        let mut ctx = SortContext::default();
        ctx.begin(len);
        pdqsort(&mut data, &mut lt, 0, allowed_bad_partitions(len), 1, &mut ctx);

        assert!(data.iter().copied().eq(0..len as u32));
        assert!(ctx.stats.depth_budget_overruns > 0);
        // Only the quality budget can hand ranges to heap sort.
        assert!(ctx.stats.heap_sort_fallbacks <= ctx.stats.bad_partitions);
    }

    #[test]
    fn descending_input_breaks_patterns() {
        let mut data: Vec<u32> = (0..1024).rev().collect();
        let ctx = run(&mut data);
        assert!(data.iter().copied().eq(0..1024));
        assert!(ctx.stats.bad_partitions > 0);
        assert!(ctx.stats.pattern_breaks > 0);
    }
}
