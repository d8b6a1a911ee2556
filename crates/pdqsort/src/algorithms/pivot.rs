use crate::{SortContext, TUNED_PARAMS};

/// Sorts the three positions so that `v[m0] <= v[m1] <= v[m2]`; the median ends up at `m1`.
#[inline]
pub(crate) fn median_of_three<T, F>(
    v: &mut [T],
    m1: usize,
    m0: usize,
    m2: usize,
    is_less: &mut F,
    ctx: &mut SortContext,
) where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(&v[m1], &v[m0]) {
        ctx.swap(v, m1, m0);
    }
    // v[m0] <= v[m1]
    if is_less(&v[m2], &v[m1]) {
        ctx.swap(v, m2, m1);
        // v[m0] <= v[m2] && v[m1] < v[m2]
        if is_less(&v[m1], &v[m0]) {
            ctx.swap(v, m1, m0);
        }
    }
}

/// Moves the pivot estimate to `v[0]` and returns the midpoint index.
///
/// Afterwards `v[mid] <= v[0] <= v[len - 1]`. Ranges longer than
/// [`TunedParams::ninther_threshold`](crate::TunedParams::ninther_threshold) use Tukey's ninther:
/// the median of the medians of three evenly spread triples.
pub(crate) fn choose_pivot<T, F>(v: &mut [T], is_less: &mut F, ctx: &mut SortContext) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(len >= 3);

    let mid = len / 2;
    let last = len - 1;
    if len > TUNED_PARAMS.ninther_threshold {
        let step = len / 8;
        median_of_three(v, 0, step, step * 2, is_less, ctx);
        median_of_three(v, mid, mid - step, mid + step, is_less, ctx);
        median_of_three(v, last, last - step, last - step * 2, is_less, ctx);
    }
    median_of_three(v, 0, mid, last, is_less, ctx);
    mid
}
