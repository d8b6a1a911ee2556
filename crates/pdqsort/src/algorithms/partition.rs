use crate::{SortContext, TUNED_PARAMS};

use super::pivot;

/// Partitions `v` around a pivot picked by [`pivot::choose_pivot`].
///
/// Returns `(mid, greater)`: `v[..mid]` is `<= pivot`, `v[mid] == pivot`, `v[mid..greater]` is
/// final and `v[greater..]` is `>= pivot`. When the range looks duplicate-heavy every
/// pivot-equal element found in the examined band is gathered into `v[mid..greater]`.
pub(crate) fn partition<T, F>(v: &mut [T], is_less: &mut F, ctx: &mut SortContext) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(len > TUNED_PARAMS.insertion_threshold);

    let mid = pivot::choose_pivot(v, is_less, ctx);
    ctx.stats.partitions += 1;

    // Invariants are:
    //   v[0] = pivot
    //   v[0 < i < a] <= pivot
    //   v[a <= i < b] <= pivot
    //   v[b <= i < c] unexamined
    //   v[c <= i < len - 1] >= pivot
    //   v[len - 1] >= pivot
    let mut a = 1;
    let mut c = len - 1;

    while a < c && !is_less(&v[0], &v[a]) {
        a += 1;
    }
    let mut b = a;
    loop {
        while b < c && is_less(&v[b], &v[0]) {
            b += 1;
        }
        while b < c && !is_less(&v[c - 1], &v[0]) {
            c -= 1;
        }
        if b >= c {
            break;
        }
        ctx.swap(v, b, c - 1);
        b += 1;
        c -= 1;
    }

    // A greater band this thin only happens with duplicates (the ninther guarantees a few
    // elements on each side otherwise).
    let mut protect = len - c < TUNED_PARAMS.duplicate_border;
    if !protect && len - c < len / TUNED_PARAMS.duplicate_window_divisor {
        let mut dups = 0;
        // v[len - 1] >= pivot
        if !is_less(&v[0], &v[len - 1]) {
            ctx.swap(v, c, len - 1);
            c += 1;
            dups += 1;
        }
        // v[b - 1] <= pivot
        if !is_less(&v[b - 1], &v[0]) {
            b -= 1;
            dups += 1;
        }
        // mid - 0 = len / 2 and b > len * 3 / 4 - 1, so mid < b and v[mid] <= pivot.
        if !is_less(&v[mid], &v[0]) {
            ctx.swap(v, mid, b - 1);
            b -= 1;
            dups += 1;
        }
        protect = dups > 1;
    }

    if protect {
        ctx.stats.duplicate_passes += 1;
        // Additional invariants:
        //   v[a <= i < b] unexamined
        //   v[b <= i < c] = pivot
        loop {
            while a < b && !is_less(&v[b - 1], &v[0]) {
                b -= 1;
            }
            while a < b && is_less(&v[a], &v[0]) {
                a += 1;
            }
            if a >= b {
                break;
            }
            // v[a] == pivot, v[b - 1] < pivot
            ctx.swap(v, a, b - 1);
            a += 1;
            b -= 1;
        }
    }

    ctx.swap(v, 0, b - 1);
    (b - 1, c)
}
