use crate::{SortContext, TUNED_PARAMS};

pub(crate) fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F, ctx: &mut SortContext)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            ctx.swap(v, j - 1, j);
            j -= 1;
        }
    }
}

/// Compare-exchanges every element with the one `gap` positions earlier, once.
pub(crate) fn gap_pass<T, F>(v: &mut [T], gap: usize, is_less: &mut F, ctx: &mut SortContext)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in gap..v.len() {
        if is_less(&v[i], &v[i - gap]) {
            ctx.swap(v, i - gap, i);
        }
    }
}

/// Finishes a range the driver no longer partitions.
pub(crate) fn small_sort<T, F>(v: &mut [T], is_less: &mut F, ctx: &mut SortContext)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }
    ctx.stats.small_sorts += 1;
    gap_pass(v, TUNED_PARAMS.shell_gap, is_less, ctx);
    insertion_sort(v, is_less, ctx);
}
