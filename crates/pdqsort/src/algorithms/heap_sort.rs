use crate::SortContext;

pub(crate) fn heap_sort<T, F>(v: &mut [T], is_less: &mut F, ctx: &mut SortContext)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut start = (len - 2) / 2;
    loop {
        sift_down(v, start, len, is_less, ctx);
        if start == 0 {
            break;
        }
        start -= 1;
    }

    let mut end = len - 1;
    while end > 0 {
        ctx.swap(v, 0, end);
        sift_down(v, 0, end, is_less, ctx);
        end -= 1;
    }
}

#[inline]
fn sift_down<T, F>(v: &mut [T], mut root: usize, end: usize, is_less: &mut F, ctx: &mut SortContext)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let child = root * 2 + 1;
        if child >= end {
            break;
        }

        let mut swap_idx = child;
        if child + 1 < end && is_less(&v[child], &v[child + 1]) {
            swap_idx = child + 1;
        }

        if !is_less(&v[root], &v[swap_idx]) {
            break;
        }

        ctx.swap(v, root, swap_idx);
        root = swap_idx;
    }
}
