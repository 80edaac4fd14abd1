pub(crate) fn heap_sort<T, F>(v: &mut [T], is_less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut start = (len - 2) / 2;
    loop {
        sift_down(v, start, len, is_less);
        if start == 0 {
            break;
        }
        start -= 1;
    }

    let mut end = len - 1;
    while end > 0 {
        v.swap(0, end);
        sift_down(v, 0, end, is_less);
        end -= 1;
    }
}

#[inline]
fn sift_down<T, F>(v: &mut [T], mut root: usize, end: usize, is_less: &F)
where
    F: Fn(&T, &T) -> bool,
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

        v.swap(root, swap_idx);
        root = swap_idx;
    }
}
