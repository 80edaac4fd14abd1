//! Partition key selection.
//!
//! The key is the median of three medians-of-three taken from nine samples
//! spread evenly over the range, so sorted, reversed and organ-pipe inputs
//! still split near the middle.

/// Position of the median of `v[a]`, `v[b]` and `v[c]`.
///
/// Ties resolve by position: with all three equal the result is `a`.
#[inline]
pub(crate) fn median_of_three<T, F>(v: &[T], a: usize, b: usize, c: usize, is_less: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    if is_less(&v[a], &v[b]) {
        if is_less(&v[b], &v[c]) {
            b
        } else if is_less(&v[a], &v[c]) {
            c
        } else {
            a
        }
    } else if is_less(&v[c], &v[b]) {
        b
    } else if is_less(&v[c], &v[a]) {
        c
    } else {
        a
    }
}

/// Position of the partition key for a non-empty range.
///
/// Samples sit at multiples of `len / 8` from the front and mirrored offsets
/// from the back, so every index stays in bounds even for tiny ranges.
#[inline]
pub(crate) fn choose_partition_key<T, F>(v: &[T], is_less: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    debug_assert!(!v.is_empty());

    let step = v.len() / 8;
    let last = v.len() - 1;
    let front = median_of_three(v, 0, step, step * 2, is_less);
    let middle = median_of_three(v, step * 3, step * 4, last - step * 3, is_less);
    let back = median_of_three(v, last - step * 2, last - step, last, is_less);
    median_of_three(v, front, middle, back, is_less)
}
