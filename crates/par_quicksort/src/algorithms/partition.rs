use super::pivot;

/// Outcome of [`divide`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Split {
    /// `v[..middle]` is strictly less than the key, the key sits at
    /// `v[middle]` and `v[middle + 1..]` is greater than or equal to it.
    /// The key belongs to neither side.
    At(usize),
    /// Every element compares equal to the key; nothing is left to sort.
    Uniform,
}

/// Partitions `v` in place around a key chosen by
/// [`pivot::choose_partition_key`].
///
/// The key is parked at `v[0]` while the rest is partitioned, so the
/// comparisons always see the original key value.
pub(crate) fn divide<T, F>(v: &mut [T], is_less: &F) -> Split
where
    F: Fn(&T, &T) -> bool,
{
    if v.is_empty() {
        return Split::Uniform;
    }

    let key = pivot::choose_partition_key(v, is_less);
    v.swap(0, key);

    let (key, rest) = v.split_at_mut(1);
    let key = &key[0];
    let middle = partition_less(rest, |x| is_less(x, key));

    if middle != 0 {
        v.swap(0, middle);
        Split::At(middle)
    } else if rest.iter().any(|x| is_less(key, x)) {
        Split::At(0)
    } else {
        Split::Uniform
    }
}

/// Single pass: moves every element satisfying `pred` to the front and
/// returns how many there were.
#[inline]
fn partition_less<T, P>(v: &mut [T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut store = 0usize;
    for i in 0..v.len() {
        if pred(&v[i]) {
            v.swap(store, i);
            store += 1;
        }
    }
    store
}
