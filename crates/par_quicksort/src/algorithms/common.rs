use std::cmp::Ordering;

use crate::TUNED_PARAMS;

#[inline]
pub(crate) fn insertion_sort<T, F>(v: &mut [T], is_less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Returns `true` when no adjacent pair of `v` compares `Greater`.
pub fn is_sorted_by<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

#[inline]
pub(crate) fn floor_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        usize::BITS as usize - 1 - n.leading_zeros() as usize
    }
}

#[inline]
pub(crate) fn introsort_depth_limit(n: usize) -> usize {
    let log = floor_log2(n);
    (log * TUNED_PARAMS.introsort_depth_factor_num) / TUNED_PARAMS.introsort_depth_factor_den
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_sort_small_inputs() {
        let cases: [&[i32]; 5] = [&[], &[1], &[2, 1], &[3, 1, 2, 1], &[5, 4, 3, 2, 1, 0]];
        for case in cases {
            let mut actual = case.to_vec();
            insertion_sort(&mut actual, &|a: &i32, b: &i32| a < b);
            let mut expected = case.to_vec();
            expected.sort_unstable();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn is_sorted_by_accepts_equal_neighbours() {
        assert!(is_sorted_by(&[] as &[u8], u8::cmp));
        assert!(is_sorted_by(&[1, 1, 2, 2, 3], i32::cmp));
        assert!(!is_sorted_by(&[1, 3, 2], i32::cmp));
        assert!(is_sorted_by(&[3, 2, 1], |a: &i32, b: &i32| b.cmp(a)));
    }

    #[test]
    fn floor_log2_and_depth_limit() {
        assert_eq!(floor_log2(0), 0);
        assert_eq!(floor_log2(1), 0);
        assert_eq!(floor_log2(2), 1);
        assert_eq!(floor_log2(1023), 9);
        assert_eq!(floor_log2(1024), 10);
        assert_eq!(introsort_depth_limit(1024), 25);
    }
}
