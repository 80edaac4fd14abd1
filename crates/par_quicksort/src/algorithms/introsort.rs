use crate::TUNED_PARAMS;

use super::partition::{self, Split};
use super::{common, heap_sort};

/// Serial fallback: quicksort on the same key selection and `divide` step as
/// the parallel driver, falling back to heap sort once the depth budget is
/// spent and to insertion sort on short ranges.
pub(crate) fn sort_by<T, F>(v: &mut [T], is_less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }
    let depth_limit = common::introsort_depth_limit(v.len()) + 1;
    introsort_recursive(v, depth_limit, is_less);
}

fn introsort_recursive<T, F>(mut v: &mut [T], mut depth_limit: usize, is_less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    while v.len() > TUNED_PARAMS.insertion_threshold {
        if depth_limit == 0 {
            heap_sort::heap_sort(v, is_less);
            return;
        }
        depth_limit -= 1;

        let middle = match partition::divide(v, is_less) {
            Split::At(middle) => middle,
            Split::Uniform => return,
        };
        let (left, rest) = v.split_at_mut(middle);
        let (_, right) = rest.split_at_mut(1);

        if left.len() < right.len() {
            introsort_recursive(left, depth_limit, is_less);
            v = right;
        } else {
            introsort_recursive(right, depth_limit, is_less);
            v = left;
        }
    }

    common::insertion_sort(v, is_less);
}
