//! Fork-join driver.
//!
//! Each call owns a rayon scope acting as its task group. The call keeps
//! splitting its range, hands the smaller side to a spawned task that re-enters
//! [`quicksort`], and continues with the larger side until the range is at or
//! below `cutoff`, where `serial` finishes it. The scope joins every spawned
//! child before the call returns, on the uniform early exit too.
//!
//! Live tasks always hold disjoint sub-slices obtained through
//! `split_at_mut`, so no element is reachable from two tasks at once.

use log::trace;

use super::partition::{self, Split};

pub(crate) fn quicksort<T, F, S>(v: &mut [T], cutoff: usize, is_less: &F, serial: &S)
where
    T: Send,
    F: Fn(&T, &T) -> bool + Sync,
    S: Fn(&mut [T]) + Sync,
{
    if v.len() <= cutoff {
        serial(v);
        return;
    }

    rayon::scope(move |group| {
        let mut v = v;
        while v.len() > cutoff {
            let middle = match partition::divide(v, is_less) {
                Split::At(middle) => middle,
                Split::Uniform => {
                    trace!("uniform range of {} elements", v.len());
                    return;
                }
            };
            let (left, rest) = v.split_at_mut(middle);
            let (_, right) = rest.split_at_mut(1);

            // Spawn the smaller side; the larger one stays on this task.
            let (smaller, larger) = if left.len() < right.len() {
                (left, right)
            } else {
                (right, left)
            };
            if !smaller.is_empty() {
                trace!("spawning range of {} elements", smaller.len());
                group.spawn(move |_| quicksort(smaller, cutoff, is_less, serial));
            }
            v = larger;
        }
        serial(v);
    });
}
