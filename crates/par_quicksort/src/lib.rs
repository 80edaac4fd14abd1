//! Fork-join parallel in-place quicksort.
//!
//! Ranges above the cutoff are split around a median-of-medians key; the
//! smaller side is spawned onto the rayon pool and the larger side is kept
//! on the current task. Ranges at or below the cutoff go to a serial sort.
//! The sort is unstable and performs only swaps, so a panicking comparator
//! leaves the slice a permutation of its input.
//!
//! ```
//! let mut v = vec![5, 3, 8, 3, 9, 1];
//! par_quicksort::sort(&mut v);
//! assert_eq!(v, [1, 3, 3, 5, 8, 9]);
//! ```

mod algorithms;
mod config;
mod error;

use std::cmp::Ordering;

use algorithms::{fork_join, introsort};
use log::debug;

pub use algorithms::common::is_sorted_by;
pub use config::{ALL_SERIAL_SORTS, SerialSort, SortConfig, TUNED_PARAMS, TunedParams};
pub use error::SortError;

/// Sorts `v` ascending on the global rayon pool.
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Send,
{
    sort_by(v, T::cmp);
}

/// Sorts `v` by `compare`, which must be a total order.
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    sort_with_config(v, &SortConfig::default(), &compare);
}

pub fn sort_by_key<T, K, F>(v: &mut [T], key: F)
where
    T: Send,
    K: Ord,
    F: Fn(&T) -> K + Sync,
{
    sort_by(v, |a, b| key(a).cmp(&key(b)));
}

/// A reusable sorter.
///
/// With `threads` set, the sorter owns a dedicated pool and every sort runs
/// inside it; otherwise sorts run on the global pool.
#[derive(Default)]
pub struct Sorter {
    config: SortConfig,
    pool: Option<rayon::ThreadPool>,
}

impl Sorter {
    pub fn new(config: SortConfig) -> Result<Self, SortError> {
        config.validate()?;
        let pool = match config.threads {
            Some(threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("par-quicksort-{i}"))
                    .build()?,
            ),
            None => None,
        };
        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    pub fn sort<T>(&self, v: &mut [T])
    where
        T: Ord + Send,
    {
        self.sort_by(v, T::cmp);
    }

    pub fn sort_by<T, F>(&self, v: &mut [T], compare: F)
    where
        T: Send,
        F: Fn(&T, &T) -> Ordering + Sync,
    {
        match &self.pool {
            Some(pool) => pool.install(|| sort_with_config(v, &self.config, &compare)),
            None => sort_with_config(v, &self.config, &compare),
        }
    }

    pub fn sort_by_key<T, K, F>(&self, v: &mut [T], key: F)
    where
        T: Send,
        K: Ord,
        F: Fn(&T) -> K + Sync,
    {
        self.sort_by(v, |a, b| key(a).cmp(&key(b)));
    }
}

fn sort_with_config<T, F>(v: &mut [T], config: &SortConfig, compare: &F)
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    debug!(
        "sorting {} elements: cutoff={} serial={} threads={}",
        v.len(),
        config.cutoff,
        config.serial.name(),
        rayon::current_num_threads(),
    );

    let is_less = |a: &T, b: &T| compare(a, b) == Ordering::Less;
    match config.serial {
        SerialSort::Introsort => {
            let serial = |leaf: &mut [T]| introsort::sort_by(leaf, &is_less);
            fork_join::quicksort(v, config.cutoff, &is_less, &serial);
        }
        SerialSort::StdUnstable => {
            let serial = |leaf: &mut [T]| leaf.sort_unstable_by(compare);
            fork_join::quicksort(v, config.cutoff, &is_less, &serial);
        }
    }
}
