use thiserror::Error;

/// Errors raised while building a [`Sorter`](crate::Sorter).
///
/// Sorting itself never fails; only the worker pool setup can.
#[derive(Debug, Error)]
pub enum SortError {
    #[error("thread count must be at least 1, got {0}")]
    InvalidThreadCount(usize),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
