pub(crate) mod common;
pub(crate) mod fork_join;
pub(crate) mod heap_sort;
pub(crate) mod introsort;
pub(crate) mod partition;
pub(crate) mod pivot;
