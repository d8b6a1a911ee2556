pub(crate) mod common;
pub(crate) mod heap_sort;
pub(crate) mod insertion_sort;
pub(crate) mod partition;
pub(crate) mod pdqsort;
pub(crate) mod pivot;
