pub(crate) mod common;
pub(crate) mod hybrid;
pub(crate) mod insertion_sort;
pub(crate) mod merge;
pub(crate) mod merge_sort_top_down;
