use super::common;
use super::insertion_sort;
use super::merge;

/// Top-down merge sort that hands ranges of at most `threshold` elements to
/// insertion sort. `threshold` must be non-zero.
pub fn sort_range<T: Ord + Copy>(data: &mut [T], left: usize, right: usize, threshold: usize) {
    debug_assert!(threshold >= 1);
    if left >= right {
        return;
    }

    if right - left + 1 <= threshold {
        insertion_sort::sort_range(data, left, right);
        return;
    }

    let mid = common::midpoint(left, right);
    sort_range(data, left, mid, threshold);
    sort_range(data, mid + 1, right, threshold);
    merge::merge_range(data, left, mid, right);
}
