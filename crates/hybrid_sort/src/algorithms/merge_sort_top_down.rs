use super::common;
use super::merge;

/// Plain top-down merge sort over `[left, right]`, recursing down to single elements.
pub fn sort_range<T: Ord + Copy>(data: &mut [T], left: usize, right: usize) {
    if left >= right {
        return;
    }

    let mid = common::midpoint(left, right);
    sort_range(data, left, mid);
    sort_range(data, mid + 1, right);
    merge::merge_range(data, left, mid, right);
}
