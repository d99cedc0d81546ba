/// Shift-and-insert over the closed range `[left, right]`.
///
/// Indices must already be validated. Elements equal to `key` are never
/// shifted past, so the routine is stable.
pub fn sort_range<T: Ord + Copy>(data: &mut [T], left: usize, right: usize) {
    for i in (left + 1)..=right {
        let key = data[i];
        let mut j = i;
        while j > left && data[j - 1] > key {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_only_the_requested_range() {
        let mut data = [9, 8, 5, 3, 4, 1, 0];
        sort_range(&mut data, 2, 5);
        assert_eq!(data, [9, 8, 1, 3, 4, 5, 0]);
    }

    #[test]
    fn single_element_range_is_untouched() {
        let mut data = [3, 2, 1];
        sort_range(&mut data, 1, 1);
        assert_eq!(data, [3, 2, 1]);
    }

    #[test]
    fn whole_slice_with_duplicates() {
        let mut data = [4, 1, 4, 2, 1, 3, 4];
        sort_range(&mut data, 0, 6);
        assert_eq!(data, [1, 1, 2, 3, 4, 4, 4]);
    }
}
