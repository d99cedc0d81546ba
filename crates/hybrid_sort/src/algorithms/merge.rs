/// Merges the sorted runs `[left, mid]` and `[mid + 1, right]` back into `data`.
///
/// Both halves are copied into scratch buffers that live only for this call.
/// Ties take from the left run first. Unsorted runs are not detected.
pub fn merge_range<T: Ord + Copy>(data: &mut [T], left: usize, mid: usize, right: usize) {
    let left_run = data[left..=mid].to_vec();
    let right_run = data[(mid + 1)..=right].to_vec();

    let mut i = 0usize;
    let mut j = 0usize;
    let mut k = left;

    while i < left_run.len() && j < right_run.len() {
        if left_run[i] <= right_run[j] {
            data[k] = left_run[i];
            i += 1;
        } else {
            data[k] = right_run[j];
            j += 1;
        }
        k += 1;
    }

    let rest = if i < left_run.len() {
        &left_run[i..]
    } else {
        &right_run[j..]
    };
    data[k..(k + rest.len())].copy_from_slice(rest);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaves_two_runs() {
        let mut data = [1, 3, 5, 2, 4, 6];
        merge_range(&mut data, 0, 2, 5);
        assert_eq!(data, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn drains_left_remainder() {
        let mut data = [7, 8, 9, 1, 2];
        merge_range(&mut data, 0, 2, 4);
        assert_eq!(data, [1, 2, 7, 8, 9]);
    }

    #[test]
    fn empty_right_run_leaves_left_run() {
        let mut data = [0, 2, 4, 6];
        merge_range(&mut data, 1, 3, 3);
        assert_eq!(data, [0, 2, 4, 6]);
    }

    #[test]
    fn outside_cells_are_untouched() {
        let mut data = [100, 5, 6, 1, 2, -100];
        merge_range(&mut data, 1, 2, 4);
        assert_eq!(data, [100, 1, 2, 5, 6, -100]);
    }
}
