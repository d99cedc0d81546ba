use crate::SortError;

/// Validates the closed range `[left, right]` against a sequence of length `len`.
///
/// Returns `Ok(false)` for an empty range (`left > right`), which callers treat
/// as a no-op regardless of `len`.
#[inline]
pub fn check_range(len: usize, left: usize, right: usize) -> Result<bool, SortError> {
    if left > right {
        return Ok(false);
    }
    if right >= len {
        return Err(SortError::RangeOutOfBounds { left, right, len });
    }
    Ok(true)
}

#[inline]
pub fn midpoint(left: usize, right: usize) -> usize {
    left + (right - left) / 2
}

#[inline]
pub fn is_sorted_non_decreasing<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_range_is_accepted_for_any_length() {
        assert_eq!(check_range(0, 1, 0), Ok(false));
        assert_eq!(check_range(0, usize::MAX, 3), Ok(false));
        assert_eq!(check_range(5, 4, 2), Ok(false));
    }

    #[test]
    fn range_bounds() {
        assert_eq!(check_range(5, 0, 4), Ok(true));
        assert_eq!(check_range(5, 2, 2), Ok(true));
        assert_eq!(
            check_range(5, 0, 5),
            Err(SortError::RangeOutOfBounds {
                left: 0,
                right: 5,
                len: 5
            })
        );
        assert!(check_range(0, 0, 0).is_err());
    }

    #[test]
    fn midpoint_biases_low_half() {
        assert_eq!(midpoint(0, 1), 0);
        assert_eq!(midpoint(0, 4), 2);
        assert_eq!(midpoint(3, 6), 4);
        assert_eq!(midpoint(usize::MAX - 2, usize::MAX), usize::MAX - 1);
    }
}
