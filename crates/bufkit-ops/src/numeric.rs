//! Numeric reducers and transforms over flat arrays.

/// Value [`find_max`] returns for an empty slice.
///
/// Indistinguishable from a genuine maximum of `-1`; use
/// [`try_find_max`] when the caller needs to tell the two apart.
pub const FIND_MAX_EMPTY: i32 = -1;

/// Sum all elements left to right, wrapping on overflow.
///
/// An empty slice sums to `0`.
pub fn sum_array(a: &[i32]) -> i32 {
    a.iter().fold(0i32, |acc, &v| acc.wrapping_add(v))
}

/// Multiply every element by `factor` in place.
pub fn scale_array(a: &mut [f32], factor: f32) {
    for v in a.iter_mut() {
        *v *= factor;
    }
}

/// Largest element, or [`FIND_MAX_EMPTY`] for an empty slice.
pub fn find_max(a: &[i32]) -> i32 {
    try_find_max(a).unwrap_or(FIND_MAX_EMPTY)
}

/// Largest element, or `None` for an empty slice.
///
/// Scans from index 1 with `a[0]` as the starting candidate; ties keep
/// the earlier element.
pub fn try_find_max(a: &[i32]) -> Option<i32> {
    let (&first, rest) = a.split_first()?;
    let mut maxv = first;
    for &v in rest {
        if v > maxv {
            maxv = v;
        }
    }
    Some(maxv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sum_of_empty_is_zero() {
        assert_eq!(sum_array(&[]), 0);
    }

    #[test]
    fn sum_small() {
        assert_eq!(sum_array(&[1, 2, 3]), 6);
        assert_eq!(sum_array(&[-4, 4, -1]), -1);
    }

    #[test]
    fn sum_wraps_on_overflow() {
        assert_eq!(sum_array(&[i32::MAX, 1]), i32::MIN);
        assert_eq!(sum_array(&[i32::MIN, -1]), i32::MAX);
    }

    #[test]
    fn scale_doubles() {
        let mut a = [1.0f32, 2.0, 3.0];
        scale_array(&mut a, 2.0);
        assert_eq!(a, [2.0, 4.0, 6.0]);
    }

    #[test]
    fn scale_empty_is_noop() {
        let mut a: [f32; 0] = [];
        scale_array(&mut a, 3.0);
        assert!(a.is_empty());
    }

    #[test]
    fn find_max_picks_largest() {
        assert_eq!(find_max(&[5, 9, 2]), 9);
        assert_eq!(find_max(&[-7, -3, -9]), -3);
    }

    #[test]
    fn find_max_empty_returns_sentinel() {
        assert_eq!(find_max(&[]), FIND_MAX_EMPTY);
        assert_eq!(find_max(&[]), -1);
    }

    #[test]
    fn sentinel_is_ambiguous_with_real_minus_one() {
        // Legacy behaviour: callers cannot tell these apart.
        assert_eq!(find_max(&[-1, -5]), find_max(&[]));
        assert_eq!(try_find_max(&[-1, -5]), Some(-1));
        assert_eq!(try_find_max(&[]), None);
    }

    proptest! {
        #[test]
        fn find_max_agrees_with_iter_max(a in prop::collection::vec(any::<i32>(), 1..64)) {
            prop_assert_eq!(try_find_max(&a), a.iter().copied().max());
            prop_assert_eq!(find_max(&a), *a.iter().max().unwrap());
        }

        #[test]
        fn sum_matches_wide_accumulator(a in prop::collection::vec(any::<i32>(), 0..64)) {
            let wide: i64 = a.iter().map(|&v| v as i64).sum();
            prop_assert_eq!(sum_array(&a), wide as i32);
        }
    }
}
