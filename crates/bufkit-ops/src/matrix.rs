//! Elementwise addition over row-major `m x n` matrices.
//!
//! Element `(i, j)` lives at flat index `i * n + j`. Shapes are the
//! caller's contract: slices shorter than `m * n` panic through slice
//! indexing rather than being clamped.

/// `c = a + b`, elementwise, wrapping on overflow.
///
/// Only the first `m * n` elements of each slice are touched.
///
/// # Panics
///
/// If any of `a`, `b`, `c` holds fewer than `m * n` elements.
pub fn matrix_add(m: usize, n: usize, a: &[i32], b: &[i32], c: &mut [i32]) {
    for i in 0..m {
        for j in 0..n {
            let idx = i * n + j;
            c[idx] = a[idx].wrapping_add(b[idx]);
        }
    }
}

/// `acc += rhs`, elementwise, wrapping on overflow.
///
/// The in-place form of [`matrix_add`] for callers whose output is one
/// of the operands. Every index is written once from its own inputs, so
/// the result matches `matrix_add(m, n, acc, rhs, out)`.
///
/// # Panics
///
/// If `acc` or `rhs` holds fewer than `m * n` elements.
pub fn matrix_add_assign(m: usize, n: usize, acc: &mut [i32], rhs: &[i32]) {
    for i in 0..m {
        for j in 0..n {
            let idx = i * n + j;
            acc[idx] = acc[idx].wrapping_add(rhs[idx]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn three_by_three() {
        let a: Vec<i32> = (0..9).collect();
        let b: Vec<i32> = (0..9).map(|i| i * 2).collect();
        let mut c = [0; 9];
        matrix_add(3, 3, &a, &b, &mut c);
        assert_eq!(c, [0, 3, 6, 9, 12, 15, 18, 21, 24]);
    }

    #[test]
    fn only_first_m_times_n_elements_touched() {
        let a = [1; 6];
        let b = [2; 6];
        let mut c = [-1; 6];
        matrix_add(2, 2, &a, &b, &mut c);
        assert_eq!(c, [3, 3, 3, 3, -1, -1]);
    }

    #[test]
    fn zero_rows_or_columns_is_noop() {
        let mut c = [7; 4];
        matrix_add(0, 4, &[], &[], &mut c);
        matrix_add(4, 0, &[], &[], &mut c);
        assert_eq!(c, [7; 4]);
    }

    #[test]
    #[should_panic]
    fn short_output_is_a_caller_bug() {
        let mut c = [0; 3];
        matrix_add(2, 2, &[0; 4], &[0; 4], &mut c);
    }

    #[test]
    fn add_assign_matches_out_of_place() {
        let a: Vec<i32> = (0..6).collect();
        let b: Vec<i32> = (0..6).map(|i| 10 - i).collect();
        let mut c = [0; 6];
        matrix_add(2, 3, &a, &b, &mut c);
        let mut acc = a.clone();
        matrix_add_assign(2, 3, &mut acc, &b);
        assert_eq!(acc, c);
    }

    fn arb_matrices() -> impl Strategy<Value = (usize, usize, Vec<i32>, Vec<i32>)> {
        (0usize..6, 0usize..6).prop_flat_map(|(m, n)| {
            (
                Just(m),
                Just(n),
                prop::collection::vec(any::<i32>(), m * n),
                prop::collection::vec(any::<i32>(), m * n),
            )
        })
    }

    proptest! {
        #[test]
        fn commutative((m, n, a, b) in arb_matrices()) {
            let mut ab = vec![0; m * n];
            let mut ba = vec![0; m * n];
            matrix_add(m, n, &a, &b, &mut ab);
            matrix_add(m, n, &b, &a, &mut ba);
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn zero_is_identity((m, n, a, _b) in arb_matrices()) {
            let zeros = vec![0; m * n];
            let mut c = vec![0; m * n];
            matrix_add(m, n, &a, &zeros, &mut c);
            prop_assert_eq!(&c, &a);

            let mut acc = a.clone();
            matrix_add_assign(m, n, &mut acc, &zeros);
            prop_assert_eq!(acc, a);
        }
    }
}
