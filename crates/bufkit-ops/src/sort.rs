//! In-place ascending bubble sort.

/// Sort `a` ascending in place.
///
/// Pass `i` bubbles the largest remaining element to position
/// `len - i - 1`. Only strictly greater neighbours are swapped, so equal
/// elements keep their relative order. `O(n^2)` comparisons.
pub fn bubble_sort<T: PartialOrd>(a: &mut [T]) {
    let n = a.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sorts_driver_input() {
        let mut a = [9, 2, 5, 1, 7, 3, 6, 4];
        bubble_sort(&mut a);
        assert_eq!(a, [1, 2, 3, 4, 5, 6, 7, 9]);
    }

    #[test]
    fn empty_and_single_are_noops() {
        let mut empty: [i32; 0] = [];
        bubble_sort(&mut empty);
        let mut one = [42];
        bubble_sort(&mut one);
        assert_eq!(one, [42]);
    }

    #[test]
    fn equal_keys_keep_order() {
        let mut a = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        // Order by key only.
        let mut keys: Vec<_> = a.iter().map(|&(k, tag)| Keyed(k, tag)).collect();
        bubble_sort(&mut keys);
        let tags: Vec<char> = keys.iter().map(|k| k.1).collect();
        assert_eq!(tags, ['b', 'd', 'a', 'c']);
        a.sort_by_key(|&(k, _)| k);
        assert_eq!(a.map(|(_, t)| t), ['b', 'd', 'a', 'c']);
    }

    #[derive(Debug, Clone, Copy)]
    struct Keyed(i32, char);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.0.partial_cmp(&other.0)
        }
    }

    proptest! {
        #[test]
        fn sorted_permutation(a in prop::collection::vec(any::<i32>(), 0..64)) {
            let mut ours = a.clone();
            bubble_sort(&mut ours);
            let mut expected = a;
            expected.sort();
            prop_assert_eq!(ours, expected);
        }

        #[test]
        fn idempotent(a in prop::collection::vec(-20i32..20, 0..64)) {
            let mut once = a;
            bubble_sort(&mut once);
            let mut twice = once.clone();
            bubble_sort(&mut twice);
            prop_assert_eq!(once, twice);
        }
    }
}
