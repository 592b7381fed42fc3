// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Classic in-memory sort algorithms.
//!
//! The four algorithms span the stability / in-place / bound-sensitivity space:
//!
//! | Algorithm            | Stable | In-place | Bound-sensitive |
//! |----------------------|--------|----------|-----------------|
//! | MergeSort            | yes    | no       | no              |
//! | RandomizedQuickSort  | no     | yes      | no              |
//! | CountingSort         | yes    | no       | yes             |
//! | HeapSort             | no     | yes      | no              |
//!
//! Each is generic over the element type so stability can be observed on keyed
//! records. The registry instantiates them for `u32` behind [`SortFn`].

pub mod counting;
pub mod heap;
pub mod merge;
pub mod quick;

pub use counting::{counting_sort, counting_sort_by_key};
pub use heap::heap_sort;
pub use merge::merge_sort;
pub use quick::randomized_quick_sort;

use crate::rng::RandomSource;

/// Uniform sort capability: sort ascending in place, given the value upper
/// bound and the shared random source. Only counting sort reads the bound and
/// only randomized quicksort reads the random source.
pub type SortFn = fn(&mut [u32], u32, &mut RandomSource);

/// Structural properties of an algorithm, as listed by `sortbench list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmTraits {
    pub stable: bool,
    pub in_place: bool,
    pub bound_sensitive: bool,
}

pub(crate) fn merge_sort_u32(data: &mut [u32], _value_bound: u32, _rng: &mut RandomSource) {
    merge_sort(data);
}

pub(crate) fn randomized_quick_sort_u32(data: &mut [u32], _value_bound: u32, rng: &mut RandomSource) {
    randomized_quick_sort(data, rng);
}

pub(crate) fn counting_sort_u32(data: &mut [u32], value_bound: u32, _rng: &mut RandomSource) {
    counting_sort(data, value_bound);
}

pub(crate) fn heap_sort_u32(data: &mut [u32], _value_bound: u32, _rng: &mut RandomSource) {
    heap_sort(data);
}

/// Check that a slice is non-decreasing.
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted::<u32>(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2, 3]));
        assert!(!is_sorted(&[2, 1]));
    }

    #[test]
    fn test_adapters_sort() {
        let adapters: [SortFn; 4] = [
            merge_sort_u32,
            randomized_quick_sort_u32,
            counting_sort_u32,
            heap_sort_u32,
        ];
        let mut rng = RandomSource::seeded(1);

        for sort in adapters {
            let mut data = vec![5, 3, 9, 0, 3, 7];
            sort(&mut data, 9, &mut rng);
            assert_eq!(data, vec![0, 3, 3, 5, 7, 9]);
        }
    }
}
