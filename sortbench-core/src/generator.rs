// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark input generation.
//!
//! Stateless free functions, each returning a fresh sequence of the requested
//! length. Randomness comes only from the [`RandomSource`] passed in.
//!
//! Random-family generators keep every element in `[0, bound)`. Sorted-family
//! generators build the ramp `floor(i * bound / length)`, which is only a
//! meaningful distinct-value ramp when `bound <= length`; callers enforce that.

use crate::error::InvalidArgumentError;
use crate::rng::RandomSource;

/// Each element drawn independently from `[0, bound)`. Duplicates are possible.
pub fn uniform_random(
    rng: &mut RandomSource,
    length: usize,
    bound: u32,
) -> Result<Vec<u32>, InvalidArgumentError> {
    if bound < 1 {
        return Err(InvalidArgumentError::ValueBoundTooSmall { bound });
    }

    Ok((0..length).map(|_| rng.below(bound)).collect())
}

/// Random sequence where `round(length * share)` positions hold one common
/// value and every other position holds a value different from it.
pub fn uniform_random_with_identical_share(
    rng: &mut RandomSource,
    length: usize,
    bound: u32,
    share: f64,
) -> Result<Vec<u32>, InvalidArgumentError> {
    if !(0.0..=1.0).contains(&share) {
        return Err(InvalidArgumentError::IdenticalShareOutOfRange { share });
    }
    if bound < 1 {
        return Err(InvalidArgumentError::ValueBoundTooSmall { bound });
    }

    let identical_count = ((length as f64 * share).round() as usize).min(length);
    let remaining = length - identical_count;
    if bound == 1 && remaining > 0 {
        return Err(InvalidArgumentError::NoDistinctValues { bound, remaining });
    }

    let identical = rng.below(bound);
    let mut array = Vec::with_capacity(length);
    array.resize(identical_count, identical);
    for _ in 0..remaining {
        let value = loop {
            let candidate = rng.below(bound);
            if candidate != identical {
                break candidate;
            }
        };
        array.push(value);
    }

    shuffle(rng, &mut array);
    Ok(array)
}

/// Ascending ramp: element `i` is `floor(i * bound / length)`.
pub fn sorted_ascending(length: usize, bound: u32) -> Vec<u32> {
    (0..length).map(|i| ramp_value(i, length, bound)).collect()
}

/// Descending ramp: element `i` is `floor((length - 1 - i) * bound / length)`.
pub fn sorted_descending(length: usize, bound: u32) -> Vec<u32> {
    (0..length)
        .map(|i| ramp_value(length - 1 - i, length, bound))
        .collect()
}

/// Ascending ramp with two distinct, uniformly chosen positions swapped.
///
/// Sequences shorter than two elements have no distinct pair and are returned
/// as the plain ramp.
pub fn sorted_ascending_with_one_swap(rng: &mut RandomSource, length: usize, bound: u32) -> Vec<u32> {
    let mut array = sorted_ascending(length, bound);
    if length < 2 {
        return array;
    }

    let first = rng.index_between(0, length - 1);
    let second = loop {
        let candidate = rng.index_between(0, length - 1);
        if candidate != first {
            break candidate;
        }
    };
    array.swap(first, second);
    array
}

/// Fisher-Yates shuffle, walking from the last index down to 1 and swapping
/// with a uniformly chosen index in `[0, i]`.
pub fn shuffle(rng: &mut RandomSource, array: &mut [u32]) {
    for i in (1..array.len()).rev() {
        let j = rng.index_between(0, i);
        array.swap(i, j);
    }
}

fn ramp_value(i: usize, length: usize, bound: u32) -> u32 {
    (i as u64 * bound as u64 / length as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_ascending_identity_ramp() {
        assert_eq!(sorted_ascending(5, 5), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_sorted_descending_identity_ramp() {
        assert_eq!(sorted_descending(5, 5), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_ramp_scales_into_bound() {
        let ramp = sorted_ascending(10, 5);
        assert_eq!(ramp, vec![0, 0, 1, 1, 2, 2, 3, 3, 4, 4]);

        let ramp = sorted_descending(10, 5);
        assert_eq!(ramp, vec![4, 4, 3, 3, 2, 2, 1, 1, 0, 0]);
    }

    #[test]
    fn test_ramp_empty() {
        assert!(sorted_ascending(0, 5).is_empty());
        assert!(sorted_descending(0, 5).is_empty());
    }

    #[test]
    fn test_one_swap_differs_in_exactly_two_positions() {
        let mut rng = RandomSource::seeded(11);
        let ramp = sorted_ascending(100, 100);

        for _ in 0..20 {
            let swapped = sorted_ascending_with_one_swap(&mut rng, 100, 100);
            let diffs = ramp.iter().zip(&swapped).filter(|(a, b)| a != b).count();
            assert_eq!(diffs, 2);

            let mut sorted = swapped.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, ramp);
        }
    }

    #[test]
    fn test_one_swap_short_inputs() {
        let mut rng = RandomSource::seeded(11);
        assert!(sorted_ascending_with_one_swap(&mut rng, 0, 1).is_empty());
        assert_eq!(sorted_ascending_with_one_swap(&mut rng, 1, 1), vec![0]);
        assert_eq!(sorted_ascending_with_one_swap(&mut rng, 2, 2), vec![1, 0]);
    }

    #[test]
    fn test_uniform_random_length_and_range() {
        let mut rng = RandomSource::seeded(5);
        let array = uniform_random(&mut rng, 1000, 17).unwrap();
        assert_eq!(array.len(), 1000);
        assert!(array.iter().all(|&v| v < 17));
    }

    #[test]
    fn test_uniform_random_rejects_zero_bound() {
        let mut rng = RandomSource::seeded(5);
        assert_eq!(
            uniform_random(&mut rng, 10, 0),
            Err(InvalidArgumentError::ValueBoundTooSmall { bound: 0 })
        );
    }

    #[test]
    fn test_identical_share_exact_count() {
        let mut rng = RandomSource::seeded(42);
        let array = uniform_random_with_identical_share(&mut rng, 10, 50, 0.5).unwrap();
        assert_eq!(array.len(), 10);

        // Exactly one value occurs five times; every other element differs from it.
        let designated = (0..50u32)
            .find(|v| array.iter().filter(|&&x| x == *v).count() == 5)
            .expect("one value must occur exactly five times");
        let others = array.iter().filter(|&&x| x != designated).count();
        assert_eq!(others, 5);
        assert!(array.iter().all(|&v| v < 50));
    }

    #[test]
    fn test_identical_share_rounds() {
        let mut rng = RandomSource::seeded(8);
        // round(7 * 0.5) = round(3.5) = 4
        let array = uniform_random_with_identical_share(&mut rng, 7, 1000, 0.5).unwrap();
        let max_count = (0..1000u32)
            .map(|v| array.iter().filter(|&&x| x == v).count())
            .max()
            .unwrap();
        assert!(max_count >= 4);
    }

    #[test]
    fn test_identical_share_full_and_empty() {
        let mut rng = RandomSource::seeded(9);
        let array = uniform_random_with_identical_share(&mut rng, 20, 1, 1.0).unwrap();
        assert_eq!(array, vec![0; 20]);

        let array = uniform_random_with_identical_share(&mut rng, 20, 30, 0.0).unwrap();
        assert_eq!(array.len(), 20);
    }

    #[test]
    fn test_identical_share_rejects_out_of_range() {
        let mut rng = RandomSource::seeded(9);
        assert_eq!(
            uniform_random_with_identical_share(&mut rng, 10, 10, 1.5),
            Err(InvalidArgumentError::IdenticalShareOutOfRange { share: 1.5 })
        );
        assert!(uniform_random_with_identical_share(&mut rng, 10, 10, -0.1).is_err());
        assert!(uniform_random_with_identical_share(&mut rng, 10, 10, f64::NAN).is_err());
        assert_eq!(
            uniform_random_with_identical_share(&mut rng, 10, 0, 0.5),
            Err(InvalidArgumentError::ValueBoundTooSmall { bound: 0 })
        );
    }

    #[test]
    fn test_identical_share_rejects_single_value_bound() {
        let mut rng = RandomSource::seeded(9);
        assert_eq!(
            uniform_random_with_identical_share(&mut rng, 10, 1, 0.5),
            Err(InvalidArgumentError::NoDistinctValues {
                bound: 1,
                remaining: 5
            })
        );
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = RandomSource::seeded(13);
        let mut array: Vec<u32> = (0..50).collect();
        shuffle(&mut rng, &mut array);

        let mut sorted = array.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<u32>>());
    }
}
