// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Counting sort over bounded non-negative keys.
//!
//! O(n + k) with k = value_bound. The only algorithm whose correctness
//! depends on caller-supplied metadata: every key must satisfy
//! `key <= value_bound`. A key above the bound is a contract breach and panics.

/// Sort `data` ascending, given that every element is at most `value_bound`.
pub fn counting_sort(data: &mut [u32], value_bound: u32) {
    if data.len() <= 1 {
        return;
    }

    let mut ranks = cumulative_ranks(data, value_bound, |&v| v);
    let mut output = vec![0u32; data.len()];
    for &value in data.iter().rev() {
        let rank = &mut ranks[value as usize];
        *rank -= 1;
        output[*rank] = value;
    }

    data.copy_from_slice(&output);
}

/// Stable counting sort of arbitrary records by a bounded key.
pub fn counting_sort_by_key<T, F>(data: &mut [T], value_bound: u32, key: F)
where
    T: Clone,
    F: Fn(&T) -> u32,
{
    if data.len() <= 1 {
        return;
    }

    let mut ranks = cumulative_ranks(data, value_bound, &key);

    // Right-to-left placement preserves the relative order of equal keys.
    let mut output: Vec<Option<T>> = vec![None; data.len()];
    for item in data.iter().rev() {
        let rank = &mut ranks[key(item) as usize];
        *rank -= 1;
        output[*rank] = Some(item.clone());
    }

    for (slot, item) in data.iter_mut().zip(output) {
        if let Some(item) = item {
            *slot = item;
        }
    }
}

/// Count each key, then turn the counts into one-past-last output positions.
fn cumulative_ranks<T, F>(data: &[T], value_bound: u32, key: F) -> Vec<usize>
where
    F: Fn(&T) -> u32,
{
    let mut ranks = vec![0usize; value_bound as usize + 1];
    for item in data {
        let k = key(item);
        debug_assert!(k <= value_bound, "key {} exceeds value bound {}", k, value_bound);
        ranks[k as usize] += 1;
    }

    for i in 1..ranks.len() {
        ranks[i] += ranks[i - 1];
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<u32> = vec![];
        counting_sort(&mut empty, 10);
        assert!(empty.is_empty());

        let mut single = vec![4u32];
        counting_sort(&mut single, 4);
        assert_eq!(single, vec![4]);
    }

    #[test]
    fn test_sorts_with_inclusive_bound() {
        let mut data = vec![3u32, 1, 2, 3, 1];
        counting_sort(&mut data, 3);
        assert_eq!(data, vec![1, 1, 2, 3, 3]);
    }

    #[test]
    fn test_stable_equal_keys() {
        // (key, original position)
        let mut data = vec![(3u32, 0usize), (1, 1), (2, 2), (3, 3), (1, 4)];
        counting_sort_by_key(&mut data, 3, |&(k, _)| k);

        assert_eq!(data, vec![(1, 1), (1, 4), (2, 2), (3, 0), (3, 3)]);
    }

    #[test]
    fn test_bound_larger_than_values() {
        let mut data = vec![7u32, 0, 7, 2];
        counting_sort(&mut data, 100_000);
        assert_eq!(data, vec![0, 2, 7, 7]);
    }

    #[test]
    fn test_plain_and_keyed_paths_agree() {
        let mut rng = crate::rng::RandomSource::seeded(11);
        let data: Vec<u32> = (0..2_000).map(|_| rng.below(64)).collect();

        let mut plain = data.clone();
        counting_sort(&mut plain, 63);
        let mut keyed = data.clone();
        counting_sort_by_key(&mut keyed, 63, |&v| v);

        let mut expected = data;
        expected.sort_unstable();
        assert_eq!(plain, expected);
        assert_eq!(keyed, expected);
    }

    #[test]
    #[should_panic]
    fn test_key_above_bound_panics() {
        let mut data = vec![1u32, 5];
        counting_sort(&mut data, 3);
    }
}
