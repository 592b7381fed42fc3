// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Top-down merge sort.
//!
//! Stable. Each merge copies the two half-partitions into temporary buffers
//! sized to the halves, then merges them back, so auxiliary space is O(n).

/// Sort `data` ascending. Equal elements keep their relative order.
pub fn merge_sort<T: Ord + Clone>(data: &mut [T]) {
    if data.len() <= 1 {
        return;
    }

    let mid = data.len() / 2;
    merge_sort(&mut data[..mid]);
    merge_sort(&mut data[mid..]);
    merge(data, mid);
}

/// Merge the sorted runs `data[..mid]` and `data[mid..]`.
fn merge<T: Ord + Clone>(data: &mut [T], mid: usize) {
    let left = data[..mid].to_vec();
    let right = data[mid..].to_vec();

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        // `<=` takes from the left run on ties, which keeps the sort stable.
        if left[i] <= right[j] {
            data[k] = left[i].clone();
            i += 1;
        } else {
            data[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }

    for value in &left[i..] {
        data[k] = value.clone();
        k += 1;
    }
    for value in &right[j..] {
        data[k] = value.clone();
        k += 1;
    }
}
