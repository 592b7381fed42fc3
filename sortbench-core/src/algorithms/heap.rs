// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! In-place heap sort on a binary max-heap. Not stable.

/// Sort `data` ascending in place.
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    let len = data.len();
    if len <= 1 {
        return;
    }

    // Build the heap, sifting down from the last internal node backward.
    for i in (0..len / 2).rev() {
        sift_down(data, len, i);
    }

    for end in (1..len).rev() {
        data.swap(0, end);
        sift_down(data, end, 0);
    }
}

/// Restore the heap property for the subtree rooted at `root` within `data[..heap_len]`.
fn sift_down<T: Ord>(data: &mut [T], heap_len: usize, mut root: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < heap_len && data[left] > data[largest] {
            largest = left;
        }
        if right < heap_len && data[right] > data[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }

        data.swap(root, largest);
        root = largest;
    }
}
