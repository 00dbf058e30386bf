//! K-th largest selection algorithms.
//!
//! This module provides five interchangeable ways of finding the element that
//! would sit at position `k` (1-based) if the input were sorted in descending
//! order:
//! - Full sort of a copy
//! - Bounded min-heap of size `k`
//! - Top-down merge sort
//! - Randomized quicksort
//! - Randomized quickselect
//!
//! Duplicates count individually toward the rank, so `k = 1` is the maximum and
//! `k = len` is the minimum.
//!
//! # Examples
//!
//! ```rust
//! use kth_largest::select::{bounded_heap, randomized_quickselect};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let nums = [3, 2, 1, 5, 6, 4];
//! assert_eq!(bounded_heap::kth_largest(&nums, 2).unwrap(), 5);
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(7);
//! let mut copy = nums.to_vec();
//! assert_eq!(randomized_quickselect::kth_largest(&mut copy, 2, &mut rng).unwrap(), 5);
//! ```

use std::fmt;

use rand::Rng;
use serde::{Serialize, Serializer};

use crate::error::Result;

pub mod bounded_heap;
pub mod full_sort;
pub mod merge_sort;
pub mod order;
pub mod partition;
pub mod randomized_quickselect;
pub mod randomized_quicksort;
pub mod rank;

pub use merge_sort::merge_sort_descending;
pub use order::Direction;
pub use randomized_quicksort::randomized_quicksort_descending;
pub use rank::Rank;

/// The selection strategies, in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    FullSort,
    BoundedHeap,
    MergeSort,
    Quicksort,
    Quickselect,
}

impl Algorithm {
    /// Every algorithm, in reporting order. Ties on timing go to the earlier entry.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::FullSort,
        Algorithm::BoundedHeap,
        Algorithm::MergeSort,
        Algorithm::Quicksort,
        Algorithm::Quickselect,
    ];

    /// Human readable label used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::FullSort => "Built-in Sort",
            Algorithm::BoundedHeap => "Heap",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::Quicksort => "Quicksort",
            Algorithm::Quickselect => "Quickselect",
        }
    }

    /// Whether the algorithm reorders the slice it is given.
    pub fn mutates_input(self) -> bool {
        matches!(self, Algorithm::Quicksort | Algorithm::Quickselect)
    }

    /// Returns the k-th largest element of `values`.
    ///
    /// Callers that need `values` afterwards must pass a copy: quicksort and
    /// quickselect rearrange the slice in place.
    pub fn select<T, R>(self, values: &mut [T], k: usize, rng: &mut R) -> Result<T>
    where
        T: Ord + Clone,
        R: Rng + ?Sized,
    {
        match self {
            Algorithm::FullSort => full_sort::kth_largest(values, k),
            Algorithm::BoundedHeap => bounded_heap::kth_largest(values, k),
            Algorithm::MergeSort => merge_sort::kth_largest(values, k),
            Algorithm::Quicksort => randomized_quicksort::kth_largest(values, k, rng),
            Algorithm::Quickselect => randomized_quickselect::kth_largest(values, k, rng),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Algorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
