use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::cs::select::Rank;
use crate::error::{Error, Result};

/// Returns the k-th largest element using a min-heap that never holds more than `k` items.
///
/// Each value is pushed; whenever the heap grows past `k` its minimum is dropped.
/// After one pass the heap holds the `k` largest values and its minimum is the answer.
/// With `k == n` nothing is ever dropped and the minimum of the whole input comes out.
///
/// # Complexity
/// * Time: O(n log k)
/// * Space: O(k)
///
/// # Examples
/// ```
/// use kth_largest::select::bounded_heap;
///
/// assert_eq!(bounded_heap::kth_largest(&[7, 10, 4, 3, 20, 15], 3).unwrap(), 10);
/// ```
pub fn kth_largest<T: Ord + Clone>(nums: &[T], k: usize) -> Result<T> {
    Rank::new(k, nums.len())?;

    let mut heap = BinaryHeap::with_capacity(k + 1);
    for num in nums {
        heap.push(Reverse(num));
        if heap.len() > k {
            heap.pop();
        }
    }

    // Rank::new guarantees at least one element went in.
    let Reverse(min) = heap.peek().ok_or(Error::InvalidRank {
        k,
        len: nums.len(),
    })?;
    Ok(T::clone(min))
}
