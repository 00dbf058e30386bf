use crate::cs::select::{Direction, Rank};
use crate::error::Result;

/// Returns the k-th largest element by merge sorting a copy of `nums` in descending order.
///
/// Merge sort involves no randomness, so it doubles as a reference when checking
/// the randomized algorithms.
///
/// # Complexity
/// * Time: O(n log n)
/// * Space: O(n), one scratch buffer reused by every merge
pub fn kth_largest<T: Ord + Clone>(nums: &[T], k: usize) -> Result<T> {
    let rank = Rank::new(k, nums.len())?;
    let sorted = merge_sort_descending(nums);
    Ok(sorted[rank.descending_index()].clone())
}

/// Returns a descending, stable merge sorted copy of `nums`.
///
/// # Examples
/// ```
/// use kth_largest::select::merge_sort_descending;
///
/// assert_eq!(merge_sort_descending(&[2, 9, 4, 9, 1]), vec![9, 9, 4, 2, 1]);
/// ```
pub fn merge_sort_descending<T: Ord + Clone>(nums: &[T]) -> Vec<T> {
    let mut sorted = nums.to_vec();
    let mut scratch = Vec::with_capacity(sorted.len());
    sort(&mut sorted, &mut scratch);
    sorted
}

// Recursion depth is log2(n): the slice halves on every call.
fn sort<T: Ord + Clone>(arr: &mut [T], scratch: &mut Vec<T>) {
    if arr.len() <= 1 {
        return;
    }
    let mid = arr.len() / 2;
    sort(&mut arr[..mid], scratch);
    sort(&mut arr[mid..], scratch);
    merge(arr, mid, scratch);
}

fn merge<T: Ord + Clone>(arr: &mut [T], mid: usize, scratch: &mut Vec<T>) {
    scratch.clear();
    let (left, right) = arr.split_at(mid);
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        // Ties take the left element first, which keeps the merge stable
        if Direction::Descending.precedes_or_ties(&left[i], &right[j]) {
            scratch.push(left[i].clone());
            i += 1;
        } else {
            scratch.push(right[j].clone());
            j += 1;
        }
    }
    scratch.extend_from_slice(&left[i..]);
    scratch.extend_from_slice(&right[j..]);
    arr.clone_from_slice(scratch);
}
