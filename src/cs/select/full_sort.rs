use crate::cs::select::{Direction, Rank};
use crate::error::Result;

/// Returns the k-th largest element by sorting a copy of `nums` in descending order.
///
/// # Complexity
/// * Time: O(n log n)
/// * Space: O(n) for the copy
///
/// # Examples
/// ```
/// use kth_largest::select::full_sort;
///
/// assert_eq!(full_sort::kth_largest(&[3, 2, 1, 5, 6, 4], 2).unwrap(), 5);
/// ```
pub fn kth_largest<T: Ord + Clone>(nums: &[T], k: usize) -> Result<T> {
    let rank = Rank::new(k, nums.len())?;
    let mut sorted = nums.to_vec();
    sorted.sort_unstable_by(|a, b| Direction::Descending.compare(a, b));
    Ok(sorted[rank.descending_index()].clone())
}
