use rand::Rng;

use crate::cs::select::partition::partition_three_way;
use crate::cs::select::{Direction, Rank};
use crate::error::Result;

/// Returns the k-th largest element by quicksorting `nums` in place, descending.
///
/// `nums` is left sorted in descending order.
///
/// # Complexity
/// * Time: O(n log n) expected, O(n^2) worst case
/// * Space: O(log n) stack
pub fn kth_largest<T, R>(nums: &mut [T], k: usize, rng: &mut R) -> Result<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    let rank = Rank::new(k, nums.len())?;
    randomized_quicksort_descending(nums, rng);
    Ok(nums[rank.descending_index()].clone())
}

/// Sorts `arr` in descending order with a uniformly random pivot.
///
/// Only the smaller side of each partition is handled recursively; the loop
/// carries on with the larger one, so the stack never grows past log2(n) frames.
///
/// # Examples
/// ```
/// use kth_largest::select::randomized_quicksort_descending;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(42);
/// let mut arr = vec![3, 6, 2, 7, 1, 8, 5, 4];
/// randomized_quicksort_descending(&mut arr, &mut rng);
/// assert_eq!(arr, vec![8, 7, 6, 5, 4, 3, 2, 1]);
/// ```
pub fn randomized_quicksort_descending<T, R>(mut arr: &mut [T], rng: &mut R)
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    while arr.len() > 1 {
        let pivot_index = rng.gen_range(0..arr.len());
        let (lt, gt) = partition_three_way(arr, pivot_index, Direction::Descending);

        let remaining = std::mem::take(&mut arr);
        let (head, rest) = remaining.split_at_mut(lt);
        let (_, tail) = rest.split_at_mut(gt - lt);
        if head.len() < tail.len() {
            randomized_quicksort_descending(head, rng);
            arr = tail;
        } else {
            randomized_quicksort_descending(tail, rng);
            arr = head;
        }
    }
}
