use rand::Rng;

use crate::cs::select::partition::partition_three_way;
use crate::cs::select::{Direction, Rank};
use crate::error::Result;

/// Returns the k-th largest element of `nums` with randomized quickselect.
///
/// The rank is turned into an ascending index `n - k`, then `nums` is partitioned
/// around random pivots, keeping only the side that still contains that index.
/// `nums` is left partially reordered.
///
/// # Complexity
/// * Time: O(n) expected, O(n^2) worst case
/// * Space: O(1), the narrowing runs in a loop
///
/// # Examples
/// ```
/// use kth_largest::select::randomized_quickselect;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(3);
/// let mut nums = vec![3, 2, 3, 1, 2, 4, 5, 5, 6];
/// assert_eq!(randomized_quickselect::kth_largest(&mut nums, 4, &mut rng).unwrap(), 4);
/// ```
pub fn kth_largest<T, R>(nums: &mut [T], k: usize, rng: &mut R) -> Result<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    let rank = Rank::new(k, nums.len())?;
    Ok(randomized_quickselect(nums, rank.ascending_index(), rng))
}

/// Returns the element that would sit at `target` if `arr` were sorted ascending.
///
/// # Panics
/// Panics if `target >= arr.len()`.
pub fn randomized_quickselect<T, R>(mut arr: &mut [T], mut target: usize, rng: &mut R) -> T
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    assert!(target < arr.len(), "target is out of bounds");
    loop {
        let pivot_index = rng.gen_range(0..arr.len());
        let (lt, gt) = partition_three_way(arr, pivot_index, Direction::Ascending);
        if lt <= target && target < gt {
            return arr[target].clone();
        }
        let remaining = std::mem::take(&mut arr);
        if target < lt {
            arr = &mut remaining[..lt];
        } else {
            arr = &mut remaining[gt..];
            target -= gt;
        }
    }
}
