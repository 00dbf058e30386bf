use std::cmp::Ordering;

use crate::cs::select::Direction;

/// Three-way partitions `arr` around the value at `pivot_index`.
///
/// Returns `(lt, gt)` such that, in `direction` order:
/// * `arr[..lt]` comes strictly before the pivot
/// * `arr[lt..gt]` ties with the pivot
/// * `arr[gt..]` comes strictly after the pivot
///
/// Every element is compared with the pivot exactly once, so an input made of
/// one repeated value is finished in a single pass with `lt == 0` and
/// `gt == arr.len()`.
///
/// # Panics
/// Panics if `pivot_index` is out of bounds.
pub fn partition_three_way<T: Ord + Clone>(
    arr: &mut [T],
    pivot_index: usize,
    direction: Direction,
) -> (usize, usize) {
    let pivot = arr[pivot_index].clone();
    let (mut lt, mut i, mut gt) = (0, 0, arr.len());
    while i < gt {
        match direction.compare(&arr[i], &pivot) {
            Ordering::Less => {
                arr.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                arr.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }
    (lt, gt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_ascending(arr: &[i32], lt: usize, gt: usize, pivot: i32) {
        assert!(arr[..lt].iter().all(|&x| x < pivot));
        assert!(arr[lt..gt].iter().all(|&x| x == pivot));
        assert!(arr[gt..].iter().all(|&x| x > pivot));
    }

    #[test]
    fn test_partition_ascending() {
        let mut arr = [5, 1, 9, 5, 3, 7, 5, 2];
        let (lt, gt) = partition_three_way(&mut arr, 0, Direction::Ascending);
        assert_eq!((lt, gt), (3, 6));
        check_ascending(&arr, lt, gt, 5);
    }

    #[test]
    fn test_partition_descending() {
        let mut arr = [4, 8, 1, 4, 6];
        let (lt, gt) = partition_three_way(&mut arr, 3, Direction::Descending);
        assert_eq!((lt, gt), (2, 4));
        assert!(arr[..lt].iter().all(|&x| x > 4));
        assert!(arr[lt..gt].iter().all(|&x| x == 4));
        assert!(arr[gt..].iter().all(|&x| x < 4));
    }

    #[test]
    fn test_all_equal() {
        let mut arr = [7; 32];
        assert_eq!(
            partition_three_way(&mut arr, 11, Direction::Ascending),
            (0, 32)
        );
    }

    #[test]
    fn test_single_element() {
        let mut arr = [42];
        assert_eq!(partition_three_way(&mut arr, 0, Direction::Descending), (0, 1));
    }

    #[test]
    fn test_keeps_multiset() {
        let mut arr = [3, 2, 3, 1, 2, 4, 5, 5, 6];
        let mut before = arr.to_vec();
        let (lt, gt) = partition_three_way(&mut arr, 4, Direction::Ascending);
        check_ascending(&arr, lt, gt, 2);
        let mut after = arr.to_vec();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }
}
