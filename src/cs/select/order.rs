use std::cmp::Ordering;

/// Sort direction shared by every selection algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Compares `a` and `b` so that `Ordering::Less` means `a` belongs before `b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kth_largest::Direction;
    /// use std::cmp::Ordering;
    ///
    /// assert_eq!(Direction::Descending.compare(&5, &3), Ordering::Less);
    /// assert_eq!(Direction::Ascending.compare(&5, &3), Ordering::Greater);
    /// ```
    #[inline]
    pub fn compare<T: Ord + ?Sized>(self, a: &T, b: &T) -> Ordering {
        match self {
            Direction::Ascending => a.cmp(b),
            Direction::Descending => b.cmp(a),
        }
    }

    /// True when `a` may be placed before `b` (equal elements included).
    #[inline]
    pub fn precedes_or_ties<T: Ord + ?Sized>(self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Greater
    }
}
