use crate::error::{Error, Result};

/// A validated 1-based "k-th largest" rank over a sequence of known length.
///
/// Rank 1 is the largest element and rank `len` the smallest. The two index
/// conversions below are the only place where that bookkeeping happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    k: usize,
    len: usize,
}

impl Rank {
    /// Validates `k` against a sequence of `len` elements.
    ///
    /// # Errors
    /// Returns `Error::InvalidRank` if `k` is 0, larger than `len`, or `len` is 0.
    ///
    /// # Examples
    /// ```
    /// use kth_largest::Rank;
    ///
    /// let rank = Rank::new(2, 6).unwrap();
    /// assert_eq!(rank.descending_index(), 1);
    /// assert_eq!(rank.ascending_index(), 4);
    /// assert!(Rank::new(7, 6).is_err());
    /// ```
    pub fn new(k: usize, len: usize) -> Result<Self> {
        if k == 0 || k > len {
            return Err(Error::InvalidRank { k, len });
        }
        Ok(Self { k, len })
    }

    pub fn k(self) -> usize {
        self.k
    }

    /// Position of the element in a descending arrangement.
    pub fn descending_index(self) -> usize {
        self.k - 1
    }

    /// Position of the element in an ascending arrangement.
    pub fn ascending_index(self) -> usize {
        self.len - self.k
    }
}
