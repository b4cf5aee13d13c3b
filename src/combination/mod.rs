//! k-combination enumeration in lexicographic order
//!
//! Each position is a strictly increasing k-tuple of source indices.
//! Begin is `(0, 1, .., k - 1)`, the last position is
//! `(n - k, .., n - 1)` and end is an exhausted sentinel.
//!
//! Edge cases:
//! - `k = 0`: exactly one (empty) combination
//! - `k = n`: exactly one combination, the whole source
//! - `k > n`: a valid empty range, `begin() == end()`

mod cursor;
pub mod rank;
pub mod tuple;

pub use cursor::{Combination, CombinationCursor};

use std::fmt::Display;

use tracing::debug;

use crate::cursor::Walk;
use crate::CombinatoricsError;

/// Iterator over every combination of a range, front to back.
pub type CombinationIter<'a, T> = Walk<CombinationCursor<'a, T>>;

/// All k-element combinations of a borrowed source collection.
#[derive(Debug)]
pub struct Combinations<'a, T> {
    source: &'a [T],
    size: usize,
    len: u64,
}

/// Build the size-`k` combinations of `source`.
///
/// `k` may be any integer type. Negative or unrepresentable sizes fail
/// with [`CombinatoricsError::InvalidSize`]; `k > n` is a valid empty
/// range.
pub fn combinations<T, K>(source: &[T], k: K) -> Result<Combinations<'_, T>, CombinatoricsError>
where
    K: TryInto<usize>,
    K::Error: Display,
{
    let size = k.try_into().map_err(|err| {
        debug!(n = source.len(), %err, "rejected combination size");
        CombinatoricsError::InvalidSize(err.to_string())
    })?;
    Combinations::new(source, size)
}

impl<'a, T> Combinations<'a, T> {
    /// Build the size-`k` combinations of `source`.
    ///
    /// Fails with [`CombinatoricsError::CountOverflow`] when `C(n, k)`
    /// exceeds `u64::MAX`.
    pub fn new(source: &'a [T], k: usize) -> Result<Self, CombinatoricsError> {
        let n = source.len();
        let len = rank::binomial(n, k).ok_or_else(|| {
            debug!(n, k, "rejected combination count");
            CombinatoricsError::CountOverflow { n, k }
        })?;

        debug!(n, k, len, "constructed combinations range");
        Ok(Self {
            source,
            size: k,
            len,
        })
    }

    /// The borrowed source collection.
    pub fn source(&self) -> &'a [T] {
        self.source
    }

    /// Number of source elements `n`.
    pub fn element_count(&self) -> usize {
        self.source.len()
    }

    /// Combination size `k`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of combinations, `C(n, k)`.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Whether the range has no combinations (`k > n`).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Cursor at the first combination.
    pub fn begin(&self) -> CombinationCursor<'a, T> {
        CombinationCursor::first(self.source, self.size)
    }

    /// End sentinel cursor.
    pub fn end(&self) -> CombinationCursor<'a, T> {
        CombinationCursor::end(self.source, self.size)
    }

    /// Cursor at lexicographic `rank`; `rank == C(n, k)` yields end.
    pub fn cursor_at(&self, rank: u64) -> Result<CombinationCursor<'a, T>, CombinatoricsError> {
        let mut cursor = self.begin();
        cursor.seek(rank)?;
        Ok(cursor)
    }

    /// Iterate every combination in lexicographic order.
    pub fn iter(&self) -> CombinationIter<'a, T> {
        Walk::new(self.begin(), self.end(), self.len)
    }
}

impl<T> Clone for Combinations<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Combinations<'_, T> {}

/// Same `k` and element-wise equal source collections.
impl<'b, T: PartialEq> PartialEq<Combinations<'b, T>> for Combinations<'_, T> {
    fn eq(&self, other: &Combinations<'b, T>) -> bool {
        self.size == other.size && self.source == other.source
    }
}

impl<T: Eq> Eq for Combinations<'_, T> {}

impl<'a, T> IntoIterator for Combinations<'a, T> {
    type Item = Combination<'a, T>;
    type IntoIter = CombinationIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &Combinations<'a, T> {
    type Item = Combination<'a, T>;
    type IntoIter = CombinationIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tracing_test::traced_test;

    #[test]
    fn test_three_choose_two() {
        let source = ['A', 'B', 'C'];
        let pairs: Vec<Vec<char>> = combinations(&source, 2)
            .unwrap()
            .iter()
            .map(|view| view.to_vec())
            .collect();
        assert_eq!(pairs, vec![vec!['A', 'B'], vec!['A', 'C'], vec!['B', 'C']]);
    }

    #[test]
    fn test_sizes() {
        let source = [0.0, 1.0, 4.0];
        let lens: Vec<u64> = (0..=4)
            .map(|k| combinations(&source, k).unwrap().len())
            .collect();
        assert_eq!(lens, vec![1, 3, 3, 1, 0]);
    }

    #[test]
    fn test_negative_size_rejected() {
        let source = [1, 2, 3];
        let err = combinations(&source, -1i64).unwrap_err();
        assert!(matches!(err, CombinatoricsError::InvalidSize(_)));
        assert_eq!(err.kind(), crate::ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_count_overflow_rejected() {
        let source = vec![0u8; 68];
        assert_eq!(
            combinations(&source, 34).unwrap_err(),
            CombinatoricsError::CountOverflow { n: 68, k: 34 }
        );
        assert!(combinations(&source, 3).is_ok());
    }

    #[test]
    fn test_oversized_range_is_empty() {
        let source = [0, 4, -4, 8];
        let combos = combinations(&source, 5).unwrap();
        assert!(combos.is_empty());
        assert_eq!(combos.element_count(), 4);
        assert_eq!(combos.size(), 5);
        assert_eq!(combos.begin(), combos.end());
        assert_eq!(combos.iter().count(), 0);

        let full = combinations(&source, 4).unwrap();
        assert_ne!(full.begin(), full.end());
    }

    #[test]
    fn test_union_covers_source() {
        let source = [0, 1, 2, 3];
        let union: BTreeSet<i32> = combinations(&source, 2)
            .unwrap()
            .iter()
            .flat_map(|view| view.to_vec())
            .collect();
        assert_eq!(union, source.into_iter().collect());
    }

    #[test]
    fn test_range_equality() {
        let first = [1, 2, 3];
        let second = first;
        let third = [1, 2, 4];
        for k in 0..=3 {
            assert_eq!(
                combinations(&first, k).unwrap(),
                combinations(&second, k).unwrap()
            );
            for j in 0..k {
                assert_ne!(
                    combinations(&first, k).unwrap(),
                    combinations(&first, j).unwrap()
                );
            }
        }
        assert_ne!(
            combinations(&first, 2).unwrap(),
            combinations(&third, 2).unwrap()
        );
    }

    #[test]
    fn test_cursor_at_rank() {
        let source = ['a', 'b', 'c', 'd'];
        let combos = combinations(&source, 2).unwrap();
        let cursor = combos.cursor_at(3).unwrap();
        assert_eq!(cursor.view().unwrap().to_vec(), vec!['b', 'c']);
        assert_eq!(combos.cursor_at(6).unwrap(), combos.end());
        assert!(combos.cursor_at(7).is_err());
    }

    #[test]
    fn test_reverse_iteration() {
        let source = [1, 2, 3, 4];
        let backward: Vec<Vec<i32>> = combinations(&source, 2)
            .unwrap()
            .iter()
            .rev()
            .map(|view| view.to_vec())
            .collect();
        assert_eq!(backward.first(), Some(&vec![3, 4]));
        assert_eq!(backward.last(), Some(&vec![1, 2]));
        assert_eq!(backward.len(), 6);
    }

    #[test]
    #[traced_test]
    fn test_construction_is_logged() {
        let source = [1, 2, 3];
        combinations(&source, 2).unwrap();
        assert!(logs_contain("constructed combinations range"));

        assert!(combinations(&source, -2).is_err());
        assert!(logs_contain("rejected combination size"));
    }
}
