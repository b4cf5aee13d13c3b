//! Owned copies of index representations
//!
//! Views hold one of these rather than borrowing cursor state, so a view
//! remains valid after the cursor that produced it moves.

use std::hash::Hash;
use std::iter::{Copied, FusedIterator};
use std::slice;

use crate::powerset::{Mask, MASK_BITS};

/// Set of selected source positions, enumerated in increasing order.
pub trait Selection: Clone + Eq + Hash {
    /// Iterator over selected positions.
    type Indices<'s>: Iterator<Item = usize>
    where
        Self: 's;

    /// Selected positions in increasing order.
    fn indices(&self) -> Self::Indices<'_>;

    /// Number of selected positions.
    fn count(&self) -> usize;

    /// Whether `index` is selected.
    fn contains(&self, index: usize) -> bool;
}

/// Bitmask selection: bit `i` set iff position `i` is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaskSelection(Mask);

impl MaskSelection {
    /// Wrap a raw mask.
    pub fn new(mask: Mask) -> Self {
        Self(mask)
    }

    /// Raw mask value.
    pub fn mask(self) -> Mask {
        self.0
    }
}

impl Selection for MaskSelection {
    type Indices<'s> = MaskBits;

    fn indices(&self) -> MaskBits {
        MaskBits { remaining: self.0 }
    }

    fn count(&self) -> usize {
        self.0.count_ones() as usize
    }

    fn contains(&self, index: usize) -> bool {
        index < MASK_BITS && (self.0 >> index) & 1 == 1
    }
}

/// Set bits of a mask, lowest first.
#[derive(Debug, Clone)]
pub struct MaskBits {
    remaining: Mask,
}

impl Iterator for MaskBits {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.remaining.trailing_zeros() as usize;
        // clear lowest set bit
        self.remaining &= self.remaining - 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.remaining.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for MaskBits {}

impl FusedIterator for MaskBits {}

/// Strictly increasing index tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TupleSelection(Box<[usize]>);

impl TupleSelection {
    /// Copy `indices`, which must be strictly increasing.
    pub fn new(indices: &[usize]) -> Self {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        Self(indices.into())
    }

    /// Selected positions.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl Selection for TupleSelection {
    type Indices<'s> = Copied<slice::Iter<'s, usize>>;

    fn indices(&self) -> Self::Indices<'_> {
        self.0.iter().copied()
    }

    fn count(&self) -> usize {
        self.0.len()
    }

    fn contains(&self, index: usize) -> bool {
        self.0.binary_search(&index).is_ok()
    }
}
