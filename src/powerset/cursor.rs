//! Bitmask cursor over a power set

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use super::Mask;
use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use crate::view::{same_source, MaskSelection, SubsetView};
use crate::CombinatoricsError;

/// Subset of a power set, selected by a copied mask.
pub type PowerSubset<'a, T> = SubsetView<'a, T, MaskSelection>;

/// Position inside a power set.
///
/// State: the borrowed source and the current mask. The end sentinel is
/// the mask `2^n`; it is never dereferenced.
pub struct PowerSetCursor<'a, T> {
    source: &'a [T],
    mask: Mask,
}

impl<'a, T> PowerSetCursor<'a, T> {
    /// `mask` must be at most `2^n` and `n` at most `MAX_POWER_SET_LEN`.
    pub(crate) fn new(source: &'a [T], mask: Mask) -> Self {
        Self { source, mask }
    }

    fn end_mask(&self) -> Mask {
        1 << self.source.len()
    }

    /// Current mask.
    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Whether this is the empty-subset position.
    pub fn is_begin(&self) -> bool {
        self.mask == 0
    }

    /// Whether this is the end sentinel.
    pub fn is_end(&self) -> bool {
        self.mask == self.end_mask()
    }

    /// Step to the next mask.
    pub fn advance(&mut self) -> Result<(), CombinatoricsError> {
        if self.is_end() {
            return Err(CombinatoricsError::PastEnd);
        }
        self.mask += 1;
        if self.is_end() {
            trace!(n = self.source.len(), "power set cursor reached end");
        }
        Ok(())
    }

    /// Step to the previous mask.
    pub fn retreat(&mut self) -> Result<(), CombinatoricsError> {
        if self.is_begin() {
            return Err(CombinatoricsError::BeforeBegin);
        }
        self.mask -= 1;
        if self.is_begin() {
            trace!(n = self.source.len(), "power set cursor reached begin");
        }
        Ok(())
    }

    /// Jump by `offset` masks; the target must lie in `[0, 2^n]`.
    pub fn advance_by(&mut self, offset: i64) -> Result<(), CombinatoricsError> {
        let end = self.end_mask();
        // masks never exceed 2^62, so they fit in i64
        let target = (self.mask as i64)
            .checked_add(offset)
            .filter(|target| (0..=end as i64).contains(target))
            .ok_or(CombinatoricsError::OffsetOutOfRange {
                position: self.mask,
                offset,
                len: end,
            })?;
        self.mask = target as Mask;
        Ok(())
    }

    /// Signed distance from `self` to `other`.
    pub fn distance_to(&self, other: &Self) -> Result<i64, CombinatoricsError> {
        if !same_source(self.source, other.source) {
            return Err(CombinatoricsError::DifferentSources);
        }
        Ok(other.mask as i64 - self.mask as i64)
    }

    /// Subset at the current mask; `None` at end.
    pub fn view(&self) -> Option<PowerSubset<'a, T>> {
        if self.is_end() {
            return None;
        }
        Some(SubsetView::new(self.source, MaskSelection::new(self.mask)))
    }
}

impl<T> Clone for PowerSetCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PowerSetCursor<'_, T> {}

impl<T> PartialEq for PowerSetCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        same_source(self.source, other.source) && self.mask == other.mask
    }
}

impl<T> Eq for PowerSetCursor<'_, T> {}

/// Cursors over different sources are unordered.
impl<T> PartialOrd for PowerSetCursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        same_source(self.source, other.source).then(|| self.mask.cmp(&other.mask))
    }
}

impl<T> fmt::Debug for PowerSetCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PowerSetCursor")
            .field("n", &self.source.len())
            .field("mask", &format_args!("{:#b}", self.mask))
            .finish()
    }
}

impl<'a, T> Cursor for PowerSetCursor<'a, T> {
    type View = PowerSubset<'a, T>;
    type Key = Mask;

    fn advance(&mut self) -> Result<(), CombinatoricsError> {
        PowerSetCursor::advance(self)
    }

    fn view(&self) -> Option<Self::View> {
        PowerSetCursor::view(self)
    }

    fn is_end(&self) -> bool {
        PowerSetCursor::is_end(self)
    }

    fn key(&self) -> Mask {
        self.mask
    }
}

impl<T> BidirectionalCursor for PowerSetCursor<'_, T> {
    fn retreat(&mut self) -> Result<(), CombinatoricsError> {
        PowerSetCursor::retreat(self)
    }

    fn is_begin(&self) -> bool {
        PowerSetCursor::is_begin(self)
    }
}

impl<T> RandomAccessCursor for PowerSetCursor<'_, T> {
    fn advance_by(&mut self, offset: i64) -> Result<(), CombinatoricsError> {
        PowerSetCursor::advance_by(self, offset)
    }

    fn distance_to(&self, other: &Self) -> Result<i64, CombinatoricsError> {
        PowerSetCursor::distance_to(self, other)
    }
}
