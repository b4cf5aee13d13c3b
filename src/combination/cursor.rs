//! Index-tuple cursor over k-combinations

use std::fmt;

use tracing::trace;

use super::{rank, tuple};
use crate::cursor::{BidirectionalCursor, Cursor};
use crate::view::{same_source, SubsetView, TupleSelection};
use crate::CombinatoricsError;

/// One k-combination, selected by a copied index tuple.
pub type Combination<'a, T> = SubsetView<'a, T, TupleSelection>;

/// Position inside a k-combination range.
///
/// Holds a strictly increasing k-tuple plus an exhausted flag. When the
/// flag is set the tuple keeps the last combination, so retreating from
/// end is a flag flip. When `k > n` the range is empty and the cursor is
/// permanently exhausted.
pub struct CombinationCursor<'a, T> {
    source: &'a [T],
    indices: Vec<usize>,
    exhausted: bool,
}

impl<'a, T> CombinationCursor<'a, T> {
    pub(crate) fn first(source: &'a [T], k: usize) -> Self {
        Self {
            source,
            indices: tuple::first(k),
            exhausted: k > source.len(),
        }
    }

    pub(crate) fn end(source: &'a [T], k: usize) -> Self {
        Self {
            source,
            indices: tuple::last(source.len(), k).unwrap_or_else(|| tuple::first(k)),
            exhausted: true,
        }
    }

    fn fits(&self) -> bool {
        self.indices.len() <= self.source.len()
    }

    /// Combination size `k`.
    pub fn size(&self) -> usize {
        self.indices.len()
    }

    /// Current tuple; `None` at end.
    pub fn indices(&self) -> Option<&[usize]> {
        (!self.exhausted).then_some(self.indices.as_slice())
    }

    /// Whether this is the first combination (or the end of an empty range).
    pub fn is_begin(&self) -> bool {
        if !self.fits() {
            return true;
        }
        !self.exhausted && tuple::is_first(&self.indices)
    }

    /// Whether this is the end sentinel.
    pub fn is_end(&self) -> bool {
        self.exhausted
    }

    /// Step to the lexicographic successor.
    pub fn advance(&mut self) -> Result<(), CombinatoricsError> {
        if self.exhausted {
            return Err(CombinatoricsError::PastEnd);
        }
        if !tuple::next(&mut self.indices, self.source.len()) {
            self.exhausted = true;
            trace!(
                n = self.source.len(),
                k = self.indices.len(),
                "combination cursor reached end"
            );
        }
        Ok(())
    }

    /// Step to the lexicographic predecessor.
    pub fn retreat(&mut self) -> Result<(), CombinatoricsError> {
        if self.exhausted {
            if !self.fits() {
                return Err(CombinatoricsError::BeforeBegin);
            }
            // the tuple already holds the last combination
            self.exhausted = false;
        } else if !tuple::prev(&mut self.indices, self.source.len()) {
            return Err(CombinatoricsError::BeforeBegin);
        }
        if tuple::is_first(&self.indices) {
            trace!(
                n = self.source.len(),
                k = self.indices.len(),
                "combination cursor reached begin"
            );
        }
        Ok(())
    }

    /// Lexicographic rank of the current combination; `None` at end.
    pub fn rank(&self) -> Option<u64> {
        if self.exhausted {
            return None;
        }
        rank::rank(self.source.len(), &self.indices)
    }

    /// Jump to the combination at `position`; `C(n, k)` yields end.
    pub fn seek(&mut self, position: u64) -> Result<(), CombinatoricsError> {
        let n = self.source.len();
        let k = self.indices.len();
        let len = rank::binomial(n, k).ok_or(CombinatoricsError::CountOverflow { n, k })?;

        if position > len {
            return Err(CombinatoricsError::PositionOutOfRange { position, len });
        }
        if position == len {
            *self = Self::end(self.source, k);
        } else {
            self.indices = rank::unrank(n, k, position)
                .ok_or(CombinatoricsError::PositionOutOfRange { position, len })?;
            self.exhausted = false;
        }
        trace!(n, k, position, "combination cursor seek");
        Ok(())
    }

    /// Combination at the current tuple; `None` at end.
    pub fn view(&self) -> Option<Combination<'a, T>> {
        if self.exhausted {
            return None;
        }
        Some(SubsetView::new(self.source, TupleSelection::new(&self.indices)))
    }
}

impl<T> Clone for CombinationCursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            indices: self.indices.clone(),
            exhausted: self.exhausted,
        }
    }
}

impl<T> PartialEq for CombinationCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        same_source(self.source, other.source)
            && self.indices.len() == other.indices.len()
            && self.exhausted == other.exhausted
            && (self.exhausted || self.indices == other.indices)
    }
}

impl<T> Eq for CombinationCursor<'_, T> {}

impl<T> fmt::Debug for CombinationCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("CombinationCursor");
        debug
            .field("n", &self.source.len())
            .field("k", &self.indices.len());
        if self.exhausted {
            debug.field("indices", &"end");
        } else {
            debug.field("indices", &self.indices);
        }
        debug.finish()
    }
}

impl<'a, T> Cursor for CombinationCursor<'a, T> {
    type View = Combination<'a, T>;
    type Key = Option<Vec<usize>>;

    fn advance(&mut self) -> Result<(), CombinatoricsError> {
        CombinationCursor::advance(self)
    }

    fn view(&self) -> Option<Self::View> {
        CombinationCursor::view(self)
    }

    fn is_end(&self) -> bool {
        CombinationCursor::is_end(self)
    }

    fn key(&self) -> Self::Key {
        self.indices().map(<[usize]>::to_vec)
    }
}

impl<T> BidirectionalCursor for CombinationCursor<'_, T> {
    fn retreat(&mut self) -> Result<(), CombinatoricsError> {
        CombinationCursor::retreat(self)
    }

    fn is_begin(&self) -> bool {
        CombinationCursor::is_begin(self)
    }
}
