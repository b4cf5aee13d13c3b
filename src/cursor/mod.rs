//! Cursor capability tiers
//!
//! A cursor is a position inside a half-open range `[begin, end)`.
//! Capabilities compose as traits instead of a type hierarchy:
//! - [`Cursor`]: advance, dereference, end detection (forward tier)
//! - [`BidirectionalCursor`]: adds retreat
//! - [`RandomAccessCursor`]: adds O(1) jumps and distances
//!
//! Power-set cursors implement all three. Combination cursors stop at
//! bidirectional; their rank-based seeking is an inherent method.

mod walk;

pub use walk::Walk;

use std::hash::Hash;

use crate::CombinatoricsError;

/// Forward cursor over an immutable source collection.
pub trait Cursor: Clone + PartialEq {
    /// Value produced by dereferencing a position.
    type View;

    /// Comparable copy of the index representation.
    type Key: Clone + Eq + Hash;

    /// Move to the next position.
    ///
    /// Fails with [`CombinatoricsError::PastEnd`] on the end sentinel and
    /// leaves the cursor unchanged.
    fn advance(&mut self) -> Result<(), CombinatoricsError>;

    /// Dereference the current position; `None` on the end sentinel.
    fn view(&self) -> Option<Self::View>;

    /// Whether this cursor is the end sentinel.
    fn is_end(&self) -> bool;

    /// Snapshot of the index representation.
    fn key(&self) -> Self::Key;
}

/// Cursor that can also step backwards.
pub trait BidirectionalCursor: Cursor {
    /// Move to the previous position.
    ///
    /// Fails with [`CombinatoricsError::BeforeBegin`] on the first position
    /// and leaves the cursor unchanged.
    fn retreat(&mut self) -> Result<(), CombinatoricsError>;

    /// Whether this cursor is the first position of its range.
    fn is_begin(&self) -> bool;
}

/// Cursor supporting constant-time positional arithmetic.
pub trait RandomAccessCursor: BidirectionalCursor {
    /// Move by `offset` positions in either direction.
    fn advance_by(&mut self, offset: i64) -> Result<(), CombinatoricsError>;

    /// Signed number of positions from `self` to `other`.
    fn distance_to(&self, other: &Self) -> Result<i64, CombinatoricsError>;
}

/// Count the advances needed to reach the end sentinel.
pub fn steps_forward<C: Cursor>(mut cursor: C) -> u64 {
    let mut steps = 0;
    while cursor.advance().is_ok() {
        steps += 1;
    }
    steps
}

/// Count the retreats needed to reach the first position.
pub fn steps_backward<C: BidirectionalCursor>(mut cursor: C) -> u64 {
    let mut steps = 0;
    while cursor.retreat().is_ok() {
        steps += 1;
    }
    steps
}

#[cfg(test)]
pub(crate) mod testing {
    //! Minimal cursor over `[0, len]` for exercising generic code.

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct CountingCursor {
        pub(crate) position: u64,
        pub(crate) len: u64,
    }

    impl Cursor for CountingCursor {
        type View = u64;
        type Key = u64;

        fn advance(&mut self) -> Result<(), CombinatoricsError> {
            if self.position == self.len {
                return Err(CombinatoricsError::PastEnd);
            }
            self.position += 1;
            Ok(())
        }

        fn view(&self) -> Option<u64> {
            (self.position < self.len).then_some(self.position)
        }

        fn is_end(&self) -> bool {
            self.position == self.len
        }

        fn key(&self) -> u64 {
            self.position
        }
    }

    impl BidirectionalCursor for CountingCursor {
        fn retreat(&mut self) -> Result<(), CombinatoricsError> {
            if self.position == 0 {
                return Err(CombinatoricsError::BeforeBegin);
            }
            self.position -= 1;
            Ok(())
        }

        fn is_begin(&self) -> bool {
            self.position == 0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::CountingCursor;
    use super::*;

    #[test]
    fn test_steps_are_symmetric() {
        let begin = CountingCursor { position: 0, len: 7 };
        let end = CountingCursor { position: 7, len: 7 };

        assert_eq!(steps_forward(begin), 7);
        assert_eq!(steps_backward(end), 7);
    }

    #[test]
    fn test_steps_on_empty_range() {
        let cursor = CountingCursor { position: 0, len: 0 };
        assert_eq!(steps_forward(cursor.clone()), 0);
        assert_eq!(steps_backward(cursor), 0);
    }
}
