//! Iterator adapter over a pair of bidirectional cursors

use std::iter::FusedIterator;

use super::BidirectionalCursor;

/// Double-ended iterator over the views between two cursors.
///
/// The front cursor dereferences then advances; the back cursor retreats
/// then dereferences. A remaining-count keeps the two ends from crossing,
/// so neither cursor ever steps outside its range.
#[derive(Debug, Clone)]
pub struct Walk<C> {
    front: C,
    back: C,
    remaining: u64,
}

impl<C: BidirectionalCursor> Walk<C> {
    /// `remaining` must equal the number of positions in `[front, back)`.
    pub(crate) fn new(front: C, back: C, remaining: u64) -> Self {
        Self {
            front,
            back,
            remaining,
        }
    }

    /// Number of views not yet yielded from either end.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Cursor at the next front position.
    pub fn front(&self) -> &C {
        &self.front
    }

    /// Cursor one past the next back position.
    pub fn back(&self) -> &C {
        &self.back
    }
}

impl<C: BidirectionalCursor> Iterator for Walk<C> {
    type Item = C::View;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let view = self.front.view()?;
        self.front.advance().ok()?;
        self.remaining -= 1;
        Some(view)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<C: BidirectionalCursor> DoubleEndedIterator for Walk<C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back.retreat().ok()?;
        self.remaining -= 1;
        self.back.view()
    }
}

impl<C: BidirectionalCursor> FusedIterator for Walk<C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::testing::CountingCursor;

    fn walk(len: u64) -> Walk<CountingCursor> {
        Walk::new(
            CountingCursor { position: 0, len },
            CountingCursor { position: len, len },
            len,
        )
    }

    #[test]
    fn test_forward_and_backward() {
        assert_eq!(walk(4).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(walk(4).rev().collect::<Vec<_>>(), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_ends_meet_without_overlap() {
        let mut iter = walk(3);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(2));
        assert_eq!(iter.front().position, 1);
        assert_eq!(iter.back().position, 2);
        assert_eq!(iter.size_hint(), (1, Some(1)));
        assert_eq!(iter.next_back(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.remaining(), 0);
    }

    #[test]
    fn test_empty_walk() {
        let mut iter = walk(0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }
}
