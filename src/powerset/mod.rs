//! Power-set enumeration in binary-counting order
//!
//! Position `m` of the range is the subset whose bit `i` is set iff
//! element `i` is included. Begin is mask `0` (the empty subset), the last
//! position is `2^n - 1` (the full subset) and end is `2^n`.

mod cursor;

pub use cursor::{PowerSetCursor, PowerSubset};

use tracing::debug;

use crate::cursor::Walk;
use crate::CombinatoricsError;

/// Index integer backing the power-set representation.
pub type Mask = u64;

/// Bit width of [`Mask`].
pub const MASK_BITS: usize = Mask::BITS as usize;

/// Largest source length a power set accepts.
///
/// The end sentinel `2^n` and every signed distance between two positions
/// must be representable, so two bits of the 64-bit mask stay unused.
pub const MAX_POWER_SET_LEN: usize = MASK_BITS - 2;

/// Iterator over every subset of a power set, front to back.
pub type PowerSetIter<'a, T> = Walk<PowerSetCursor<'a, T>>;

/// All subsets of a borrowed source collection.
#[derive(Debug)]
pub struct PowerSet<'a, T> {
    source: &'a [T],
    len: u64,
}

/// Build the power set of `source`.
///
/// Fails with [`CombinatoricsError::TooManyElements`] when `source` is
/// longer than [`MAX_POWER_SET_LEN`].
pub fn power_set<T>(source: &[T]) -> Result<PowerSet<'_, T>, CombinatoricsError> {
    PowerSet::new(source)
}

impl<'a, T> PowerSet<'a, T> {
    /// Build the power set of `source`.
    pub fn new(source: &'a [T]) -> Result<Self, CombinatoricsError> {
        let n = source.len();
        if n > MAX_POWER_SET_LEN {
            debug!(n, max = MAX_POWER_SET_LEN, "rejected power set source");
            return Err(CombinatoricsError::TooManyElements {
                len: n,
                max: MAX_POWER_SET_LEN,
            });
        }

        let len = 1u64 << n;
        debug!(n, len, "constructed power set range");
        Ok(Self { source, len })
    }

    /// The borrowed source collection.
    pub fn source(&self) -> &'a [T] {
        self.source
    }

    /// Number of source elements `n`.
    pub fn element_count(&self) -> usize {
        self.source.len()
    }

    /// Number of subsets, `2^n`.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Always `false`: the empty subset is always a member.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Cursor at the empty subset.
    pub fn begin(&self) -> PowerSetCursor<'a, T> {
        PowerSetCursor::new(self.source, 0)
    }

    /// One-past-last cursor, mask `2^n`.
    pub fn end(&self) -> PowerSetCursor<'a, T> {
        PowerSetCursor::new(self.source, self.len)
    }

    /// Cursor at `mask`; `mask == 2^n` yields the end cursor.
    pub fn cursor_at(&self, mask: Mask) -> Result<PowerSetCursor<'a, T>, CombinatoricsError> {
        if mask > self.len {
            return Err(CombinatoricsError::PositionOutOfRange {
                position: mask,
                len: self.len,
            });
        }
        Ok(PowerSetCursor::new(self.source, mask))
    }

    /// Iterate every subset in mask order.
    pub fn iter(&self) -> PowerSetIter<'a, T> {
        Walk::new(self.begin(), self.end(), self.len)
    }
}

impl<T> Clone for PowerSet<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PowerSet<'_, T> {}

/// Element-wise comparison of the source collections.
impl<'b, T: PartialEq> PartialEq<PowerSet<'b, T>> for PowerSet<'_, T> {
    fn eq(&self, other: &PowerSet<'b, T>) -> bool {
        self.source == other.source
    }
}

impl<T: Eq> Eq for PowerSet<'_, T> {}

impl<'a, T> IntoIterator for PowerSet<'a, T> {
    type Item = <PowerSetIter<'a, T> as Iterator>::Item;
    type IntoIter = PowerSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &PowerSet<'a, T> {
    type Item = <PowerSetIter<'a, T> as Iterator>::Item;
    type IntoIter = PowerSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
