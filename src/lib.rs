//! # Lazy Power-Set and k-Combination Cursors
//!
//! This library enumerates the subsets of a borrowed slice without
//! materializing them up front.
//!
//! ## Index Representations
//!
//! 1. **Power set**: a 64-bit mask, bit `i` set iff element `i` is selected.
//!    Traversal is binary counting over `[0, 2^n)`; the end sentinel is `2^n`.
//! 2. **k-combinations**: a strictly increasing tuple of `k` indices in `[0, n)`.
//!    Traversal is lexicographic; the end sentinel is an exhausted flag.
//!
//! Per-step state is O(1) for the power set and O(k) for combinations.
//! Dereferencing a cursor yields a [`SubsetView`] that copies the index
//! representation, so views stay valid after the cursor moves.
//!
//! ## Usage Example
//!
//! ```
//! use combinate::{combinations, power_set};
//!
//! let source = ['A', 'B', 'C'];
//!
//! let subsets: Vec<Vec<char>> = power_set(&source)?
//!     .iter()
//!     .map(|view| view.to_vec())
//!     .collect();
//! assert_eq!(subsets[3], vec!['A', 'B']);
//! assert_eq!(subsets.len(), 8);
//!
//! let pairs: Vec<Vec<char>> = combinations(&source, 2)?
//!     .iter()
//!     .map(|view| view.to_vec())
//!     .collect();
//! assert_eq!(pairs, vec![vec!['A', 'B'], vec!['A', 'C'], vec!['B', 'C']]);
//! # Ok::<(), combinate::CombinatoricsError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod combination; // k-combination ranges and cursors
pub mod cursor;      // Capability tiers and the iterator adapter
pub mod memo;        // Position-keyed cache cells
pub mod powerset;    // Power-set ranges and cursors
pub mod view;        // Lazy projections of selections onto the source

// Re-exports for convenience
pub use combination::{combinations, Combination, CombinationCursor, Combinations};
pub use cursor::{BidirectionalCursor, Cursor, RandomAccessCursor, Walk};
pub use memo::{Memo, Memoized};
pub use powerset::{power_set, Mask, PowerSet, PowerSetCursor, PowerSubset, MAX_POWER_SET_LEN};
pub use view::{MaskSelection, RenderConfig, Selection, SubsetView, TupleSelection};

use thiserror::Error;

/// Broad classification of a [`CombinatoricsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// A construction argument was rejected before any iteration began.
    InvalidArgument,
    /// A positional operation would leave the `[begin, end]` range.
    OutOfRange,
}

/// Errors reported by range construction and cursor movement
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombinatoricsError {
    /// Source has more elements than the power-set mask can address
    #[error("source has {len} elements, power set supports at most {max}")]
    TooManyElements {
        /// Number of elements in the source
        len: usize,
        /// Largest supported source length
        max: usize,
    },

    /// Combination size is negative or not representable as `usize`
    #[error("invalid combination size: {0}")]
    InvalidSize(String),

    /// Number of combinations does not fit in a `u64`
    #[error("C({n}, {k}) does not fit in a 64-bit count")]
    CountOverflow {
        /// Number of source elements
        n: usize,
        /// Combination size
        k: usize,
    },

    /// Distance requested between cursors over different sources
    #[error("cursors do not share a source collection")]
    DifferentSources,

    /// Render settings rejected
    #[error("invalid render configuration: {0}")]
    InvalidRenderConfig(String),

    /// Advance called on an end cursor
    #[error("cannot advance past the end of the range")]
    PastEnd,

    /// Retreat called on a begin cursor
    #[error("cannot retreat before the beginning of the range")]
    BeforeBegin,

    /// Relative move would leave the range
    #[error("offset {offset} from position {position} leaves range of length {len}")]
    OffsetOutOfRange {
        /// Position before the move
        position: u64,
        /// Requested offset
        offset: i64,
        /// Number of dereferenceable positions in the range
        len: u64,
    },

    /// Absolute position beyond the end sentinel
    #[error("position {position} out of range (length {len})")]
    PositionOutOfRange {
        /// Requested position
        position: u64,
        /// Number of dereferenceable positions in the range
        len: u64,
    },
}

impl CombinatoricsError {
    /// Classify the error as an invalid argument or an out-of-range move.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CombinatoricsError::TooManyElements { .. }
            | CombinatoricsError::InvalidSize(_)
            | CombinatoricsError::CountOverflow { .. }
            | CombinatoricsError::DifferentSources
            | CombinatoricsError::InvalidRenderConfig(_) => ErrorKind::InvalidArgument,
            CombinatoricsError::PastEnd
            | CombinatoricsError::BeforeBegin
            | CombinatoricsError::OffsetOutOfRange { .. }
            | CombinatoricsError::PositionOutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }
}
