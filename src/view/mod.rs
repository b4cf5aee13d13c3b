//! Lazy projections of a selection onto its source collection
//!
//! A [`SubsetView`] pairs a borrowed source slice with an owned copy of
//! the index representation. Nothing is materialized until iterated, and
//! iteration can be repeated any number of times.

mod render;
mod selection;

pub use render::RenderConfig;
pub use selection::{MaskBits, MaskSelection, Selection, TupleSelection};

use std::fmt;
use std::iter::FusedIterator;

use bitvec::prelude::*;

use crate::powerset::{Mask, MASK_BITS};

/// Whether two slices are the same source collection (address and length).
pub(crate) fn same_source<T>(a: &[T], b: &[T]) -> bool {
    std::ptr::eq(a, b)
}

/// Read-only view of the selected elements, in source order.
///
/// Equality is structural: two views are equal iff they borrow the same
/// source collection and carry equal selections. Compare
/// [`iter`](Self::iter) outputs for element-wise equality.
pub struct SubsetView<'a, T, S> {
    source: &'a [T],
    selection: S,
}

impl<'a, T, S: Selection> SubsetView<'a, T, S> {
    pub(crate) fn new(source: &'a [T], selection: S) -> Self {
        Self { source, selection }
    }

    /// Number of selected elements.
    pub fn len(&self) -> usize {
        self.selection.count()
    }

    /// Whether this is the empty subset.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Selected elements in source order.
    pub fn iter(&self) -> Elements<'a, T, S::Indices<'_>> {
        Elements {
            source: self.source,
            indices: self.selection.indices(),
        }
    }

    /// The `position`-th selected element.
    pub fn get(&self, position: usize) -> Option<&'a T> {
        self.selection
            .indices()
            .nth(position)
            .and_then(|index| self.source.get(index))
    }

    /// Whether source position `index` is selected.
    pub fn contains_index(&self, index: usize) -> bool {
        self.selection.contains(index)
    }

    /// Selected source positions in increasing order.
    pub fn indices(&self) -> S::Indices<'_> {
        self.selection.indices()
    }

    /// The copied index representation.
    pub fn selection(&self) -> &S {
        &self.selection
    }

    /// The borrowed source collection.
    pub fn source(&self) -> &'a [T] {
        self.source
    }

    /// Clone the selected elements into a vector.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Encode the selection as a power-set mask.
    ///
    /// `None` when a selected position does not fit in a [`Mask`].
    pub fn to_mask(&self) -> Option<Mask> {
        self.indices().try_fold(0, |mask: Mask, index| {
            (index < MASK_BITS).then(|| mask | (1 << index))
        })
    }

    /// Membership bitmap with one bit per source element.
    pub fn membership(&self) -> BitVec {
        let mut bits = bitvec![0; self.source.len()];
        for index in self.indices() {
            bits.set(index, true);
        }
        bits
    }

    /// Render the selected elements as text.
    pub fn render(&self, config: &RenderConfig) -> String
    where
        T: fmt::Display,
    {
        config.render(self.iter())
    }
}

impl<T, S: Clone> Clone for SubsetView<'_, T, S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            selection: self.selection.clone(),
        }
    }
}

impl<T, S: PartialEq> PartialEq for SubsetView<'_, T, S> {
    fn eq(&self, other: &Self) -> bool {
        same_source(self.source, other.source) && self.selection == other.selection
    }
}

impl<T, S: Eq> Eq for SubsetView<'_, T, S> {}

impl<T: fmt::Debug, S: Selection> fmt::Debug for SubsetView<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'v, 'a, T, S> IntoIterator for &'v SubsetView<'a, T, S>
where
    S: Selection + 'v,
{
    type Item = &'a T;
    type IntoIter = Elements<'a, T, S::Indices<'v>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements selected by a [`SubsetView`].
#[derive(Debug, Clone)]
pub struct Elements<'a, T, I> {
    source: &'a [T],
    indices: I,
}

impl<'a, T, I: Iterator<Item = usize>> Iterator for Elements<'a, T, I> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let index = self.indices.next()?;
        self.source.get(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<'a, T, I: ExactSizeIterator<Item = usize>> ExactSizeIterator for Elements<'a, T, I> {}

impl<'a, T, I: FusedIterator<Item = usize>> FusedIterator for Elements<'a, T, I> {}
