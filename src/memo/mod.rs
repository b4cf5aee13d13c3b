//! Position-keyed cache cells
//!
//! A [`Memo`] stores one computed value together with the key it was
//! computed for, and recomputes only when asked for a different key.
//! [`Memoized`] pairs a cursor with its own cell, keyed by the cursor's
//! index representation, so repeated dereference at one position
//! materializes the subset once. Cells are owned by the caller; there is
//! no shared cache.

use std::fmt;

use crate::cursor::{BidirectionalCursor, Cursor};
use crate::CombinatoricsError;

/// Single-slot cache: compute once per distinct key.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    slot: Option<(K, V)>,
    computations: u64,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            slot: None,
            computations: 0,
        }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    /// Empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, computing it only if the cell holds another key.
    pub fn get_or_compute<F>(&mut self, key: K, compute: F) -> &V
    where
        F: FnOnce(&K) -> V,
    {
        let hit = matches!(&self.slot, Some((cached, _)) if *cached == key);
        if !hit {
            self.slot = None;
        }
        let (_, value) = self.slot.get_or_insert_with(|| {
            self.computations += 1;
            let value = compute(&key);
            (key, value)
        });
        value
    }

    /// Drop the cached value.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    /// Key of the cached value, if any.
    pub fn cached_key(&self) -> Option<&K> {
        self.slot.as_ref().map(|(key, _)| key)
    }

    /// Number of times a value has been computed.
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

/// Cursor paired with a cache of its materialized view.
///
/// `recompute` maps a view to the cached value; it runs at most once per
/// position between moves. Moving the cursor invalidates the cache.
pub struct Memoized<C: Cursor, V, F> {
    cursor: C,
    cache: Memo<C::Key, Option<V>>,
    recompute: F,
}

impl<C, V, F> Memoized<C, V, F>
where
    C: Cursor,
    F: Fn(&C::View) -> V,
{
    /// Wrap `cursor` with an empty cache.
    pub fn new(cursor: C, recompute: F) -> Self {
        Self {
            cursor,
            cache: Memo::new(),
            recompute,
        }
    }

    /// Materialized value at the current position; `None` at end.
    pub fn get(&mut self) -> Option<&V> {
        let cursor = &self.cursor;
        let recompute = &self.recompute;
        self.cache
            .get_or_compute(cursor.key(), |_| cursor.view().map(|view| recompute(&view)))
            .as_ref()
    }

    /// Advance the cursor and drop the cached value.
    pub fn advance(&mut self) -> Result<(), CombinatoricsError> {
        self.cursor.advance()?;
        self.cache.invalidate();
        Ok(())
    }

    /// The wrapped cursor.
    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    /// Unwrap the cursor, discarding the cache.
    pub fn into_inner(self) -> C {
        self.cursor
    }

    /// Number of times `recompute` has run.
    pub fn computations(&self) -> u64 {
        self.cache.computations()
    }
}

impl<C: Cursor + fmt::Debug, V: fmt::Debug, F> fmt::Debug for Memoized<C, V, F>
where
    C::Key: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("cursor", &self.cursor)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl<C, V, F> Memoized<C, V, F>
where
    C: BidirectionalCursor,
    F: Fn(&C::View) -> V,
{
    /// Retreat the cursor and drop the cached value.
    pub fn retreat(&mut self) -> Result<(), CombinatoricsError> {
        self.cursor.retreat()?;
        self.cache.invalidate();
        Ok(())
    }
}
