// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector backend with linear scans. Small and simple; good for tiny sets.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::index::SpatialIndex;
use crate::node::Entry;
use crate::types::Rect;

/// Flat vector of entries, scanned in full by every query.
pub struct FlatVec<P> {
    entries: Vec<Entry<P>>,
}

impl<P> FlatVec<P> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create an empty index with room for `n` entries.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            entries: Vec::with_capacity(n),
        }
    }

    /// Stored entries, in no particular order.
    pub fn entries(&self) -> &[Entry<P>] {
        &self.entries
    }
}

impl<P> Default for FlatVec<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Debug for FlatVec<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatVec")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<P: PartialEq> SpatialIndex<P> for FlatVec<P> {
    fn insert(&mut self, rect: Rect, payload: P) {
        self.entries.push(Entry::new(rect, payload));
    }

    fn delete(&mut self, _rect: Rect, payload: &P) -> bool {
        match self.entries.iter().position(|e| e.payload == *payload) {
            Some(pos) => {
                self.entries.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    fn search(&self, query: Rect, visit: &mut dyn FnMut(&Rect, &P) -> bool) {
        for e in &self.entries {
            if e.rect.intersects(&query) && !visit(&e.rect, &e.payload) {
                return;
            }
        }
    }

    fn scan(&self, visit: &mut dyn FnMut(&Rect, &P) -> bool) {
        for e in &self.entries {
            if !visit(&e.rect, &e.payload) {
                return;
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn bounds(&self) -> Rect {
        let mut it = self.entries.iter().map(|e| e.rect);
        match it.next() {
            Some(first) => it.fold(first, |acc, r| acc.union(&r)),
            None => Rect::ZERO,
        }
    }
}
