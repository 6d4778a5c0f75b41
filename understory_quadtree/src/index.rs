// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability trait shared by spatial index implementations.

use crate::QuadTree;
use crate::types::Rect;

/// Insert/delete/window-query contract for 2D box indexes.
///
/// Object safe, so different layouts can sit behind `dyn SpatialIndex<P>`.
/// Visitors return `false` to stop early.
pub trait SpatialIndex<P> {
    /// Insert a box with its payload.
    fn insert(&mut self, rect: Rect, payload: P);

    /// Remove one entry with an equal payload. Returns whether one was removed.
    fn delete(&mut self, rect: Rect, payload: &P) -> bool;

    /// Delete then insert, as two independent steps.
    fn replace(&mut self, old_rect: Rect, old_payload: &P, new_rect: Rect, new_payload: P) {
        self.delete(old_rect, old_payload);
        self.insert(new_rect, new_payload);
    }

    /// Visit entries whose box intersects `query`.
    fn search(&self, query: Rect, visit: &mut dyn FnMut(&Rect, &P) -> bool);

    /// Visit every entry.
    fn scan(&self, visit: &mut dyn FnMut(&Rect, &P) -> bool);

    /// Number of stored entries.
    fn len(&self) -> usize;

    /// Whether nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounding box of the stored entries, [`Rect::ZERO`] when empty.
    fn bounds(&self) -> Rect;
}

impl<P: PartialEq> SpatialIndex<P> for QuadTree<P> {
    fn insert(&mut self, rect: Rect, payload: P) {
        Self::insert(self, rect, payload);
    }

    fn delete(&mut self, rect: Rect, payload: &P) -> bool {
        Self::delete(self, rect, payload)
    }

    fn replace(&mut self, old_rect: Rect, old_payload: &P, new_rect: Rect, new_payload: P) {
        Self::replace(self, old_rect, old_payload, new_rect, new_payload);
    }

    fn search(&self, query: Rect, visit: &mut dyn FnMut(&Rect, &P) -> bool) {
        Self::search(self, query, visit);
    }

    fn scan(&self, visit: &mut dyn FnMut(&Rect, &P) -> bool) {
        Self::scan(self, visit);
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn bounds(&self) -> Rect {
        Self::bounds(self)
    }
}
