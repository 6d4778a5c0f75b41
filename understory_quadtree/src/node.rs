// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entries and the recursive quadtree node.
//!
//! A node never stores its own region. Every operation receives the region from
//! its caller and derives child regions with [`Rect::quadrant`].

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::types::{Axis, Rect, choose_quadrant};

/// Capacity of a leaf before it splits.
pub const MAX_ENTRIES: usize = 32;

/// Subtree size under which a split node collapses back into a leaf.
pub const MIN_ENTRIES: usize = MAX_ENTRIES * 40 / 100;

/// Depth (root = 1) at which leaves stop splitting and just accumulate.
pub const MAX_LEVEL: usize = 16;

/// A stored bounding box and its payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry<P> {
    pub(crate) rect: Rect,
    pub(crate) payload: P,
}

impl<P> Entry<P> {
    pub(crate) const fn new(rect: Rect, payload: P) -> Self {
        Self { rect, payload }
    }

    /// Bounding box of the entry.
    pub const fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Payload of the entry.
    pub const fn payload(&self) -> &P {
        &self.payload
    }
}

/// One node of the tree: a leaf, or a split node with exactly four children.
///
/// A split node can still hold entries of its own, namely those whose box does
/// not fit inside a single quadrant.
pub(crate) struct Node<P> {
    /// Entries stored anywhere in this subtree.
    pub(crate) count: usize,
    pub(crate) entries: Vec<Entry<P>>,
    pub(crate) quads: Option<Box<[Self; 4]>>,
}

impl<P> Default for Node<P> {
    fn default() -> Self {
        Self {
            count: 0,
            entries: Vec::new(),
            quads: None,
        }
    }
}

impl<P> Debug for Node<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Node")
            .field("count", &self.count)
            .field("own_entries", &self.entries.len())
            .field("split", &self.quads.is_some())
            .finish_non_exhaustive()
    }
}

impl<P> Node<P> {
    pub(crate) fn insert(&mut self, region: Rect, depth: usize, entry: Entry<P>) {
        if let Some(quads) = self.quads.as_deref_mut() {
            match choose_quadrant(&region, &entry.rect) {
                Some((index, quad)) => quads[index].insert(quad, depth + 1, entry),
                None => self.entries.push(entry),
            }
        } else if depth != MAX_LEVEL && self.entries.len() == MAX_ENTRIES {
            self.split(region, depth);
            // The node is split now, so this takes the branch above.
            self.insert(region, depth, entry);
            return;
        } else {
            self.entries.push(entry);
        }
        self.count += 1;
    }

    /// Turn this leaf into a split node and push its entries down.
    fn split(&mut self, region: Rect, depth: usize) {
        let entries = core::mem::take(&mut self.entries);
        log::trace!(
            "quadtree: splitting node at depth {depth} with {} entries",
            entries.len()
        );
        self.quads = Some(Box::new(core::array::from_fn(|_| Self::default())));
        self.count = 0;
        for entry in entries {
            self.insert(region, depth, entry);
        }
    }

    /// Turn this split node back into a leaf holding every entry of the subtree.
    fn collapse(&mut self) {
        if let Some(quads) = self.quads.take() {
            for quad in *quads {
                quad.drain_into(&mut self.entries);
            }
        }
        log::trace!(
            "quadtree: collapsed node into a leaf of {} entries",
            self.entries.len()
        );
        debug_assert_eq!(
            self.entries.len(),
            self.count,
            "collapse must keep every entry of the subtree"
        );
    }

    fn drain_into(self, out: &mut Vec<Entry<P>>) {
        out.extend(self.entries);
        if let Some(quads) = self.quads {
            for quad in *quads {
                quad.drain_into(out);
            }
        }
    }

    /// Remove the first entry whose payload equals `payload`.
    ///
    /// Only this node's own entries and the single quadrant chosen for `rect`
    /// are examined. Returns whether an entry was removed.
    pub(crate) fn delete(&mut self, region: Rect, rect: &Rect, payload: &P) -> bool
    where
        P: PartialEq,
    {
        if let Some(pos) = self.entries.iter().position(|e| e.payload == *payload) {
            self.entries.swap_remove(pos);
            self.count -= 1;
            return true;
        }
        let Some(quads) = self.quads.as_deref_mut() else {
            return false;
        };
        let Some((index, quad)) = choose_quadrant(&region, rect) else {
            return false;
        };
        if !quads[index].delete(quad, rect, payload) {
            return false;
        }
        self.count -= 1;
        if self.count < MIN_ENTRIES {
            self.collapse();
        }
        true
    }

    /// Visit entries intersecting `query`. Returns `false` once `visit` asked to stop.
    pub(crate) fn search<F>(&self, region: Rect, query: &Rect, visit: &mut F) -> bool
    where
        F: FnMut(&Rect, &P) -> bool + ?Sized,
    {
        for e in &self.entries {
            if e.rect.intersects(query) && !visit(&e.rect, &e.payload) {
                return false;
            }
        }
        if let Some(quads) = self.quads.as_deref() {
            for (index, child) in quads.iter().enumerate() {
                if child.count == 0 {
                    continue;
                }
                let quad = region.quadrant(index);
                if quad.intersects(query) && !child.search(quad, query, visit) {
                    return false;
                }
            }
        }
        true
    }

    /// Visit every entry, own entries first, then quadrants 0 through 3.
    pub(crate) fn scan<F>(&self, visit: &mut F) -> bool
    where
        F: FnMut(&Rect, &P) -> bool + ?Sized,
    {
        for e in &self.entries {
            if !visit(&e.rect, &e.payload) {
                return false;
            }
        }
        if let Some(quads) = self.quads.as_deref() {
            for child in quads {
                if !child.scan(visit) {
                    return false;
                }
            }
        }
        true
    }

    /// Smallest `min` coordinate on `axis`, folded into `best`.
    ///
    /// Descends only into quadrants 0 and 2, and only for [`Axis::X`]. Entries
    /// held below quadrants 1 and 3, or below this node on the y axis, are not
    /// considered.
    pub(crate) fn min_on(&self, region: Rect, axis: Axis, mut best: Option<f64>) -> Option<f64> {
        for e in &self.entries {
            let v = e.rect.min_on(axis);
            if best.is_none_or(|b| v < b) {
                best = Some(v);
            }
        }
        let Some(quads) = self.quads.as_deref() else {
            return best;
        };
        if best.is_some_and(|b| b < region.min_on(axis)) {
            return best;
        }
        if axis == Axis::X {
            for index in [0, 2] {
                best = quads[index].min_on(region.quadrant(index), axis, best);
            }
        }
        best
    }

    /// Largest `max` coordinate on `axis`, folded into `best`.
    ///
    /// Mirrors [`Node::min_on`], including its descent through quadrants 0 and 2
    /// on the x axis only.
    pub(crate) fn max_on(&self, region: Rect, axis: Axis, mut best: Option<f64>) -> Option<f64> {
        for e in &self.entries {
            let v = e.rect.max_on(axis);
            if best.is_none_or(|b| v > b) {
                best = Some(v);
            }
        }
        let Some(quads) = self.quads.as_deref() else {
            return best;
        };
        if best.is_some_and(|b| b > region.max_on(axis)) {
            return best;
        }
        if axis == Axis::X {
            for index in [0, 2] {
                best = quads[index].max_on(region.quadrant(index), axis, best);
            }
        }
        best
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        1 + self
            .quads
            .as_deref()
            .map(|quads| quads.iter().map(Self::depth).max().unwrap_or(0))
            .unwrap_or(0)
    }

    /// Recompute every cached count and compare it with the stored one.
    #[cfg(test)]
    pub(crate) fn check_counts(&self) -> usize {
        let below: usize = self
            .quads
            .as_deref()
            .map(|quads| quads.iter().map(Self::check_counts).sum())
            .unwrap_or(0);
        let total = self.entries.len() + below;
        assert_eq!(self.count, total, "cached count out of sync");
        total
    }
}
