// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The public [`QuadTree`] root.

use core::fmt::Debug;

use crate::error::DomainError;
use crate::node::{Entry, Node};
use crate::types::{Axis, Rect, WORLD};
use crate::view::NodeView;

/// Region quadtree over axis-aligned boxes with opaque payloads.
///
/// The tree covers a fixed domain rectangle chosen at construction. Boxes
/// outside the domain are still accepted; they are kept at the root.
///
/// Payloads identify entries for [`QuadTree::delete`]: the first stored entry
/// with an equal payload on the descent path is removed, whatever its box.
pub struct QuadTree<P> {
    domain: Option<Rect>,
    pub(crate) root: Node<P>,
}

impl<P> Default for QuadTree<P> {
    fn default() -> Self {
        Self::new_uninit()
    }
}

impl<P> Debug for QuadTree<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("domain", &self.domain)
            .field("len", &self.root.count)
            .field("root", &self.root)
            .finish()
    }
}

impl<P> QuadTree<P> {
    /// Create an empty tree over `domain`. The domain is not validated.
    pub fn new(domain: Rect) -> Self {
        Self {
            domain: Some(domain),
            root: Node::default(),
        }
    }

    /// Create an empty tree over `domain`, rejecting non-finite or inverted bounds.
    pub fn try_new(domain: Rect) -> Result<Self, DomainError> {
        DomainError::check(&domain)?;
        Ok(Self::new(domain))
    }

    /// Create a tree without a domain.
    ///
    /// The first [`insert`](Self::insert) sets the domain to [`WORLD`].
    /// Until then every query sees an empty tree.
    pub fn new_uninit() -> Self {
        Self {
            domain: None,
            root: Node::default(),
        }
    }

    /// The domain rectangle, or `None` if the tree was never initialized.
    pub fn domain(&self) -> Option<Rect> {
        self.domain
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.root.count
    }

    /// Whether the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.root.count == 0
    }

    /// Insert a box with its payload.
    pub fn insert(&mut self, rect: Rect, payload: P) {
        let domain = *self.domain.get_or_insert_with(|| {
            log::debug!("quadtree: no domain configured, using {:?}", WORLD);
            WORLD
        });
        self.root.insert(domain, 1, Entry::new(rect, payload));
    }

    /// Remove one entry whose payload equals `payload`.
    ///
    /// `rect` must be the box the entry was inserted with; it selects the path
    /// searched. Returns whether an entry was removed. Missing entries are not
    /// an error.
    pub fn delete(&mut self, rect: Rect, payload: &P) -> bool
    where
        P: PartialEq,
    {
        match self.domain {
            Some(domain) => self.root.delete(domain, &rect, payload),
            None => false,
        }
    }

    /// Delete the old entry, then insert the new one.
    ///
    /// These are two independent steps: the insert happens even if nothing was
    /// deleted.
    pub fn replace(&mut self, old_rect: Rect, old_payload: &P, new_rect: Rect, new_payload: P)
    where
        P: PartialEq,
    {
        self.delete(old_rect, old_payload);
        self.insert(new_rect, new_payload);
    }

    /// Call `visit` for every entry whose box intersects `query`.
    ///
    /// Boundary contact counts as intersection. Returning `false` from `visit`
    /// stops the search immediately.
    pub fn search<F>(&self, query: Rect, mut visit: F)
    where
        F: FnMut(&Rect, &P) -> bool,
    {
        if let Some(domain) = self.domain {
            self.root.search(domain, &query, &mut visit);
        }
    }

    /// Call `visit` for every entry, until it returns `false`.
    pub fn scan<F>(&self, mut visit: F)
    where
        F: FnMut(&Rect, &P) -> bool,
    {
        self.root.scan(&mut visit);
    }

    /// Bounding box of the stored entries, or [`Rect::ZERO`] when empty.
    ///
    /// Each side is aggregated separately. Below the root the aggregation only
    /// follows quadrants 0 and 2, and only on the x axis, so once the root has
    /// split the result covers the entries held at the root plus, on x, the
    /// low-x quadrants. It is exact while the root is still a leaf.
    pub fn bounds(&self) -> Rect {
        let Some(domain) = self.domain else {
            return Rect::ZERO;
        };
        let min_x = self.root.min_on(domain, Axis::X, None);
        let min_y = self.root.min_on(domain, Axis::Y, None);
        let max_x = self.root.max_on(domain, Axis::X, None);
        let max_y = self.root.max_on(domain, Axis::Y, None);
        Rect::new(
            min_x.unwrap_or(0.0),
            min_y.unwrap_or(0.0),
            max_x.unwrap_or(0.0),
            max_y.unwrap_or(0.0),
        )
    }

    /// Remove all entries. The domain is kept.
    pub fn clear(&mut self) {
        self.root = Node::default();
    }

    /// Read-only view of the root node, for walking the structure.
    ///
    /// `None` when the tree is empty. See [`NodeView`].
    pub fn root(&self) -> Option<NodeView<'_, P>> {
        let domain = self.domain?;
        (self.root.count > 0).then(|| NodeView::new(domain, &self.root))
    }
}
