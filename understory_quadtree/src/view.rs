// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only navigation over the live node structure.
//!
//! Intended for visualizers and debugging tools that want to draw the tree.
//! Views borrow the tree, so they always reflect its current state and the
//! borrow checker rules out mutation while a walk is in progress.
//!
//! Starting from [`QuadTree::root`](crate::QuadTree::root):
//!
//! - a leaf lists its entries as [`Child::Item`]s;
//! - a split node lists a [`Child::Group`] for the entries it holds itself
//!   (only when there are any), followed by each non-empty quadrant as a
//!   [`Child::Node`], in quadrant order;
//! - a group lists its entries as items.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::node::{Entry, Node};
use crate::types::Rect;

/// Borrowed handle to one node together with the region it covers.
pub struct NodeView<'a, P> {
    region: Rect,
    node: &'a Node<P>,
}

impl<P> Clone for NodeView<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for NodeView<'_, P> {}

impl<P> Debug for NodeView<'_, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeView")
            .field("region", &self.region)
            .field("node", self.node)
            .finish()
    }
}

impl<'a, P> NodeView<'a, P> {
    pub(crate) const fn new(region: Rect, node: &'a Node<P>) -> Self {
        Self { region, node }
    }

    /// Region covered by this node.
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Number of entries in this subtree.
    pub fn len(&self) -> usize {
        self.node.count
    }

    /// Whether the subtree is empty.
    pub fn is_empty(&self) -> bool {
        self.node.count == 0
    }

    /// Whether this node has no quadrants.
    pub fn is_leaf(&self) -> bool {
        self.node.quads.is_none()
    }

    /// Entries held directly by this node.
    pub fn entries(&self) -> &'a [Entry<P>] {
        &self.node.entries
    }

    /// Fill `out` with the children of this node, replacing its contents.
    pub fn children(&self, out: &mut Vec<Child<'a, P>>) {
        out.clear();
        let node = self.node;
        let Some(quads) = node.quads.as_deref() else {
            out.extend(node.entries.iter().map(Child::Item));
            return;
        };
        if !node.entries.is_empty() {
            out.push(Child::Group {
                region: self.region,
                entries: &node.entries,
            });
        }
        for (index, quad) in quads.iter().enumerate() {
            if quad.count > 0 {
                out.push(Child::Node(Self::new(self.region.quadrant(index), quad)));
            }
        }
    }
}

/// One element in a [`NodeView::children`] listing.
pub enum Child<'a, P> {
    /// A stored entry.
    Item(&'a Entry<P>),
    /// The entries a split node holds itself, covering that node's region.
    Group {
        /// Region of the owning node.
        region: Rect,
        /// The entries.
        entries: &'a [Entry<P>],
    },
    /// A non-empty quadrant.
    Node(NodeView<'a, P>),
}

impl<P> Clone for Child<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Child<'_, P> {}

impl<P: Debug> Debug for Child<'_, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Item(e) => f.debug_tuple("Item").field(e).finish(),
            Self::Group { region, entries } => f
                .debug_struct("Group")
                .field("region", region)
                .field("entries", &entries.len())
                .finish(),
            Self::Node(view) => f.debug_tuple("Node").field(view).finish(),
        }
    }
}

impl<'a, P> Child<'a, P> {
    /// Bounding rectangle: the entry box for items, the region otherwise.
    pub fn rect(&self) -> Rect {
        match self {
            Self::Item(e) => e.rect,
            Self::Group { region, .. } => *region,
            Self::Node(view) => view.region,
        }
    }

    /// Whether this is a stored entry rather than a container.
    pub fn is_item(&self) -> bool {
        matches!(self, Self::Item(_))
    }

    /// Fill `out` with the children of this element, replacing its contents.
    ///
    /// Items have no children.
    pub fn children(&self, out: &mut Vec<Self>) {
        match self {
            Self::Item(_) => out.clear(),
            Self::Group { entries, .. } => {
                out.clear();
                out.extend(entries.iter().map(Self::Item));
            }
            Self::Node(view) => view.children(out),
        }
    }
}
