// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a region quadtree over axis-aligned boxes.
//!
//! - Insert boxes with opaque payloads, delete them by payload, and replace them.
//! - Query every box intersecting a rectangle, or scan all of them, with early stop.
//! - Walk the live node structure read-only, for visualization and debugging.
//!
//! The tree covers a fixed domain rectangle. Each node holds up to
//! [`MAX_ENTRIES`] boxes before it splits into four equal quadrants; boxes that
//! straddle a split line stay with the node that split. Nodes stop splitting at
//! depth [`MAX_LEVEL`], and a split node whose subtree shrinks below
//! [`MIN_ENTRIES`] is collapsed back into a leaf.
//!
//! Rectangles are closed: touching edges intersect.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{QuadTree, Rect};
//!
//! let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
//! tree.insert(Rect::new(10.0, 10.0, 20.0, 20.0), "a");
//! tree.insert(Rect::new(60.0, 60.0, 70.0, 70.0), "b");
//!
//! let mut hits = Vec::new();
//! tree.search(Rect::new(0.0, 0.0, 20.0, 20.0), |_, p| {
//!     hits.push(*p);
//!     true
//! });
//! assert_eq!(hits, ["a"]);
//!
//! assert!(tree.delete(Rect::new(10.0, 10.0, 20.0, 20.0), &"a"));
//! assert_eq!(tree.len(), 1);
//! ```
//!
//! A tree created with [`QuadTree::new_uninit`] (or [`Default`]) picks up the
//! [`WORLD`] domain, the longitude/latitude plane, on its first insert.
//!
//! [`SpatialIndex`] abstracts over the tree and the [`FlatVec`] reference
//! backend, so both can be driven by the same code.
//!
//! ## Features
//!
//! - `kurbo`: conversions between [`Rect`] and `kurbo::Rect`.
//! - `std` / `libm`: forwarded to `kurbo`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod backends;
pub mod error;
pub mod index;
pub mod node;
pub mod tree;
pub mod types;
pub mod view;

pub use backends::FlatVec;
pub use error::DomainError;
pub use index::SpatialIndex;
pub use node::{Entry, MAX_ENTRIES, MAX_LEVEL, MIN_ENTRIES};
pub use tree::QuadTree;
pub use types::{Axis, Point, Rect, WORLD, choose_quadrant};
pub use view::{Child, NodeView};
