// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alternative [`SpatialIndex`](crate::SpatialIndex) implementations.
//!
//! - `flatvec`: flat vector with linear scans. No structure to maintain, exact
//!   bounds; the reference the quadtree is checked against.

pub mod flatvec;

pub use flatvec::FlatVec;
