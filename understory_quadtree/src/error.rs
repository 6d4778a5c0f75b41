// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the checked constructors.

use crate::types::{Axis, Rect};

/// Why a rectangle was rejected as a tree domain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A coordinate is NaN or infinite.
    #[error("domain coordinates must be finite")]
    NonFinite,
    /// The minimum exceeds the maximum on `axis`.
    #[error("domain is inverted on the {axis:?} axis")]
    Inverted {
        /// Offending axis.
        axis: Axis,
    },
}

impl DomainError {
    /// Check that `domain` can be split into quadrants.
    pub(crate) fn check(domain: &Rect) -> Result<(), Self> {
        if !domain.min.iter().chain(&domain.max).all(|v| v.is_finite()) {
            return Err(Self::NonFinite);
        }
        for axis in Axis::ALL {
            if domain.min_on(axis) > domain.max_on(axis) {
                return Err(Self::Inverted { axis });
            }
        }
        Ok(())
    }
}
