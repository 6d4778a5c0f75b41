// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.
//!
//! Rectangles are closed on every side: boxes that only touch along an edge or
//! a corner still intersect, and a box lying on a region boundary is contained
//! by that region.

/// A 2D point as `[x, y]`.
pub type Point = [f64; 2];

/// One of the two coordinate axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The first coordinate (longitude, for geographic data).
    X,
    /// The second coordinate (latitude, for geographic data).
    Y,
}

impl Axis {
    /// Both axes, in index order.
    pub const ALL: [Self; 2] = [Self::X, Self::Y];

    /// Index of this axis into a [`Point`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }
}

/// Axis-aligned rectangle given by its min and max corners.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    /// Lower corner.
    pub min: Point,
    /// Upper corner.
    pub max: Point,
}

/// Default domain used when a tree is first written without one: the whole
/// longitude/latitude plane.
pub const WORLD: Rect = Rect::new(-180.0, -90.0, 180.0, 90.0);

impl Rect {
    /// The all-zero rectangle, returned by bounds queries on empty structures.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new rectangle from min/max coordinates.
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min: [min_x, min_y],
            max: [max_x, max_y],
        }
    }

    /// Create a rectangle from its two corners.
    pub const fn from_corners(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Create a degenerate rectangle covering a single point.
    pub const fn from_point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    /// Lower bound on `axis`.
    #[inline]
    pub const fn min_on(&self, axis: Axis) -> f64 {
        self.min[axis.index()]
    }

    /// Upper bound on `axis`.
    #[inline]
    pub const fn max_on(&self, axis: Axis) -> f64 {
        self.max[axis.index()]
    }

    /// Whether the two rectangles overlap. Touching boundaries count.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(other.min[0] > self.max[0]
            || other.max[0] < self.min[0]
            || other.min[1] > self.max[1]
            || other.max[1] < self.min[1])
    }

    /// Whether `inner` lies entirely within this rectangle, bounds inclusive.
    #[inline]
    pub fn contains(&self, inner: &Self) -> bool {
        inner.min[0] >= self.min[0]
            && inner.max[0] <= self.max[0]
            && inner.min[1] >= self.min[1]
            && inner.max[1] <= self.max[1]
    }

    /// Midpoint of the rectangle, the shared corner of its four quadrants.
    #[inline]
    pub fn center(&self) -> Point {
        [
            (self.max[0] + self.min[0]) / 2.0,
            (self.max[1] + self.min[1]) / 2.0,
        ]
    }

    /// Quadrant `index` of this rectangle.
    ///
    /// - `0`: low x, low y
    /// - `1`: high x, low y
    /// - `2`: low x, high y
    /// - `3`: high x, high y
    ///
    /// Regions are never stored in the tree, so this is recomputed on every
    /// descent; it always derives the split from the same midpoint expression.
    ///
    /// # Panics
    ///
    /// Panics if `index > 3`.
    pub fn quadrant(&self, index: usize) -> Self {
        let [cx, cy] = self.center();
        match index {
            0 => Self::new(self.min[0], self.min[1], cx, cy),
            1 => Self::new(cx, self.min[1], self.max[0], cy),
            2 => Self::new(self.min[0], cy, cx, self.max[1]),
            3 => Self::new(cx, cy, self.max[0], self.max[1]),
            _ => panic!("quadrant index out of range: {index}"),
        }
    }

    /// All four quadrants, in index order.
    pub fn quadrants(&self) -> [Self; 4] {
        [
            self.quadrant(0),
            self.quadrant(1),
            self.quadrant(2),
            self.quadrant(3),
        ]
    }

    /// Smallest rectangle enclosing both inputs.
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            self.min[0].min(other.min[0]),
            self.min[1].min(other.min[1]),
            self.max[0].max(other.max[0]),
            self.max[1].max(other.max[1]),
        )
    }
}

/// First quadrant of `region` (in index order) that fully contains `rect`.
///
/// Returns the quadrant index together with its rectangle, or `None` when
/// `rect` straddles a split line and therefore belongs to `region` itself.
pub fn choose_quadrant(region: &Rect, rect: &Rect) -> Option<(usize, Rect)> {
    (0..4).find_map(|index| {
        let quad = region.quadrant(index);
        quad.contains(rect).then_some((index, quad))
    })
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Rect> for Rect {
    fn from(r: kurbo::Rect) -> Self {
        Self::new(r.x0.min(r.x1), r.y0.min(r.y1), r.x0.max(r.x1), r.y0.max(r.y1))
    }
}

#[cfg(feature = "kurbo")]
impl From<Rect> for kurbo::Rect {
    fn from(r: Rect) -> Self {
        Self::new(r.min[0], r.min[1], r.max[0], r.max[1])
    }
}
