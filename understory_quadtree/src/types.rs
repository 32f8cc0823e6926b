// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Square bounding boxes and quadrant naming.

use kurbo::{Point, Rect};

use crate::error::Error;

/// One of the four children of a subdivided node.
///
/// Names assume y grows upward: the north quadrants have the larger y. With
/// y-down screen coordinates the north quadrants are the ones drawn lower, but
/// the structure of the tree is unaffected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Smaller x, larger y.
    NorthWest,
    /// Larger x, larger y.
    NorthEast,
    /// Smaller x, smaller y.
    SouthWest,
    /// Larger x, smaller y.
    SouthEast,
}

impl Quadrant {
    /// All quadrants in traversal order.
    ///
    /// Insertion, redistribution on subdivision, and range queries all visit
    /// children in this order. A point lying on an edge shared by two children
    /// is stored in whichever comes first.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Position of this quadrant in [`Quadrant::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::NorthWest => 0,
            Self::NorthEast => 1,
            Self::SouthWest => 2,
            Self::SouthEast => 3,
        }
    }

    /// The quadrant of a box centered at `center` that stores `p`.
    ///
    /// Points on the dividing lines go to the first candidate in [`Quadrant::ALL`]
    /// order: west wins over east, north over south.
    #[inline]
    pub fn of_point(center: Point, p: Point) -> Self {
        match (p.x <= center.x, p.y >= center.y) {
            (true, true) => Self::NorthWest,
            (false, true) => Self::NorthEast,
            (true, false) => Self::SouthWest,
            (false, false) => Self::SouthEast,
        }
    }

    /// Sign of the center offset along x and y.
    const fn signs(self) -> (f64, f64) {
        match self {
            Self::NorthWest => (-1.0, 1.0),
            Self::NorthEast => (1.0, 1.0),
            Self::SouthWest => (-1.0, -1.0),
            Self::SouthEast => (1.0, -1.0),
        }
    }
}

/// Axis-aligned square given by its center and half-dimension.
///
/// The box covers `[center.x - h, center.x + h] × [center.y - h, center.y + h]`,
/// boundary included. Edges are computed once and stored, so boxes produced by
/// [`BoundingBox::quadrant`] share their outer edges bit-for-bit with the parent
/// and their inner edges with the parent's center.
///
/// ```rust
/// use understory_quadtree::{BoundingBox, Point};
///
/// let bb = BoundingBox::new(Point::new(0.0, 0.0), 5.0).unwrap();
/// assert!(bb.contains_point(Point::new(5.0, -5.0)));
/// assert!(!bb.contains_point(Point::new(5.5, 0.0)));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    center: Point,
    half_dimension: f64,
    edges: Rect,
}

impl BoundingBox {
    /// Create a box from its center and half-dimension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHalfDimension`] if `half_dimension` is not finite and
    /// strictly positive, and [`Error::NonFiniteCenter`] if either center coordinate
    /// is NaN or infinite.
    pub fn new(center: Point, half_dimension: f64) -> Result<Self, Error> {
        if !half_dimension.is_finite() || half_dimension <= 0.0 {
            return Err(Error::InvalidHalfDimension(half_dimension));
        }
        if !center.is_finite() {
            return Err(Error::NonFiniteCenter);
        }
        Ok(Self {
            center,
            half_dimension,
            edges: Rect::new(
                center.x - half_dimension,
                center.y - half_dimension,
                center.x + half_dimension,
                center.y + half_dimension,
            ),
        })
    }

    /// The center of the box.
    #[inline]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Distance from the center to each edge.
    #[inline]
    pub const fn half_dimension(&self) -> f64 {
        self.half_dimension
    }

    /// Minimum x (left edge).
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.edges.x0
    }

    /// Minimum y.
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.edges.y0
    }

    /// Maximum x (right edge).
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.edges.x1
    }

    /// Maximum y.
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.edges.y1
    }

    /// The box as a kurbo rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.edges
    }

    /// Whether the point lies inside the box or on its boundary.
    ///
    /// NaN coordinates are never contained.
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        self.min_x() <= p.x
            && p.x <= self.max_x()
            && self.min_y() <= p.y
            && p.y <= self.max_y()
    }

    /// Whether this box overlaps `other`.
    ///
    /// Boxes that only share an edge or a corner are considered to intersect.
    /// The test is symmetric.
    ///
    /// ```rust
    /// use understory_quadtree::{BoundingBox, Point};
    ///
    /// let a = BoundingBox::new(Point::new(0.0, 0.0), 5.0).unwrap();
    /// let touching = BoundingBox::new(Point::new(10.0, 10.0), 5.0).unwrap();
    /// let apart = BoundingBox::new(Point::new(11.0, 11.0), 5.0).unwrap();
    /// assert!(a.intersects(&touching));
    /// assert!(!a.intersects(&apart));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x() <= other.max_x()
            && other.min_x() <= self.max_x()
            && self.min_y() <= other.max_y()
            && other.min_y() <= self.max_y()
    }

    /// The child box covering `quadrant`, with half the half-dimension.
    ///
    /// The four quadrant boxes tile this box exactly, overlapping only on shared
    /// edges: outer edges are copied from this box and inner edges are this box's
    /// center. Only the child's reported center may differ from the midpoint of its
    /// edges by rounding.
    pub fn quadrant(&self, quadrant: Quadrant) -> Self {
        let half = self.half_dimension * 0.5;
        let (sx, sy) = quadrant.signs();
        let Rect { x0, y0, x1, y1 } = self.edges;
        let Point { x: cx, y: cy } = self.center;
        let edges = match quadrant {
            Quadrant::NorthWest => Rect::new(x0, cy, cx, y1),
            Quadrant::NorthEast => Rect::new(cx, cy, x1, y1),
            Quadrant::SouthWest => Rect::new(x0, y0, cx, cy),
            Quadrant::SouthEast => Rect::new(cx, y0, x1, cy),
        };
        Self {
            center: Point::new(cx + sx * half, cy + sy * half),
            half_dimension: half,
            edges,
        }
    }
}

impl From<BoundingBox> for Rect {
    fn from(bb: BoundingBox) -> Self {
        bb.rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bb(x: f64, y: f64, h: f64) -> BoundingBox {
        BoundingBox::new(Point::new(x, y), h).unwrap()
    }

    #[test]
    fn contains_every_lattice_point_inclusive() {
        let b = bb(0.0, 0.0, 5.0);
        for i in -5..=5 {
            for j in -5..=5 {
                let p = Point::new(f64::from(i), f64::from(j));
                assert!(b.contains_point(p), "{p:?} should be inside");
            }
        }
    }

    #[test]
    fn corners_in_and_just_beyond_out() {
        let b = bb(1.5, -2.0, 0.75);
        let eps = 1e-9;
        for (sx, sy) in [(-1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)] {
            let corner = Point::new(1.5 + sx * 0.75, -2.0 + sy * 0.75);
            assert!(b.contains_point(corner), "corner {corner:?} is inclusive");
            assert!(
                !b.contains_point(Point::new(corner.x + sx * eps, corner.y)),
                "x beyond {corner:?}"
            );
            assert!(
                !b.contains_point(Point::new(corner.x, corner.y + sy * eps)),
                "y beyond {corner:?}"
            );
        }
    }

    #[test]
    fn rejects_points_outside_each_quadrant() {
        let b = bb(0.0, 0.0, 5.0);
        for p in [
            Point::new(6.0, 6.0),
            Point::new(100.0, 1000.0),
            Point::new(-6.0, 0.0),
            Point::new(-6.0, 1000.0),
            Point::new(-6.0, -6.0),
            Point::new(-6.0, -1000.0),
            Point::new(6.0, -6.0),
            Point::new(6.0, -1000.0),
            Point::new(f64::NAN, 0.0),
        ] {
            assert!(!b.contains_point(p), "{p:?} should be outside");
        }
    }

    #[test]
    fn intersects_shifted_copies_and_not_distant_ones() {
        let b = bb(0.0, 0.0, 5.0);
        for i in -5..=5 {
            for j in -5..=5 {
                let other = bb(f64::from(i), f64::from(j), 5.0);
                assert!(b.intersects(&other), "{other:?} overlaps");
            }
        }
        for (x, y) in [(11.0, 11.0), (-11.0, 11.0), (-11.0, -11.0), (11.0, -11.0)] {
            assert!(!b.intersects(&bb(x, y, 5.0)), "({x}, {y}) is disjoint");
        }
    }

    #[test]
    fn intersection_is_symmetric() {
        let boxes = [
            bb(0.0, 0.0, 5.0),
            bb(10.0, 0.0, 5.0),
            bb(3.0, 3.0, 0.5),
            bb(-7.0, 2.0, 1.0),
            bb(0.0, 0.0, 100.0),
            bb(10.25, 10.0, 5.0),
        ];
        for a in &boxes {
            for b in &boxes {
                assert_eq!(a.intersects(b), b.intersects(a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn contained_box_intersects() {
        let outer = bb(0.0, 0.0, 10.0);
        let inner = bb(1.0, 1.0, 0.5);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let c = Point::new(0.0, 0.0);
        assert_eq!(
            BoundingBox::new(c, 0.0),
            Err(Error::InvalidHalfDimension(0.0))
        );
        assert_eq!(
            BoundingBox::new(c, -1.0),
            Err(Error::InvalidHalfDimension(-1.0))
        );
        assert!(matches!(
            BoundingBox::new(c, f64::NAN),
            Err(Error::InvalidHalfDimension(_))
        ));
        assert!(matches!(
            BoundingBox::new(c, f64::INFINITY),
            Err(Error::InvalidHalfDimension(_))
        ));
        assert_eq!(
            BoundingBox::new(Point::new(f64::NAN, 0.0), 1.0),
            Err(Error::NonFiniteCenter)
        );
    }

    #[test]
    fn quadrants_tile_the_parent() {
        let parent = bb(0.0, 0.0, 5.0);
        let expected = [
            (Quadrant::NorthWest, -2.5, 2.5),
            (Quadrant::NorthEast, 2.5, 2.5),
            (Quadrant::SouthWest, -2.5, -2.5),
            (Quadrant::SouthEast, 2.5, -2.5),
        ];
        for (q, x, y) in expected {
            let child = parent.quadrant(q);
            assert_eq!(child, bb(x, y, 2.5), "{q:?}");
            assert_eq!(Quadrant::ALL[q.index()], q);
        }
    }

    #[test]
    fn quadrants_share_edges_with_a_non_dyadic_parent() {
        let parent = bb(-73.127_151_177_519_75, 0.3, 42.371_839_413_124_7);
        let c = parent.center();
        for q in Quadrant::ALL {
            let child = parent.quadrant(q);
            let (west, south) = match q {
                Quadrant::NorthWest => (true, false),
                Quadrant::NorthEast => (false, false),
                Quadrant::SouthWest => (true, true),
                Quadrant::SouthEast => (false, true),
            };
            let (x0, x1) = if west {
                (parent.min_x(), c.x)
            } else {
                (c.x, parent.max_x())
            };
            let (y0, y1) = if south {
                (parent.min_y(), c.y)
            } else {
                (c.y, parent.max_y())
            };
            assert_eq!(child.rect(), Rect::new(x0, y0, x1, y1), "{q:?}");
            assert_eq!(child.half_dimension(), parent.half_dimension() * 0.5);
        }
        for corner in [
            Point::new(parent.min_x(), parent.min_y()),
            Point::new(parent.min_x(), parent.max_y()),
            Point::new(parent.max_x(), parent.min_y()),
            Point::new(parent.max_x(), parent.max_y()),
            Point::new(parent.max_x(), c.y),
            Point::new(c.x, parent.min_y()),
        ] {
            let q = Quadrant::of_point(c, corner);
            assert!(parent.quadrant(q).contains_point(corner), "{corner:?} in {q:?}");
        }
    }

    #[test]
    fn of_point_breaks_ties_in_traversal_order() {
        let c = Point::new(0.0, 0.0);
        assert_eq!(Quadrant::of_point(c, c), Quadrant::NorthWest);
        assert_eq!(Quadrant::of_point(c, Point::new(0.0, -1.0)), Quadrant::SouthWest);
        assert_eq!(Quadrant::of_point(c, Point::new(1.0, 0.0)), Quadrant::NorthEast);
        assert_eq!(Quadrant::of_point(c, Point::new(1.0, -1.0)), Quadrant::SouthEast);
        assert_eq!(Quadrant::of_point(c, Point::new(-1.0, 1.0)), Quadrant::NorthWest);
    }

    #[test]
    fn rect_matches_extents() {
        let b = bb(1.0, 2.0, 0.5);
        assert_eq!(b.rect(), Rect::new(0.5, 1.5, 1.5, 2.5));
        assert_eq!(Rect::from(b), b.rect());
    }
}
