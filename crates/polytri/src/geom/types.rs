//! Basic 2D types and the pipeline configuration.
//!
//! - `Point`: plain `Vector2<f64>`; equality is exact coordinate match.
//! - `Polygon`: cyclic vertex list (last vertex connects back to the first).
//! - `Triangle`: the sole output unit of the pipeline.
//! - `TriangulateCfg`: duplicate-vertex tolerance and containment strictness.
//!
//! Code cross-refs: `predicates::{orientation, signed_area, point_in_polygon}`

use nalgebra::Vector2;

use super::predicates::{
    orientation, point_in_polygon, point_on_segment, rightmost_index, signed_area,
};

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Pipeline configuration (tolerances and checks).
#[derive(Clone, Copy, Debug)]
pub struct TriangulateCfg {
    /// Max per-axis distance at which two bridge vertices count as the same point.
    /// `0.0` means exact equality.
    pub dedup_eps: f64,
    /// Reject containment samples that fall exactly on another polygon's boundary.
    pub strict_containment: bool,
}

impl Default for TriangulateCfg {
    fn default() -> Self {
        Self {
            dedup_eps: 0.0,
            strict_containment: true,
        }
    }
}

impl TriangulateCfg {
    #[inline]
    pub fn same_point(&self, a: Point, b: Point) -> bool {
        if self.dedup_eps > 0.0 {
            (a.x - b.x).abs() <= self.dedup_eps && (a.y - b.y).abs() <= self.dedup_eps
        } else {
            a == b
        }
    }
}

/// Simple polygon as a cyclic vertex list.
///
/// Invariants (assumed, not verified):
/// - at least 3 vertices;
/// - no self-intersections.
///
/// Orientation is free on input; the pipeline normalizes it by nesting depth.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub pts: Vec<Point>,
}

impl Polygon {
    #[inline]
    pub fn new(pts: Vec<Point>) -> Self {
        Self { pts }
    }

    /// Build from `(x, y)` tuples.
    pub fn from_xy(xy: &[(f64, f64)]) -> Self {
        Self {
            pts: xy.iter().map(|&(x, y)| Vector2::new(x, y)).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// Shoelace area; positive for counterclockwise.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.pts)
    }

    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Flip the winding in place.
    #[inline]
    pub fn reverse(&mut self) {
        self.pts.reverse();
    }

    /// Index of the vertex with maximum x (first one on ties).
    #[inline]
    pub fn rightmost(&self) -> Option<usize> {
        rightmost_index(&self.pts)
    }

    /// Even-odd membership; undefined exactly on an edge (see `on_boundary`).
    #[inline]
    pub fn contains(&self, q: Point) -> bool {
        point_in_polygon(&self.pts, q)
    }

    /// True if `q` lies on one of the closed boundary edges.
    pub fn on_boundary(&self, q: Point) -> bool {
        self.edges().any(|(a, b)| point_on_segment(a, b, q))
    }

    /// Iterator over the closed edge list `(p_i, p_{i+1})`.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.pts.len();
        (0..n).map(move |i| (self.pts[i], self.pts[(i + 1) % n]))
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(pts: Vec<Point>) -> Self {
        Self { pts }
    }
}

/// Output triangle `(a, b, c)`; the pipeline emits them counterclockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle(pub [Point; 3]);

impl Triangle {
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self([a, b, c])
    }

    #[inline]
    pub fn signed_area(&self) -> f64 {
        0.5 * orientation(self.0[0], self.0[1], self.0[2])
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[inline]
    pub fn points(&self) -> &[Point; 3] {
        &self.0
    }
}
