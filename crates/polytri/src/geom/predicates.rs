//! Geometric predicates on plain `Point`s.
//!
//! All predicates are exact on the inputs they see (no tolerance); callers decide
//! how to treat ties. Signs follow the usual convention: positive = counterclockwise.

use super::types::Point;

/// Twice the signed area of triangle `(a, b, c)`.
///
/// `> 0` counterclockwise, `== 0` collinear, `< 0` clockwise.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

/// True iff `p` lies strictly inside triangle `(a, b, c)` (either winding).
///
/// Boundary points (edges and corners) are excluded.
#[inline]
pub fn point_in_triangle(a: Point, b: Point, c: Point, p: Point) -> bool {
    let x = orientation(p, a, b);
    let y = orientation(p, b, c);
    let z = orientation(p, c, a);
    x * y > 0.0 && y * z > 0.0 && z * x > 0.0
}

/// True if segments `a–b` and `c–d` intersect; touching endpoints and collinear
/// overlaps count as intersecting.
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    if a.x.max(b.x) < c.x.min(d.x)
        || c.x.max(d.x) < a.x.min(b.x)
        || a.y.max(b.y) < c.y.min(d.y)
        || c.y.max(d.y) < a.y.min(b.y)
    {
        return false;
    }
    orientation(a, c, b) * orientation(a, d, b) <= 0.0
        && orientation(c, a, d) * orientation(c, b, d) <= 0.0
}

/// True if `p` lies on the closed segment `a–b`.
pub fn point_on_segment(a: Point, b: Point, p: Point) -> bool {
    if p.x > a.x.max(b.x) || p.x < a.x.min(b.x) || p.y > a.y.max(b.y) || p.y < a.y.min(b.y) {
        return false;
    }
    orientation(a, p, b) == 0.0
}

/// Shoelace area of a cyclic vertex list; positive for counterclockwise.
pub fn signed_area(pts: &[Point]) -> f64 {
    let n = pts.len();
    let mut area = 0.0;
    for i in 0..n {
        let p = pts[i];
        let q = pts[(i + 1) % n];
        area += p.x * q.y - p.y * q.x;
    }
    area / 2.0
}

/// Index of the first vertex with maximum x; `None` for an empty list.
pub fn rightmost_index(pts: &[Point]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in pts.iter().enumerate() {
        match best {
            Some(b) if p.x <= pts[b].x => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Even-odd ray test toward +x. Undefined when `q` lies exactly on an edge.
pub fn point_in_polygon(pts: &[Point], q: Point) -> bool {
    let n = pts.len();
    if n == 0 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (pts[i], pts[j]);
        if (pi.y > q.y) != (pj.y > q.y)
            && q.x < pi.x + (pj.x - pi.x) * (q.y - pi.y) / (pj.y - pi.y)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}
