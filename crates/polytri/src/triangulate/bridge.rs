//! Hole bridging: splice a hole into its outer boundary through a pair of
//! coincident edges between two mutually visible vertices.
//!
//! Preconditions
//! - `outer` is counterclockwise, `hole` is clockwise, and the hole lies strictly
//!   inside `outer` (the outer ring may already carry bridges of earlier holes).
//!
//! Visibility search
//! - Shoot a ray from the hole's rightmost vertex `m` toward +x and take the
//!   nearest outer edge it crosses at `r`; its endpoint with larger x is the first
//!   candidate `q`.
//! - Outer vertices inside triangle `(m, r, q)` may hide `q`; among them pick the
//!   one angularly closest to the ray. Nothing can hide that one.

use crate::error::{TriResult, TriangulateError};
use crate::geom::{
    orientation, point_in_triangle, rightmost_index, Point, Polygon, Triangle, TriangulateCfg,
};

use super::earclip::triangulate_points;

/// Merge one hole into `outer` in place. `outer` grows by `hole.len() + 2`.
pub fn merge_hole(outer: &mut Vec<Point>, hole: &[Point], cfg: &TriangulateCfg) -> TriResult<()> {
    merge_hole_at(outer, hole, 0, cfg)
}

pub(crate) fn merge_hole_at(
    outer: &mut Vec<Point>,
    hole: &[Point],
    hole_id: usize,
    cfg: &TriangulateCfg,
) -> TriResult<()> {
    let rightmost = match rightmost_index(hole) {
        Some(r) if hole.len() >= 3 => r,
        _ => {
            return Err(TriangulateError::InsufficientVertices {
                polygon: hole_id,
                count: hole.len(),
            })
        }
    };
    let m = hole[rightmost];

    let (mut visible, min_x) =
        ray_hit(outer, m).ok_or(TriangulateError::NoVisibleVertex { hole: hole_id })?;

    if outer[visible].y != m.y {
        let r = Point::new(min_x, m.y);
        let q = outer[visible];
        let sgn = orientation(r, m, q);
        for (i, &c) in outer.iter().enumerate() {
            if point_in_triangle(m, r, q, c) || (orientation(m, q, c) == 0.0 && c.x > m.x) {
                let prod = orientation(c, m, outer[visible]);
                if sgn * prod > 0.0 || (prod == 0.0 && c.x < outer[visible].x) {
                    visible = i;
                }
            }
        }
    }

    let visible = resolve_duplicate(outer, visible, m, cfg);
    tracing::trace!(
        hole = hole_id,
        at = visible,
        x = outer[visible].x,
        y = outer[visible].y,
        "bridge"
    );

    let v = outer[visible];
    let mut inside = Vec::with_capacity(hole.len() + 2);
    inside.push(v);
    inside.extend_from_slice(&hole[rightmost..]);
    inside.extend_from_slice(&hole[..=rightmost]);
    outer.splice(visible..visible, inside);
    Ok(())
}

/// Nearest crossing of the ray `m + t·(1, 0)`, `t > 0`, with the outer boundary.
///
/// Returns the candidate vertex index and the crossing abscissa.
fn ray_hit(outer: &[Point], m: Point) -> Option<(usize, f64)> {
    let n = outer.len();
    let mut best: Option<usize> = None;
    let mut min_x = f64::INFINITY;
    let mut j = n.checked_sub(1)?;
    for i in 0..n {
        let (pi, pj) = (outer[i], outer[j]);
        if (pi.y - m.y) * (pj.y - m.y) < 0.0 {
            let x = pi.x + (pj.x - pi.x) * (m.y - pi.y) / (pj.y - pi.y);
            if x > m.x && x < min_x {
                min_x = x;
                best = Some(if pi.x > pj.x { i } else { j });
            }
        }
        // a vertex exactly on the ray is its own crossing
        if pi.y == m.y && pi.x > m.x && pi.x < min_x {
            min_x = pi.x;
            best = Some(i);
        }
        j = i;
    }
    best.map(|b| (b, min_x))
}

/// Earlier bridges duplicate outer vertices. Pick the copy whose successor leaves
/// toward the hole's side so that the new bridge does not cross an old one.
fn resolve_duplicate(outer: &[Point], visible: usize, m: Point, cfg: &TriangulateCfg) -> usize {
    let v = outer[visible];
    let n = outer.len();
    for i in 0..n {
        if !cfg.same_point(outer[i], v) {
            continue;
        }
        let t = outer[(i + 1) % n];
        if t.x > v.x || orientation(m, v, t) > 0.0 {
            return i;
        }
    }
    visible
}

/// Merge all `holes` into `outer` and ear-clip the result.
///
/// Holes are merged by descending rightmost x (ties: later input first) so that a
/// bridge never has to route around a bridge created further left. Errors name
/// holes by their position in `holes`.
pub fn triangulate_with_holes(
    outer: &Polygon,
    holes: &[Polygon],
    cfg: &TriangulateCfg,
) -> TriResult<Vec<Triangle>> {
    let labelled: Vec<(usize, &Polygon)> = holes.iter().enumerate().collect();
    triangulate_labelled(outer, &labelled, cfg)
}

/// As `triangulate_with_holes`, with each hole carrying the id reported in errors
/// (the pipeline passes input-polygon indices).
pub(crate) fn triangulate_labelled(
    outer: &Polygon,
    holes: &[(usize, &Polygon)],
    cfg: &TriangulateCfg,
) -> TriResult<Vec<Triangle>> {
    let mut ring = outer.pts.clone();
    let mut order: Vec<(f64, usize, &Polygon)> = holes
        .iter()
        .map(|&(id, h)| {
            let mx = h.pts.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
            (mx, id, h)
        })
        .collect();
    order.sort_by(|a, b| b.0.total_cmp(&a.0).then(b.1.cmp(&a.1)));

    for &(_, id, hole) in &order {
        merge_hole_at(&mut ring, &hole.pts, id, cfg)?;
    }
    tracing::debug!(
        outer = outer.len(),
        holes = holes.len(),
        merged = ring.len(),
        "holes merged"
    );
    triangulate_points(&ring)
}
