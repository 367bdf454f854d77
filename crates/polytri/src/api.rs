//! Curated surface for binding crates (FFI, CLI).
//!
//! Prefer these re-exports over reaching into submodules so that internal
//! reshuffles do not ripple into the bindings.

pub use crate::error::{TriResult, TriangulateError};
pub use crate::geom::{
    orientation, point_in_polygon, point_in_triangle, point_on_segment, segments_intersect,
    signed_area, Point, Polygon, Triangle, TriangulateCfg,
};
pub use crate::rand::{
    draw_nested_rings, draw_star, draw_with_holes, ReplayToken, StarCfg, VertexCount,
};
pub use crate::triangulate::{
    max_triangles, merge_hole, triangulate, triangulate_simple, triangulate_with_holes,
    ContainmentTree,
};

/// Total area covered by `triangles`.
pub fn covered_area(triangles: &[Triangle]) -> f64 {
    triangles.iter().map(Triangle::area).sum()
}

/// Region area of a laminar set: fills count positive, holes negative.
///
/// Uses the containment tree, so winding of the input does not matter.
pub fn region_area(polygons: &[Polygon], cfg: &TriangulateCfg) -> TriResult<f64> {
    let tree = ContainmentTree::build(polygons, cfg)?;
    Ok(polygons
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let a = p.signed_area().abs();
            if tree.is_outer(i) {
                a
            } else {
                -a
            }
        })
        .sum())
}
