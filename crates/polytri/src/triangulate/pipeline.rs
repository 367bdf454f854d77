use crate::error::TriResult;
use crate::geom::{Polygon, Triangle, TriangulateCfg};

use super::bridge::triangulate_labelled;
use super::nesting::ContainmentTree;

/// Triangulate a laminar polygon set (holes and islands-in-holes allowed).
///
/// The input is left untouched: windings are fixed on working copies, holes are
/// spliced into their outer boundary, and every fill region is ear-clipped.
/// Output triangles are counterclockwise, grouped per fill polygon in input order.
pub fn triangulate(polygons: &[Polygon], cfg: &TriangulateCfg) -> TriResult<Vec<Triangle>> {
    let tree = ContainmentTree::build(polygons, cfg)?;
    let mut work = polygons.to_vec();
    let flipped = tree.normalize_orientation(&mut work);
    tracing::debug!(polygons = work.len(), flipped, "containment tree built");

    let mut triangles = Vec::new();
    for i in 0..work.len() {
        if !tree.is_outer(i) {
            continue;
        }
        let holes: Vec<(usize, &Polygon)> = tree.holes_of(i).map(|j| (j, &work[j])).collect();
        let tris = triangulate_labelled(&work[i], &holes, cfg)?;
        tracing::debug!(outer = i, holes = holes.len(), triangles = tris.len(), "fill region done");
        triangles.extend(tris);
    }
    Ok(triangles)
}

/// Upper bound on the triangle count for `num_vertices` spread over `num_polygons`.
///
/// Each hole adds two bridge vertices; each fill region yields `n - 2` triangles.
#[inline]
pub fn max_triangles(num_vertices: usize, num_polygons: usize) -> usize {
    num_vertices + 2 * num_polygons
}
