//! Polygon-set triangulation: ear clipping, hole bridging, nesting.
//!
//! Purpose
//! - Turn a set of nested simple polygons (fills, holes, islands in holes, ...)
//!   into non-overlapping counterclockwise triangles covering exactly the region.
//!
//! Stages
//! - `nesting`: containment depth by even-odd sampling of each first vertex, then
//!   winding normalization (even depth counterclockwise, odd depth clockwise).
//! - `bridge`: per fill polygon, splice its direct holes in (rightmost first).
//! - `earclip`: O(n²) ear clipping of the resulting hole-free ring.
//!
//! Non-goals
//! - No self-intersection detection or repair, no partial overlaps, no Delaunay
//!   or quality constraints.
//!
//! Code cross-refs: `geom::{Polygon, Triangle, TriangulateCfg}`, `error::TriangulateError`

mod bridge;
mod earclip;
mod nesting;
mod pipeline;

pub use bridge::{merge_hole, triangulate_with_holes};
pub use earclip::triangulate_simple;
pub use nesting::ContainmentTree;
pub use pipeline::{max_triangles, triangulate};
