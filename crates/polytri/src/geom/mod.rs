//! Planar primitives and predicates.
//!
//! Purpose
//! - Provide the `Point`/`Polygon`/`Triangle` vocabulary shared by every stage of
//!   the triangulation pipeline.
//! - Keep predicates exact and branch-light; tolerances live in `TriangulateCfg`
//!   and are applied by callers, not here.
//!
//! Code cross-refs: `triangulate::{earclip, bridge, nesting}`

pub mod predicates;
mod types;

pub use predicates::{
    orientation, point_in_polygon, point_in_triangle, point_on_segment, rightmost_index,
    segments_intersect, signed_area,
};
pub use types::{Point, Polygon, Triangle, TriangulateCfg};

#[cfg(test)]
mod tests;
