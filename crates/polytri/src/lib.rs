//! Triangulation of nested simple polygons.
//!
//! Turns a laminar set of simple polygons (fills, holes, islands inside holes)
//! into counterclockwise triangles that exactly cover the filled region. Intended
//! as a preprocessing step before rasterizing arbitrary polygon shapes.
//!
//! Layout
//! - `geom`: `Point`/`Polygon`/`Triangle`, exact predicates, `TriangulateCfg`.
//! - `triangulate`: ear clipping, hole bridging, containment tree, pipeline.
//! - `rand`: reproducible random polygons for tests, benches and the CLI.
//!
//! Quick start
//! ```
//! use polytri::prelude::*;
//!
//! let outer = Polygon::from_xy(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
//! let hole = Polygon::from_xy(&[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]);
//! let tris = triangulate(&[outer, hole], &TriangulateCfg::default()).unwrap();
//! assert_eq!(tris.len(), 8);
//! ```

pub mod api;
pub mod error;
pub mod geom;
pub mod rand;
pub mod triangulate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{TriResult, TriangulateError};
pub use geom::{Point, Polygon, Triangle, TriangulateCfg};
pub use triangulate::triangulate;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{TriResult, TriangulateError};
    pub use crate::geom::{Point, Polygon, Triangle, TriangulateCfg};
    pub use crate::triangulate::{
        max_triangles, triangulate, triangulate_simple, triangulate_with_holes, ContainmentTree,
    };
}
