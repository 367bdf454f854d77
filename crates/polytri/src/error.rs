use thiserror::Error;

/// Failure classes of the triangulation pipeline.
///
/// Every variant describes malformed input; none of them leaves partial output behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TriangulateError {
    #[error("polygon {polygon} has {count} vertices, need at least 3")]
    InsufficientVertices { polygon: usize, count: usize },

    #[error("no ear found after {emitted} of {expected} triangles (non-simple or degenerate polygon)")]
    NoEarFound { expected: usize, emitted: usize },

    #[error("first vertex of polygon {sample} lies on the boundary of polygon {container}")]
    AmbiguousContainment { sample: usize, container: usize },

    #[error("output buffer holds {capacity} values, need {required}")]
    OutputBufferTooSmall { required: usize, capacity: usize },

    #[error("hole {hole} has no visible vertex on its outer boundary (hole not enclosed)")]
    NoVisibleVertex { hole: usize },
}

pub type TriResult<T> = Result<T, TriangulateError>;
