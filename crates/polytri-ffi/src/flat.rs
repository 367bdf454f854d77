//! Flat `f64` buffer codec used by the C entry point.
//!
//! Input layout: per polygon, `x0, y0, x1, y1, …` followed by one NaN terminator
//! (in an x slot). Output layout: per triangle, `ax, ay, bx, by, cx, cy`.

use nalgebra::Vector2;
use polytri::api::{max_triangles, Polygon, Triangle, TriangulateError};
use thiserror::Error;

/// Values written per triangle.
pub const VALUES_PER_TRIANGLE: usize = 6;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FfiError {
    #[error(transparent)]
    Triangulate(#[from] TriangulateError),

    #[error("malformed input buffer: {reason}")]
    MalformedBuffer { reason: String },
}

impl FfiError {
    fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedBuffer {
            reason: reason.into(),
        }
    }

    /// Negative status code returned across the C boundary.
    pub fn code(&self) -> i32 {
        match self {
            Self::Triangulate(TriangulateError::InsufficientVertices { .. }) => -1,
            Self::Triangulate(TriangulateError::NoEarFound { .. }) => -2,
            Self::Triangulate(TriangulateError::AmbiguousContainment { .. }) => -3,
            Self::Triangulate(TriangulateError::OutputBufferTooSmall { .. }) => -4,
            Self::Triangulate(TriangulateError::NoVisibleVertex { .. }) => -5,
            Self::MalformedBuffer { .. } => -6,
        }
    }
}

/// Split `data` into `count` NaN-terminated polygons.
///
/// Values after the last terminator are ignored.
pub fn decode_polygons(count: usize, data: &[f64]) -> Result<Vec<Polygon>, FfiError> {
    let mut polygons = Vec::with_capacity(count);
    let mut at = 0usize;
    for k in 0..count {
        let mut pts = Vec::new();
        loop {
            let x = *data
                .get(at)
                .ok_or_else(|| FfiError::malformed(format!("polygon {k} is not NaN-terminated")))?;
            if x.is_nan() {
                at += 1;
                break;
            }
            let y = *data
                .get(at + 1)
                .ok_or_else(|| FfiError::malformed(format!("polygon {k} ends on a lone x")))?;
            pts.push(Vector2::new(x, y));
            at += 2;
        }
        polygons.push(Polygon::new(pts));
    }
    Ok(polygons)
}

/// Flatten triangles into `out`; returns the number of triangles written.
///
/// Nothing is written when `out` is too small.
pub fn encode_triangles(triangles: &[Triangle], out: &mut [f64]) -> Result<usize, FfiError> {
    let required = triangles.len() * VALUES_PER_TRIANGLE;
    if out.len() < required {
        return Err(TriangulateError::OutputBufferTooSmall {
            required,
            capacity: out.len(),
        }
        .into());
    }
    for (t, chunk) in triangles.iter().zip(out.chunks_exact_mut(VALUES_PER_TRIANGLE)) {
        for (p, xy) in t.points().iter().zip(chunk.chunks_exact_mut(2)) {
            xy[0] = p.x;
            xy[1] = p.y;
        }
    }
    Ok(triangles.len())
}

/// Output buffer length (in `f64`s) that always fits the result for an input of
/// `num_vertices` vertices spread over `num_polygons` polygons.
#[inline]
pub fn output_len_hint(num_vertices: usize, num_polygons: usize) -> usize {
    max_triangles(num_vertices, num_polygons) * VALUES_PER_TRIANGLE
}
