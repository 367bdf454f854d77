//! Ear clipping for a single hole-free simple polygon, O(n²).
//!
//! Vertices stay in place; a circular doubly-linked list of indices (`Ring`) is
//! layered on top so that clipping an ear is an O(1) unlink instead of a shift.

use std::collections::BTreeSet;

use crate::error::{TriResult, TriangulateError};
use crate::geom::{orientation, point_in_triangle, point_on_segment, Point, Polygon, Triangle};

#[derive(Clone, Copy, Debug)]
struct Link {
    prev: usize,
    next: usize,
}

/// Index arena over a fixed vertex array.
struct Ring {
    links: Vec<Link>,
}

impl Ring {
    fn new(n: usize) -> Self {
        let links = (0..n)
            .map(|i| Link {
                prev: (i + n - 1) % n,
                next: (i + 1) % n,
            })
            .collect();
        Self { links }
    }

    #[inline]
    fn prev(&self, i: usize) -> usize {
        self.links[i].prev
    }

    #[inline]
    fn next(&self, i: usize) -> usize {
        self.links[i].next
    }

    /// Live indices, walking `next` once around from `start`.
    fn iter_from(&self, start: usize) -> impl Iterator<Item = usize> + '_ {
        let mut cur = Some(start);
        std::iter::from_fn(move || {
            let i = cur?;
            let nx = self.next(i);
            cur = (nx != start).then_some(nx);
            Some(i)
        })
    }

    fn unlink(&mut self, i: usize) {
        let Link { prev, next } = self.links[i];
        self.links[prev].next = next;
        self.links[next].prev = prev;
    }
}

/// `d` blocks the ear `(a, b, c)`: strictly inside it, or on the new diagonal `a–c`.
///
/// A vertex on the diagonal would leave a zero-area strip behind once `b` is cut.
/// Copies of `a` or `c` (bridge duplicates) do not block.
#[inline]
fn blocks_ear(a: Point, b: Point, c: Point, d: Point) -> bool {
    point_in_triangle(a, b, c, d) || (d != a && d != c && point_on_segment(a, c, d))
}

#[inline]
fn is_convex(pts: &[Point], ring: &Ring, k: usize) -> bool {
    orientation(pts[ring.prev(k)], pts[k], pts[ring.next(k)]) > 0.0
}

/// Triangulate a counterclockwise simple polygon without holes.
///
/// Returns exactly `n - 2` triangles or `NoEarFound` when the candidate set runs
/// dry first (self-intersecting, clockwise or otherwise degenerate input).
pub fn triangulate_simple(polygon: &Polygon) -> TriResult<Vec<Triangle>> {
    triangulate_points(&polygon.pts)
}

pub(crate) fn triangulate_points(pts: &[Point]) -> TriResult<Vec<Triangle>> {
    let n = pts.len();
    if n < 3 {
        return Err(TriangulateError::InsufficientVertices {
            polygon: 0,
            count: n,
        });
    }
    let expected = n - 2;
    let mut ring = Ring::new(n);
    let mut candidates: BTreeSet<usize> = (0..n).filter(|&k| is_convex(pts, &ring, k)).collect();

    let mut out = Vec::with_capacity(expected);
    let mut live = 0usize;
    let mut clipped_since_seed = 0usize;
    while out.len() < expected {
        let Some(k) = candidates.pop_first() else {
            // A vertex blocked earlier is only re-queued when a neighbour is clipped;
            // rescan the live ring once per round of progress before giving up.
            if clipped_since_seed == 0 {
                break;
            }
            clipped_since_seed = 0;
            candidates.extend(ring.iter_from(live).filter(|&k| is_convex(pts, &ring, k)));
            continue;
        };
        // neighbours may have moved since k was queued
        if !is_convex(pts, &ring, k) {
            continue;
        }
        let (p, q) = (ring.prev(k), ring.next(k));
        let (a, b, c) = (pts[p], pts[k], pts[q]);

        let mut d = ring.next(q);
        let mut blocked = false;
        while d != p {
            if blocks_ear(a, b, c, pts[d]) {
                blocked = true;
                break;
            }
            d = ring.next(d);
        }
        if blocked {
            continue;
        }

        out.push(Triangle::new(a, b, c));
        ring.unlink(k);
        live = q;
        clipped_since_seed += 1;
        candidates.insert(p);
        candidates.insert(q);
    }

    if out.len() < expected {
        tracing::debug!(n, emitted = out.len(), "ear clipping stalled");
        return Err(TriangulateError::NoEarFound {
            expected,
            emitted: out.len(),
        });
    }
    Ok(out)
}
