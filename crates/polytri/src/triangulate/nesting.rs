//! Containment forest over an input polygon set and winding normalization.
//!
//! Polygon `i` contains polygon `j` if `j`'s first vertex lies inside `i` (even-odd).
//! Only laminar families are meaningful; partial overlaps produce an arbitrary
//! forest and are not detected.

use crate::error::{TriResult, TriangulateError};
use crate::geom::{Polygon, TriangulateCfg};

/// Nesting depth plus, per polygon, every polygon it contains (all descendants).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContainmentTree {
    pub depth: Vec<usize>,
    pub contains: Vec<Vec<usize>>,
}

impl ContainmentTree {
    /// O(m²) pairwise pass; must finish before any per-root work starts.
    pub fn build(polygons: &[Polygon], cfg: &TriangulateCfg) -> TriResult<Self> {
        for (i, p) in polygons.iter().enumerate() {
            if p.len() < 3 {
                return Err(TriangulateError::InsufficientVertices {
                    polygon: i,
                    count: p.len(),
                });
            }
        }
        let m = polygons.len();
        let mut depth = vec![0usize; m];
        let mut contains = vec![Vec::new(); m];
        for i in 0..m {
            for j in 0..m {
                if i == j {
                    continue;
                }
                let sample = polygons[j].pts[0];
                if cfg.strict_containment && polygons[i].on_boundary(sample) {
                    return Err(TriangulateError::AmbiguousContainment {
                        sample: j,
                        container: i,
                    });
                }
                if polygons[i].contains(sample) {
                    contains[i].push(j);
                    depth[j] += 1;
                }
            }
        }
        Ok(Self { depth, contains })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.depth.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.depth.is_empty()
    }

    /// Even depth: a fill boundary.
    #[inline]
    pub fn is_outer(&self, i: usize) -> bool {
        self.depth[i] % 2 == 0
    }

    /// Direct holes of `i`: contained polygons exactly one level deeper.
    pub fn holes_of(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        let d = self.depth[i] + 1;
        self.contains[i]
            .iter()
            .copied()
            .filter(move |&j| self.depth[j] == d)
    }

    /// Reverse every polygon whose winding disagrees with its depth parity
    /// (even ⇒ counterclockwise, odd ⇒ clockwise). Returns how many were flipped.
    pub fn normalize_orientation(&self, polygons: &mut [Polygon]) -> usize {
        let mut flipped = 0;
        for (i, p) in polygons.iter_mut().enumerate() {
            let is_cw = p.signed_area() < 0.0;
            if is_cw != !self.is_outer(i) {
                p.reverse();
                flipped += 1;
            }
        }
        flipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
        Polygon::from_xy(&[(x0, y0), (x1, y0), (x1, y1), (x0, y1)])
    }

    #[test]
    fn depths_of_concentric_squares() {
        let polys = vec![
            square(2.0, 2.0, 8.0, 8.0),
            square(0.0, 0.0, 10.0, 10.0),
            square(4.0, 4.0, 6.0, 6.0),
            square(20.0, 0.0, 21.0, 1.0),
        ];
        let tree = ContainmentTree::build(&polys, &TriangulateCfg::default()).unwrap();
        assert_eq!(tree.depth, vec![1, 0, 2, 0]);
        assert_eq!(tree.contains[1], vec![0, 2]);
        assert_eq!(tree.holes_of(1).collect::<Vec<_>>(), vec![0]);
        assert_eq!(tree.holes_of(0).collect::<Vec<_>>(), vec![2]);
        assert_eq!(tree.holes_of(3).count(), 0);
        assert!(tree.is_outer(2) && !tree.is_outer(0));
    }

    #[test]
    fn normalization_follows_parity() {
        let mut polys = vec![
            square(0.0, 0.0, 10.0, 10.0),
            square(2.0, 2.0, 8.0, 8.0),
            square(4.0, 4.0, 6.0, 6.0),
        ];
        polys[0].reverse();
        let tree = ContainmentTree::build(&polys, &TriangulateCfg::default()).unwrap();
        // outer was clockwise, the middle one counterclockwise, the core is fine
        assert_eq!(tree.normalize_orientation(&mut polys), 2);
        assert!(polys[0].signed_area() > 0.0);
        assert!(polys[1].signed_area() < 0.0);
        assert!(polys[2].signed_area() > 0.0);
        assert_eq!(tree.normalize_orientation(&mut polys), 0);
    }

    #[test]
    fn sample_on_edge_is_ambiguous() {
        let polys = vec![
            square(0.0, 0.0, 10.0, 10.0),
            Polygon::from_xy(&[(10.0, 5.0), (5.0, 6.0), (5.0, 4.0)]),
        ];
        assert_eq!(
            ContainmentTree::build(&polys, &TriangulateCfg::default()),
            Err(TriangulateError::AmbiguousContainment {
                sample: 1,
                container: 0
            })
        );
        let lax = TriangulateCfg {
            strict_containment: false,
            ..TriangulateCfg::default()
        };
        assert!(ContainmentTree::build(&polys, &lax).is_ok());
    }

    #[test]
    fn short_polygon_is_rejected() {
        let polys = vec![
            square(0.0, 0.0, 1.0, 1.0),
            Polygon::from_xy(&[(0.0, 0.0), (1.0, 1.0)]),
        ];
        assert_eq!(
            ContainmentTree::build(&polys, &TriangulateCfg::default()),
            Err(TriangulateError::InsufficientVertices {
                polygon: 1,
                count: 2
            })
        );
    }
}
