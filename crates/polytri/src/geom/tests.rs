use super::*;
use nalgebra::vector;

fn unit_square() -> Polygon {
    Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
}

#[test]
fn orientation_signs() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 0.0];
    assert!(orientation(a, b, vector![0.0, 1.0]) > 0.0);
    assert!(orientation(a, b, vector![0.0, -1.0]) < 0.0);
    assert_eq!(orientation(a, b, vector![3.0, 0.0]), 0.0);
    // twice the triangle area
    assert!((orientation(a, vector![2.0, 0.0], vector![0.0, 2.0]) - 4.0).abs() < 1e-12);
}

#[test]
fn point_in_triangle_is_strict() {
    let (a, b, c) = (vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 4.0]);
    assert!(point_in_triangle(a, b, c, vector![1.0, 1.0]));
    // clockwise winding gives the same answer
    assert!(point_in_triangle(a, c, b, vector![1.0, 1.0]));
    // edge, corner and outside are all rejected
    assert!(!point_in_triangle(a, b, c, vector![2.0, 0.0]));
    assert!(!point_in_triangle(a, b, c, a));
    assert!(!point_in_triangle(a, b, c, vector![3.0, 3.0]));
}

#[test]
fn segments_intersect_cases() {
    let o = vector![0.0, 0.0];
    let x = vector![2.0, 2.0];
    // proper crossing
    assert!(segments_intersect(o, x, vector![0.0, 2.0], vector![2.0, 0.0]));
    // shared endpoint counts
    assert!(segments_intersect(o, x, x, vector![3.0, 0.0]));
    // collinear overlap counts
    assert!(segments_intersect(o, x, vector![1.0, 1.0], vector![3.0, 3.0]));
    // disjoint bounding boxes
    assert!(!segments_intersect(o, vector![1.0, 0.0], vector![2.0, 1.0], vector![3.0, 1.0]));
    // overlapping boxes, no contact
    assert!(!segments_intersect(o, x, vector![1.0, 0.0], vector![2.0, 0.5]));
}

#[test]
fn point_on_segment_cases() {
    let a = vector![0.0, 0.0];
    let b = vector![4.0, 2.0];
    assert!(point_on_segment(a, b, vector![2.0, 1.0]));
    assert!(point_on_segment(a, b, a));
    assert!(!point_on_segment(a, b, vector![6.0, 3.0]));
    assert!(!point_on_segment(a, b, vector![2.0, 1.5]));
}

#[test]
fn signed_area_follows_winding() {
    let mut sq = unit_square();
    assert!((sq.signed_area() - 1.0).abs() < 1e-12);
    assert!(sq.is_ccw());
    sq.reverse();
    assert!((sq.signed_area() + 1.0).abs() < 1e-12);
    assert!(!sq.is_ccw());
    assert_eq!(signed_area(&[]), 0.0);
}

#[test]
fn even_odd_membership() {
    let sq = unit_square();
    assert!(sq.contains(vector![0.5, 0.5]));
    assert!(!sq.contains(vector![1.5, 0.5]));
    assert!(!sq.contains(vector![0.5, -0.5]));
    // L-shape: the notch is outside
    let l = Polygon::from_xy(&[
        (0.0, 0.0),
        (2.0, 0.0),
        (2.0, 1.0),
        (1.0, 1.0),
        (1.0, 2.0),
        (0.0, 2.0),
    ]);
    assert!(l.contains(vector![0.5, 1.5]));
    assert!(!l.contains(vector![1.5, 1.5]));
}

#[test]
fn boundary_edges_and_rightmost() {
    let sq = unit_square();
    assert!(sq.on_boundary(vector![1.0, 0.25]));
    assert!(sq.on_boundary(vector![0.0, 0.0]));
    assert!(!sq.on_boundary(vector![0.5, 0.5]));
    assert_eq!(sq.edges().count(), 4);
    assert_eq!(sq.edges().last(), Some((vector![0.0, 1.0], vector![0.0, 0.0])));
    assert!(!Polygon::default().on_boundary(vector![0.0, 0.0]));
    // ties on max x keep the first occurrence
    assert_eq!(sq.rightmost(), Some(1));
    assert_eq!(Polygon::default().rightmost(), None);
}

#[test]
fn dedup_tolerance() {
    let exact = TriangulateCfg::default();
    let loose = TriangulateCfg {
        dedup_eps: 1e-9,
        ..TriangulateCfg::default()
    };
    let p = vector![1.0, 2.0];
    let q = vector![1.0 + 1e-12, 2.0];
    assert!(exact.same_point(p, p));
    assert!(!exact.same_point(p, q));
    assert!(loose.same_point(p, q));
}

#[test]
fn triangle_area() {
    let t = Triangle::new(vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 3.0]);
    assert!((t.signed_area() - 6.0).abs() < 1e-12);
    let r = Triangle::new(t.0[0], t.0[2], t.0[1]);
    assert!((r.signed_area() + 6.0).abs() < 1e-12);
    assert!((r.area() - 6.0).abs() < 1e-12);
}
