use super::*;
use nalgebra::vector;
use proptest::prelude::*;

fn unit_square() -> Polygon {
    Polygon::new(vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ])
}

#[test]
fn area_square_and_orientation() {
    let sq = unit_square();
    assert!((sq.area() - 1.0).abs() < 1e-12);
    assert!(sq.signed_area() > 0.0);
    let rev = Polygon::new(sq.points.iter().rev().copied().collect());
    assert!(rev.signed_area() < 0.0);
    assert!((rev.area() - 1.0).abs() < 1e-12);
}

#[test]
fn area_non_convex() {
    // L-shape: 2x2 square minus the 1x1 top-right corner.
    let l = Polygon::new(vec![
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 1.0],
        vector![1.0, 1.0],
        vector![1.0, 2.0],
        vector![0.0, 2.0],
    ]);
    assert!((l.area() - 3.0).abs() < 1e-12);
}

#[test]
fn area_collinear_is_zero() {
    let line = Polygon::new(vec![
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![2.0, 2.0],
    ]);
    assert_eq!(line.area(), 0.0);
}

#[test]
fn rotate_quarter_turn() {
    let p = Polygon::new(vec![vector![1.0, 0.0], vector![0.0, 2.0]]);
    let r = p.rotate(std::f64::consts::FRAC_PI_2);
    assert!((r.points[0] - vector![0.0, 1.0]).norm() < 1e-12);
    assert!((r.points[1] - vector![-2.0, 0.0]).norm() < 1e-12);
}

#[test]
fn transforms_do_not_mutate_input() {
    let sq = unit_square();
    let before = sq.clone();
    let _ = sq.rotate(1.0).scale(2.0, 3.0).translate(5.0, -5.0);
    assert_eq!(sq, before);
}

#[test]
fn edge_wraps_and_normal_is_unit() {
    let sq = unit_square();
    let (a, b) = sq.edge(3);
    assert_eq!(a, vector![0.0, 1.0]);
    assert_eq!(b, vector![0.0, 0.0]);
    let n = edge_normal(vector![0.0, 0.0], vector![2.0, 0.0]);
    assert!((n - vector![0.0, 1.0]).norm() < 1e-9);
    // Degenerate edge stays finite.
    let z = edge_normal(vector![1.0, 1.0], vector![1.0, 1.0]);
    assert!(z.x.is_finite() && z.y.is_finite());
}

#[test]
fn bounding_box_of_square() {
    let bb = unit_square().translate(2.0, 3.0).bounding_box().unwrap();
    assert_eq!(bb.min, vector![2.0, 3.0]);
    assert_eq!(bb.max, vector![3.0, 4.0]);
    assert!(Polygon::default().bounding_box().is_none());
}

#[test]
fn from_vec_matches_new() {
    let pts = vec![vector![0.0, 0.0], vector![2.0, 0.0], vector![0.0, 2.0]];
    let p: Polygon = pts.clone().into();
    assert_eq!(p, Polygon::new(pts));
    assert!((p.area() - 2.0).abs() < 1e-12);
}

#[test]
fn lerp_midpoint() {
    let m = lerp(vector![0.0, 0.0], vector![4.0, -2.0], 0.25);
    assert_eq!(m, vector![1.0, -0.5]);
}

fn arb_polygon() -> impl Strategy<Value = Polygon> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 3..16)
        .prop_map(|pts| Polygon::new(pts.into_iter().map(|(x, y)| vector![x, y]).collect()))
}

proptest! {
    #[test]
    fn area_is_rotation_and_translation_invariant(
        poly in arb_polygon(),
        angle in 0.0f64..std::f64::consts::TAU,
        dx in -50.0f64..50.0,
        dy in -50.0f64..50.0,
    ) {
        let a0 = poly.area();
        let a1 = poly.rotate(angle).translate(dx, dy).area();
        prop_assert!(a0 >= 0.0);
        prop_assert!((a0 - a1).abs() <= 1e-6 * (1.0 + a0));
    }

    #[test]
    fn scale_multiplies_area(poly in arb_polygon(), sx in 0.5f64..2.0, sy in 0.5f64..2.0) {
        let a0 = poly.area();
        let a1 = poly.scale(sx, sy).area();
        prop_assert!((a0 * sx * sy - a1).abs() <= 1e-6 * (1.0 + a1));
    }
}
