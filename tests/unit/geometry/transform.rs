use super::*;
use crate::foundation::core::Point;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn display_matches_svg_syntax() {
    let t = Transform::identity()
        .then(TransformOp::Translate(10.0, 2.5))
        .then(TransformOp::SkewY(-30.0))
        .then(TransformOp::Scale(0.333333, 2.0));
    assert_eq!(t.to_string(), "translate(10 2.5) skewY(-30) scale(0.33 2)");
}

#[test]
fn leftmost_op_applies_last() {
    let t = Transform::identity()
        .then(TransformOp::Translate(10.0, 0.0))
        .then(TransformOp::Scale(2.0, 2.0));
    let p = t.to_affine() * Point::new(1.0, 1.0);
    assert!(close(p, Point::new(12.0, 2.0)));
}

#[test]
fn skew_y_shears_along_x() {
    let t = Transform::identity().then(TransformOp::SkewY(45.0));
    let p = t.to_affine() * Point::new(2.0, 0.0);
    assert!(close(p, Point::new(2.0, 2.0)));
}

#[test]
fn identity_is_empty() {
    assert!(Transform::identity().is_identity());
    assert_eq!(Transform::identity().to_affine(), Affine::IDENTITY);
    assert_eq!(Transform::identity().to_string(), "");
}
