use approx::assert_abs_diff_eq;
use ddls_nav::geometry::{Point2, Segment2, Vector2, path_length};

#[test]
fn test_point_vector_arithmetic() {
    let a = Point2::new(1.0, 2.0);
    let b = Point2::new(4.0, 6.0);
    let d = b - a;
    assert_eq!(d, Vector2::new(3.0, 4.0));
    assert_eq!(a + d, b);
    assert_eq!(b - d, a);
    assert_eq!(a.as_vector(), Vector2::new(1.0, 2.0));
    assert_eq!(Point2::from((4.0, 6.0)), b);

    assert_abs_diff_eq!(a.distance(&b), 5.0);
    assert_abs_diff_eq!(a.distance2(&b), 25.0);
    assert_eq!(a.midpoint(&b), Point2::new(2.5, 4.0));
    assert_eq!(a.lerp(&b, 0.0), a);
    assert_eq!(a.lerp(&b, 1.0), b);
}

#[test]
fn test_vector_rotations() {
    let v = Vector2::new(2.0, 1.0);
    assert_eq!(v.perp_cw(), Vector2::new(1.0, -2.0));
    assert_eq!(v.perp_ccw(), Vector2::new(-1.0, 2.0));
    assert!(v.cross(&v.perp_ccw()) > 0.0);
    assert!(v.cross(&v.perp_cw()) < 0.0);
    assert_eq!(v.dot(&v.perp_cw()), 0.0);
    assert_eq!(-v, Vector2::new(-2.0, -1.0));

    let unit = Vector2::new(3.0, 4.0).normalized().unwrap();
    assert_abs_diff_eq!(unit.norm(), 1.0);
    assert!(Vector2::<f64>::zero().normalized().is_none());
}

#[test]
fn test_segment_helpers() {
    let s = Segment2::new(Point2::new(0.0, 0.0), Point2::new(0.0, 4.0));
    assert_abs_diff_eq!(s.length(), 4.0);
    assert_abs_diff_eq!(s.length2(), 16.0);
    assert_eq!(s.midpoint(), Point2::new(0.0, 2.0));
    assert_eq!(s.point_at(0.25), Point2::new(0.0, 1.0));
    assert_eq!(s.inverse().a, s.b);
    assert_eq!(s.inverse().direction(), -s.direction());
}

#[test]
fn test_path_length() {
    let path = [
        Point2::new(0.0, 0.0),
        Point2::new(3.0, 0.0),
        Point2::new(3.0, 4.0),
    ];
    assert_abs_diff_eq!(path_length(&path), 7.0);
    assert_eq!(path_length::<f64>(&[]), 0.0);
    assert_eq!(path_length(&path[..1]), 0.0);
}
