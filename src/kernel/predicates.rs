// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use smallvec::SmallVec;

use crate::geometry::Point2;
use crate::kernel::orientation::orient2d;
use crate::numeric::scalar::Scalar;

pub fn are_equal<T: Scalar>(p1: &Point2<T>, p2: &Point2<T>, eps: T) -> bool {
    p1.distance2(p2) <= eps * eps
}

/// Intersection point of segments `a1a2` and `b1b2`, endpoints included.
/// Parallel or collinear segments report no intersection.
pub fn segments_intersect<T: Scalar>(
    a1: &Point2<T>,
    a2: &Point2<T>,
    b1: &Point2<T>,
    b2: &Point2<T>,
) -> Option<Point2<T>> {
    let r = *a2 - *a1;
    let s = *b2 - *b1;
    let denom = r.cross(&s);
    if denom == T::zero() {
        return None;
    }

    let ab = *b1 - *a1;
    let t = ab.cross(&s) / denom;
    let u = ab.cross(&r) / denom;
    let range = T::zero()..=T::one();
    if range.contains(&t) && range.contains(&u) {
        Some(*a1 + r * t)
    } else {
        None
    }
}

/// Intersection of the infinite lines through `a1a2` and `b1b2`.
pub fn intersection_lines<T: Scalar>(
    a1: &Point2<T>,
    a2: &Point2<T>,
    b1: &Point2<T>,
    b2: &Point2<T>,
) -> Option<Point2<T>> {
    let r = *a2 - *a1;
    let s = *b2 - *b1;
    let denom = r.cross(&s);
    if denom == T::zero() {
        return None;
    }
    let t = (*b1 - *a1).cross(&s) / denom;
    Some(*a1 + r * t)
}

/// Orthogonal projection of `p` onto the line through `a` and `b`.
pub fn project_orthogonal<T: Scalar>(p: &Point2<T>, a: &Point2<T>, b: &Point2<T>) -> Point2<T> {
    let ab = *b - *a;
    let len2 = ab.norm2();
    if len2 == T::zero() {
        return *a;
    }
    let t = (*p - *a).dot(&ab) / len2;
    *a + ab * t
}

pub fn distance_squared_point_to_line<T: Scalar>(
    p: &Point2<T>,
    a: &Point2<T>,
    b: &Point2<T>,
) -> T {
    let ab = *b - *a;
    let len2 = ab.norm2();
    if len2 == T::zero() {
        return p.distance2(a);
    }
    let cross = ab.cross(&(*p - *a));
    cross * cross / len2
}

pub fn distance_squared_point_to_segment<T: Scalar>(
    p: &Point2<T>,
    a: &Point2<T>,
    b: &Point2<T>,
) -> T {
    let ab = *b - *a;
    let len2 = ab.norm2();
    if len2 == T::zero() {
        return p.distance2(a);
    }
    let t = (*p - *a).dot(&ab) / len2;
    if t <= T::zero() {
        p.distance2(a)
    } else if t >= T::one() {
        p.distance2(b)
    } else {
        p.distance2(&(*a + ab * t))
    }
}

/// True when the closed segment `ab` comes within `r` of `c`.
pub fn segment_intersects_disk<T: Scalar>(
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
    r: T,
) -> bool {
    distance_squared_point_to_segment(c, a, b) <= r * r
}

/// The two intersection points of circles `(c1, r1)` and `(c2, r2)`.
///
/// The first point lies to the right of the directed line `c1 -> c2`
/// (y-up frame), the second to its left. Concentric or separated circles
/// yield `None`; tangent circles yield the same point twice.
pub fn intersections_two_circles<T: Scalar>(
    c1: &Point2<T>,
    r1: T,
    c2: &Point2<T>,
    r2: T,
) -> Option<[Point2<T>; 2]> {
    let d = *c2 - *c1;
    let d2 = d.norm2();
    if d2 == T::zero() {
        return None;
    }
    let sum = r1 + r2;
    let diff = r1 - r2;
    if d2 > sum * sum || d2 < diff * diff {
        return None;
    }

    let two = T::two();
    let transcend = ((sum * sum - d2) * (d2 - diff * diff)).max(T::zero()).sqrt();
    let first = c1.midpoint(c2) + d * ((r1 * r1 - r2 * r2) / (two * d2));
    let offset = d.perp_cw() * (transcend / (two * d2));
    Some([first + offset, first - offset])
}

/// Intersections of segment `ab` with the circle `(c, r)`, ordered along `a -> b`.
pub fn intersections_segment_circle<T: Scalar>(
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
    r: T,
) -> SmallVec<[Point2<T>; 2]> {
    let mut out = SmallVec::new();
    let ab = *b - *a;
    let qa = ab.norm2();
    if qa == T::zero() {
        return out;
    }
    let ca = *a - *c;
    let qb = T::two() * ab.dot(&ca);
    let qc = ca.norm2() - r * r;
    let delta = qb * qb - T::lit(4.0) * qa * qc;
    if delta < T::zero() {
        return out;
    }

    let sq = delta.sqrt();
    let t0 = (-qb - sq) / (T::two() * qa);
    let t1 = (-qb + sq) / (T::two() * qa);
    let range = T::zero()..=T::one();
    if range.contains(&t0) {
        out.push(*a + ab * t0);
    }
    if delta > T::zero() && range.contains(&t1) {
        out.push(*a + ab * t1);
    }
    out
}

/// True when the quadrilateral `a b c d` (in order) is strictly convex.
pub fn is_convex<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, d: &Point2<T>) -> bool {
    let turns = [
        orient2d(a, b, c),
        orient2d(b, c, d),
        orient2d(c, d, a),
        orient2d(d, a, b),
    ];
    turns.iter().all(|&t| t > T::zero()) || turns.iter().all(|&t| t < T::zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn crossing_segments_meet_at_center() {
        let hit = segments_intersect(&p(0.0, 0.0), &p(2.0, 2.0), &p(0.0, 2.0), &p(2.0, 0.0));
        assert_eq!(hit, Some(p(1.0, 1.0)));
    }

    #[test]
    fn disjoint_and_parallel_segments_do_not_intersect() {
        assert!(segments_intersect(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0), &p(1.0, 1.0)).is_none());
        assert!(segments_intersect(&p(0.0, 0.0), &p(1.0, 1.0), &p(3.0, 0.0), &p(2.0, 1.0)).is_none());
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let a = p(0.0, 0.0);
        let b = p(4.0, 0.0);
        assert_abs_diff_eq!(distance_squared_point_to_segment(&p(2.0, 3.0), &a, &b), 9.0);
        assert_abs_diff_eq!(distance_squared_point_to_segment(&p(-3.0, 4.0), &a, &b), 25.0);
        assert_abs_diff_eq!(distance_squared_point_to_line(&p(-3.0, 4.0), &a, &b), 16.0);
        assert_abs_diff_eq!(distance_squared_point_to_segment(&p(1.0, 1.0), &a, &a), 2.0);
    }

    #[test]
    fn lines_meet_beyond_their_segments() {
        let hit = intersection_lines(&p(0.0, 0.0), &p(1.0, 0.0), &p(5.0, 1.0), &p(5.0, 2.0));
        assert_eq!(hit, Some(p(5.0, 0.0)));
        assert!(segments_intersect(&p(0.0, 0.0), &p(1.0, 0.0), &p(5.0, 1.0), &p(5.0, 2.0)).is_none());
        assert!(intersection_lines(&p(0.0, 0.0), &p(1.0, 1.0), &p(0.0, 1.0), &p(1.0, 2.0)).is_none());
    }

    #[test]
    fn equality_within_tolerance() {
        assert!(are_equal(&p(1.0, 1.0), &p(1.0, 1.0 + 1e-7), 1e-6));
        assert!(!are_equal(&p(1.0, 1.0), &p(1.0, 1.0 + 1e-5), 1e-6));
    }

    #[test]
    fn projection_lands_on_line() {
        let q = project_orthogonal(&p(3.0, 5.0), &p(0.0, 0.0), &p(10.0, 0.0));
        assert_eq!(q, p(3.0, 0.0));
    }

    #[test]
    fn two_circle_intersections_are_ordered_right_then_left() {
        let [right, left] =
            intersections_two_circles(&p(0.0, 0.0), 5.0, &p(8.0, 0.0), 5.0).unwrap();
        assert_abs_diff_eq!(right.x, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(right.y, -3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(left.y, 3.0, epsilon = 1e-12);
        assert!(intersections_two_circles(&p(0.0, 0.0), 1.0, &p(8.0, 0.0), 1.0).is_none());
        assert!(intersections_two_circles(&p(0.0, 0.0), 1.0, &p(0.0, 0.0), 1.0).is_none());
    }

    #[test]
    fn segment_circle_hits() {
        let hits = intersections_segment_circle(&p(-5.0, 0.0), &p(5.0, 0.0), &p(0.0, 0.0), 2.0);
        assert_eq!(hits.len(), 2);
        assert_abs_diff_eq!(hits[0].x, -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hits[1].x, 2.0, epsilon = 1e-12);

        let inside = intersections_segment_circle(&p(-1.0, 0.0), &p(1.0, 0.0), &p(0.0, 0.0), 2.0);
        assert!(inside.is_empty());
        assert!(segment_intersects_disk(&p(-1.0, 0.0), &p(1.0, 0.0), &p(0.0, 0.0), 2.0));
    }

    #[test]
    fn convexity_of_quads() {
        assert!(is_convex(&p(0.0, 0.0), &p(2.0, 0.0), &p(2.0, 2.0), &p(0.0, 2.0)));
        assert!(is_convex(&p(0.0, 2.0), &p(2.0, 2.0), &p(2.0, 0.0), &p(0.0, 0.0)));
        // dart: d pokes into the hull
        assert!(!is_convex(&p(0.0, 0.0), &p(4.0, 0.0), &p(0.0, 4.0), &p(1.0, 1.0)));
    }
}
