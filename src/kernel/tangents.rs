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

//! Tangent constructions between points and equal-radius circles.
//!
//! Every result is ordered relative to the directed line from the first
//! argument towards the second one, in a y-up frame: "right" points lie on
//! the clockwise side of that line, "left" points on the counter-clockwise side.

use crate::geometry::Point2;
use crate::kernel::predicates::intersections_two_circles;
use crate::numeric::scalar::Scalar;

/// Tangent points on the circle `(center, r)` seen from `p`, as `[right, left]`.
///
/// `None` when `p` lies inside (or on) the circle.
pub fn tangent_point_to_circle<T: Scalar>(
    p: &Point2<T>,
    center: &Point2<T>,
    r: T,
) -> Option<[Point2<T>; 2]> {
    let half_dist = p.distance(center) * T::half();
    if half_dist * T::two() <= r {
        return None;
    }
    intersections_two_circles(&p.midpoint(center), half_dist, center, r)
}

/// The two outer tangents of circles `(c1, r)` and `(c2, r)`.
///
/// Returns `[t1, t2, t3, t4]`: `t1`/`t4` are the right tangent's contact
/// points on `c1`/`c2`, `t2`/`t3` the left tangent's.
pub fn tangents_parallel_circle_to_circle<T: Scalar>(
    r: T,
    c1: &Point2<T>,
    c2: &Point2<T>,
    eps: T,
) -> Option<[Point2<T>; 4]> {
    let d = *c2 - *c1;
    let dist = d.norm();
    if dist <= eps {
        return None;
    }

    let offset = d.perp_cw() * (r / dist);
    let t1 = *c1 + offset;
    let t2 = *c1 - offset;
    let t3 = t2 + d;
    let t4 = t1 + d;
    Some([t1, t2, t3, t4])
}

/// The two inner (crossing) tangents of circles `(c1, r)` and `(c2, r)`.
///
/// Returns `[t1, t2, t3, t4]` where `t1`/`t2` are the right/left contact
/// points on `c1`, and the tangent lines are `t1 -> t3` (right of `c1`, left
/// of `c2`) and `t2 -> t4` (left of `c1`, right of `c2`).
/// `None` when the circles touch or overlap.
pub fn tangents_crossed_circle_to_circle<T: Scalar>(
    r: T,
    c1: &Point2<T>,
    c2: &Point2<T>,
) -> Option<[Point2<T>; 4]> {
    let d = *c2 - *c1;
    let dist2 = d.norm2();
    let dist = dist2.sqrt();
    if dist <= T::two() * r {
        return None;
    }

    // Thales circle over [c1, mid] holds both contact points on c1.
    let quarter = T::lit(0.25);
    let thales_center = *c1 + d * quarter;
    let [t1, t2] = intersections_two_circles(c1, r, &thales_center, dist * quarter)?;

    let mid = c1.midpoint(c2);
    let normal = d.perp_cw();
    let along = (t1 - mid).dot(&normal) / dist2;
    let proj = mid + normal * along;
    let t4 = proj + (proj - t1);
    let t3 = t4 + (t2 - t1);
    Some([t1, t2, t3, t4])
}
