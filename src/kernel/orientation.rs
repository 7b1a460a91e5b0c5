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

use crate::geometry::Point2;
use crate::kernel::predicates::distance_squared_point_to_line;
use crate::numeric::scalar::Scalar;

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
pub fn orient2d<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Position of a point relative to a directed line, in a y-up frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

impl Orientation {
    pub fn from_value<T: Scalar>(v: T) -> Self {
        if v > T::zero() {
            Orientation::CounterClockwise
        } else if v < T::zero() {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }

    /// `+1`, `0` or `-1`.
    pub fn sign(self) -> i32 {
        match self {
            Orientation::Clockwise => -1,
            Orientation::Collinear => 0,
            Orientation::CounterClockwise => 1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::Collinear => Orientation::Collinear,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }
}

/// Exact side of `p` relative to the directed line `a -> b`.
pub fn side<T: Scalar>(a: &Point2<T>, b: &Point2<T>, p: &Point2<T>) -> Orientation {
    Orientation::from_value(orient2d(a, b, p))
}

/// Like [`side`], but reports `Collinear` whenever `p` lies within `eps`
/// of the supporting line.
pub fn side_tolerant<T: Scalar>(
    a: &Point2<T>,
    b: &Point2<T>,
    p: &Point2<T>,
    eps: T,
) -> Orientation {
    if distance_squared_point_to_line(p, a, b) <= eps * eps {
        return Orientation::Collinear;
    }
    side(a, b, p)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn orientation_signs() {
        let a = p(0.0, 0.0);
        let b = p(1.0, 0.0);
        assert_eq!(side(&a, &b, &p(0.5, 1.0)), Orientation::CounterClockwise);
        assert_eq!(side(&a, &b, &p(0.5, -1.0)), Orientation::Clockwise);
        assert_eq!(side(&a, &b, &p(3.0, 0.0)), Orientation::Collinear);
        assert_eq!(orient2d(&a, &b, &p(0.0, 2.0)), 2.0);

        assert_eq!(Orientation::CounterClockwise.sign(), 1);
        assert_eq!(Orientation::Clockwise.reversed(), Orientation::CounterClockwise);
        assert_eq!(Orientation::Collinear.reversed(), Orientation::Collinear);
    }

    #[test]
    fn tolerant_side_snaps_near_line() {
        let a = p(0.0, 0.0);
        let b = p(10.0, 0.0);
        assert_eq!(
            side_tolerant(&a, &b, &p(5.0, 1e-4), 1e-3),
            Orientation::Collinear
        );
        assert_eq!(
            side_tolerant(&a, &b, &p(5.0, 1e-2), 1e-3),
            Orientation::CounterClockwise
        );
    }
}
