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

use std::ops::{Add, Sub};

use crate::{geometry::vector_2::Vector2, numeric::scalar::Scalar};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2<T: Scalar> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Point2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Builds a point from `f64` coordinates, converting to `T`.
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self {
            x: T::lit(x),
            y: T::lit(y),
        }
    }

    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero())
    }

    pub fn as_vector(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    pub fn distance2(&self, other: &Self) -> T {
        (*other - *self).norm2()
    }

    pub fn distance(&self, other: &Self) -> T {
        self.distance2(other).sqrt()
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new(
            (self.x + other.x) * T::half(),
            (self.y + other.y) * T::half(),
        )
    }

    /// Linear interpolation; `t == 0` yields `self`, `t == 1` yields `other`.
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        *self + (*other - *self) * t
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T: Scalar> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Scalar> Sub for Point2<T> {
    type Output = Vector2<T>;

    fn sub(self, rhs: Point2<T>) -> Vector2<T> {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> Add<Vector2<T>> for Point2<T> {
    type Output = Point2<T>;

    fn add(self, rhs: Vector2<T>) -> Point2<T> {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Sub<Vector2<T>> for Point2<T> {
    type Output = Point2<T>;

    fn sub(self, rhs: Vector2<T>) -> Point2<T> {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Arc length of a polyline.
pub fn path_length<T: Scalar>(points: &[Point2<T>]) -> T {
    points
        .windows(2)
        .fold(T::zero(), |acc, w| acc + w[0].distance(&w[1]))
}
