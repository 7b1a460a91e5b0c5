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

use crate::{
    geometry::{Point2, Vector2},
    numeric::scalar::Scalar,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<T: Scalar> {
    pub a: Point2<T>,
    pub b: Point2<T>,
}

impl<T: Scalar> Segment2<T> {
    pub fn new(a: Point2<T>, b: Point2<T>) -> Self {
        Self { a, b }
    }

    pub fn direction(&self) -> Vector2<T> {
        self.b - self.a
    }

    pub fn length2(&self) -> T {
        self.direction().norm2()
    }

    pub fn length(&self) -> T {
        self.direction().norm()
    }

    pub fn midpoint(&self) -> Point2<T> {
        self.a.midpoint(&self.b)
    }

    /// Point at parameter `t` along `a -> b`.
    pub fn point_at(&self, t: T) -> Point2<T> {
        self.a.lerp(&self.b, t)
    }

    pub fn inverse(&self) -> Self {
        Self::new(self.b, self.a)
    }
}
