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

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::numeric::scalar::Scalar;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2<T: Scalar> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Vector2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3D cross product; positive when `other` is
    /// counter-clockwise from `self`.
    pub fn cross(&self, other: &Self) -> T {
        self.x * other.y - self.y * other.x
    }

    pub fn norm2(&self) -> T {
        self.dot(self)
    }

    pub fn norm(&self) -> T {
        self.norm2().sqrt()
    }

    /// Rotated a quarter turn clockwise (y-up frame).
    pub fn perp_cw(&self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Rotated a quarter turn counter-clockwise (y-up frame).
    pub fn perp_ccw(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Unit vector, or `None` for a zero-length input.
    pub fn normalized(&self) -> Option<Self> {
        let n = self.norm();
        if n > T::zero() { Some(*self / n) } else { None }
    }
}

impl<T: Scalar> Add for Vector2<T> {
    type Output = Vector2<T>;
    fn add(self, rhs: Vector2<T>) -> Vector2<T> {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Sub for Vector2<T> {
    type Output = Vector2<T>;
    fn sub(self, rhs: Vector2<T>) -> Vector2<T> {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> Mul<T> for Vector2<T> {
    type Output = Vector2<T>;
    fn mul(self, rhs: T) -> Vector2<T> {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Scalar> Div<T> for Vector2<T> {
    type Output = Vector2<T>;
    fn div(self, rhs: T) -> Vector2<T> {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: Scalar> Neg for Vector2<T> {
    type Output = Vector2<T>;
    fn neg(self) -> Vector2<T> {
        Vector2::new(-self.x, -self.y)
    }
}
