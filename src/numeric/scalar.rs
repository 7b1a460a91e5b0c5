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

use std::fmt::Debug;

use num_traits::{Float, FloatConst, NumAssignOps};

/// Coordinate type shared by every geometric structure in the crate.
pub trait Scalar:
    Float + FloatConst + NumAssignOps + Debug + Default + Send + Sync + 'static
{
    /// Converts an `f64` literal into this scalar.
    fn lit(v: f64) -> Self;

    /// Tolerance used when no configuration is supplied.
    fn default_epsilon() -> Self;

    fn two() -> Self {
        Self::one() + Self::one()
    }

    fn half() -> Self {
        Self::lit(0.5)
    }

    /// Lossy conversion used for seeding and diagnostics.
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(0.0)
    }
}

impl Scalar for f64 {
    #[inline(always)]
    fn lit(v: f64) -> Self {
        v
    }

    fn default_epsilon() -> Self {
        1e-6
    }
}

impl Scalar for f32 {
    #[inline(always)]
    fn lit(v: f64) -> Self {
        v as f32
    }

    fn default_epsilon() -> Self {
        1e-4
    }
}
