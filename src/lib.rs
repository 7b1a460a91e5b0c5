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

//! Radius-aware pathfinding over a constrained planar triangulation.
//!
//! A [`ClearanceAStar`] search finds a corridor of faces wide enough for the
//! agent, and a [`FunnelSmoother`] pulls it into a taut polyline, inflated
//! around obstacle corners by the agent radius.

pub mod config;
pub mod error;
pub mod geometry;
pub mod kernel;
pub mod mesh;
pub mod navigation;
pub mod numeric;

pub use config::{AStarConfig, NavConfig};
pub use error::{ConfigError, MeshError, SmoothingError};
pub use geometry::{Point2, Segment2, Vector2};
pub use mesh::{LocateResult, Mesh};
pub use navigation::{
    Agent, ClearanceAStar, Corridor, FunnelSmoother, LinearPathSampler, PathFinder, Side,
};
pub use numeric::scalar::Scalar;
