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

use thiserror::Error;

/// Errors raised while assembling or validating a [`crate::mesh::Mesh`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// A triangle references a vertex that was never added.
    #[error("vertex index {index} out of range (mesh has {len} vertices)")]
    VertexOutOfRange { index: usize, len: usize },

    /// The three corners are collinear or repeated.
    #[error("degenerate triangle ({0}, {1}, {2})")]
    DegenerateTriangle(usize, usize, usize),

    /// Both directions of an edge are already bound to faces.
    #[error("non-manifold edge ({0}, {1})")]
    NonManifoldEdge(usize, usize),

    /// No half-edge joins the two vertices.
    #[error("no edge between vertices {0} and {1}")]
    UnknownEdge(usize, usize),

    /// Rectangle factory received a non-positive extent.
    #[error("invalid rectangle extent {width} x {height}")]
    InvalidExtent { width: f64, height: f64 },

    /// Structural invariant violated; carries the offending element.
    #[error("broken topology at {element}: {reason}")]
    BrokenTopology { element: String, reason: String },
}

/// Errors raised while loading a [`crate::config::NavConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Raised when a radius-inflated path cannot be built around a corner.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SmoothingError {
    /// No tangent exists between the two funnel points (circles overlap or
    /// the point lies inside the circle).
    #[error("no tangent between funnel points {0} and {1}")]
    NoTangent(usize, usize),

    /// Consecutive corridor edges share no vertex.
    #[error("corridor breaks at edge {0}")]
    BrokenCorridor(usize),
}

pub type Result<T> = std::result::Result<T, MeshError>;
