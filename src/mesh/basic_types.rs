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

use ahash::AHashMap;

use crate::{
    mesh::{face::Face, half_edge::HalfEdge, vertex::Vertex},
    numeric::scalar::Scalar,
};

/// Where a query point falls on the subdivision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocateResult {
    /// Coincident with a vertex.
    Vertex(usize),
    /// On a half-edge (the one bounding the face the point was classified in).
    Edge(usize),
    /// Strictly inside a face.
    Face(usize),
}

/// Constrained planar triangulation stored as index arenas.
///
/// Interior faces are counter-clockwise triangles; the outer face is
/// represented by `face == None` on boundary half-edges. Every boundary
/// half-edge (and its twin) is constrained.
#[derive(Debug, Clone)]
pub struct Mesh<T: Scalar> {
    pub vertices: Vec<Vertex<T>>,
    pub half_edges: Vec<HalfEdge>,
    pub faces: Vec<Face>,

    pub edge_map: AHashMap<(usize, usize), usize>,
    pub(crate) epsilon: T,
    pub(crate) locate_max_steps: usize,
}
