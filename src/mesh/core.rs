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
use log::debug;

use crate::{
    config::NavConfig,
    error::{MeshError, Result},
    geometry::Point2,
    impl_mesh,
    kernel::orient2d,
    mesh::{face::Face, half_edge::HalfEdge, vertex::Vertex},
};

impl_mesh! {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            half_edges: Vec::new(),
            faces: Vec::new(),
            edge_map: AHashMap::new(),
            epsilon: T::default_epsilon(),
            locate_max_steps: 1000,
        }
    }

    /// Assembles a mesh from an externally produced triangulation.
    ///
    /// `constraints` lists vertex pairs whose edge must not be crossed.
    /// Boundary edges are always constrained.
    pub fn from_triangles(
        points: &[Point2<T>],
        triangles: &[[usize; 3]],
        constraints: &[(usize, usize)],
    ) -> Result<Self> {
        let mut mesh = Self::new();
        for p in points {
            mesh.add_vertex(*p);
        }
        for &[a, b, c] in triangles {
            mesh.add_triangle(a, b, c)?;
        }
        mesh.build_boundary_loops();
        for &(a, b) in constraints {
            mesh.constrain_edge(a, b)?;
        }
        debug!(
            "[Mesh] assembled {} vertices, {} faces, {} half-edges",
            mesh.vertices.len(),
            mesh.faces.len(),
            mesh.half_edges.len()
        );
        Ok(mesh)
    }

    /// Axis-aligned `width x height` rectangle split along its `(0,0)-(w,h)` diagonal.
    pub fn rectangle(width: T, height: T) -> Result<Self> {
        if !(width > T::zero() && height > T::zero()) {
            return Err(MeshError::InvalidExtent {
                width: width.as_f64(),
                height: height.as_f64(),
            });
        }
        let zero = T::zero();
        let points = [
            Point2::new(zero, zero),
            Point2::new(width, zero),
            Point2::new(width, height),
            Point2::new(zero, height),
        ];
        Self::from_triangles(&points, &[[0, 1, 2], [0, 2, 3]], &[])
    }

    pub fn apply_config(&mut self, config: &NavConfig) {
        self.epsilon = T::lit(config.epsilon);
        self.locate_max_steps = config.locate_max_steps;
    }

    pub fn epsilon(&self) -> T {
        self.epsilon
    }

    pub fn add_vertex(&mut self, position: Point2<T>) -> usize {
        let idx = self.vertices.len();
        self.vertices.push(Vertex::new(position));
        idx
    }

    /// Adds a triangle, re-ordering it counter-clockwise.
    ///
    /// Nothing is modified when an error is returned.
    pub fn add_triangle(&mut self, v0: usize, v1: usize, v2: usize) -> Result<usize> {
        let len = self.vertices.len();
        for index in [v0, v1, v2] {
            if index >= len {
                return Err(MeshError::VertexOutOfRange { index, len });
            }
        }

        let orient = orient2d(
            &self.vertices[v0].position,
            &self.vertices[v1].position,
            &self.vertices[v2].position,
        );
        if orient == T::zero() || v0 == v1 || v1 == v2 || v0 == v2 {
            return Err(MeshError::DegenerateTriangle(v0, v1, v2));
        }
        let (v1, v2) = if orient < T::zero() { (v2, v1) } else { (v1, v2) };

        let edge_vertices = [(v0, v1), (v1, v2), (v2, v0)];
        for &(from, to) in &edge_vertices {
            if let Some(&he) = self.edge_map.get(&(from, to)) {
                if self.half_edges[he].face.is_some() {
                    return Err(MeshError::NonManifoldEdge(from, to));
                }
            }
        }

        let face_idx = self.faces.len();
        let mut edge_indices = [usize::MAX; 3];

        for (i, &(from, to)) in edge_vertices.iter().enumerate() {
            let he_idx = match self.edge_map.get(&(from, to)) {
                // Placeholder created as the twin of a neighbouring face.
                Some(&he_idx) => he_idx,
                None => {
                    let he_idx = self.half_edges.len();
                    self.half_edges.push(HalfEdge::new(from));
                    self.edge_map.insert((from, to), he_idx);

                    let twin_idx = self.half_edges.len();
                    let mut twin = HalfEdge::new(to);
                    twin.twin = he_idx;
                    self.half_edges.push(twin);
                    self.edge_map.insert((to, from), twin_idx);
                    self.half_edges[he_idx].twin = twin_idx;
                    he_idx
                }
            };
            self.half_edges[he_idx].face = Some(face_idx);
            edge_indices[i] = he_idx;
        }

        for i in 0..3 {
            let curr = edge_indices[i];
            self.half_edges[curr].next = edge_indices[(i + 1) % 3];
            self.half_edges[curr].prev = edge_indices[(i + 2) % 3];
            let origin = self.half_edges[curr].origin;
            if self.vertices[origin].half_edge.is_none() {
                self.vertices[origin].half_edge = Some(curr);
            }
        }

        self.faces.push(Face::new(edge_indices[0]));
        Ok(face_idx)
    }

    /// Constrains every outer half-edge and links the outer loops through
    /// `next`/`prev`. Must run once after the last [`Self::add_triangle`].
    ///
    /// At a pinch vertex (two boundary loops touching) the loop continues
    /// through an arbitrary outgoing boundary half-edge.
    pub fn build_boundary_loops(&mut self) {
        let borders: Vec<usize> = (0..self.half_edges.len())
            .filter(|&h| self.half_edges[h].is_boundary())
            .collect();

        let mut by_origin: AHashMap<usize, usize> = AHashMap::with_capacity(borders.len());
        for &b in &borders {
            by_origin.entry(self.half_edges[b].origin).or_insert(b);
        }

        for &b in &borders {
            let twin = self.half_edges[b].twin;
            self.half_edges[b].constrained = true;
            self.half_edges[twin].constrained = true;

            let head = self.half_edges[twin].origin;
            if let Some(&nb) = by_origin.get(&head) {
                self.half_edges[b].next = nb;
                self.half_edges[nb].prev = b;
            }
        }
    }

    /// Marks the edge between `a` and `b` (both directions) as impassable.
    pub fn constrain_edge(&mut self, a: usize, b: usize) -> Result<()> {
        let he = self
            .edge_map
            .get(&(a, b))
            .copied()
            .ok_or(MeshError::UnknownEdge(a, b))?;
        let twin = self.half_edges[he].twin;
        self.half_edges[he].constrained = true;
        self.half_edges[twin].constrained = true;
        Ok(())
    }

    /// Checks the structural invariants the query algorithms rely on.
    pub fn validate(&self) -> Result<()> {
        let broken = |element: String, reason: &str| MeshError::BrokenTopology {
            element,
            reason: reason.to_string(),
        };
        let m = self.half_edges.len();

        for (h, he) in self.half_edges.iter().enumerate() {
            if he.twin >= m || self.half_edges[he.twin].twin != h {
                return Err(broken(format!("half-edge {h}"), "twin is not symmetric"));
            }
            if he.next >= m || he.prev >= m {
                return Err(broken(format!("half-edge {h}"), "next/prev not linked"));
            }
            if self.half_edges[he.next].prev != h || self.half_edges[he.prev].next != h {
                return Err(broken(format!("half-edge {h}"), "next/prev not reciprocal"));
            }
            if self.half_edges[he.next].origin != self.half_edges[he.twin].origin {
                return Err(broken(format!("half-edge {h}"), "next does not start at destination"));
            }
            if he.is_boundary() && !he.constrained {
                return Err(broken(format!("half-edge {h}"), "outer half-edge is not constrained"));
            }
            if he.constrained != self.half_edges[he.twin].constrained {
                return Err(broken(format!("half-edge {h}"), "constraint flag differs from twin"));
            }
        }

        for f in 0..self.faces.len() {
            let [e0, e1, e2] = self.face_half_edges(f);
            if self.half_edges[e2].next != e0 {
                return Err(broken(format!("face {f}"), "boundary is not a 3-cycle"));
            }
            if [e0, e1, e2].iter().any(|&e| self.half_edges[e].face != Some(f)) {
                return Err(broken(format!("face {f}"), "half-edge points at another face"));
            }
            let [a, b, c] = self.face_vertices(f);
            let orient = orient2d(
                &self.vertices[a].position,
                &self.vertices[b].position,
                &self.vertices[c].position,
            );
            if orient <= T::zero() {
                return Err(broken(format!("face {f}"), "not counter-clockwise"));
            }
        }

        Ok(())
    }
}

impl<T: crate::numeric::scalar::Scalar> Default for crate::mesh::Mesh<T> {
    fn default() -> Self {
        Self::new()
    }
}
