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

use smallvec::SmallVec;

use crate::{
    geometry::{Point2, Segment2},
    impl_mesh,
    kernel::{distance_squared_point_to_segment, project_orthogonal},
};

impl_mesh! {
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn position(&self, v: usize) -> Point2<T> {
        self.vertices[v].position
    }

    pub fn origin(&self, he: usize) -> usize {
        self.half_edges[he].origin
    }

    pub fn destination(&self, he: usize) -> usize {
        self.half_edges[self.half_edges[he].twin].origin
    }

    pub fn twin(&self, he: usize) -> usize {
        self.half_edges[he].twin
    }

    pub fn next(&self, he: usize) -> usize {
        self.half_edges[he].next
    }

    pub fn prev(&self, he: usize) -> usize {
        self.half_edges[he].prev
    }

    /// Face on the left of `he`; `None` for the outer face.
    pub fn left_face(&self, he: usize) -> Option<usize> {
        self.half_edges[he].face
    }

    pub fn right_face(&self, he: usize) -> Option<usize> {
        self.left_face(self.twin(he))
    }

    pub fn is_constrained(&self, he: usize) -> bool {
        self.half_edges[he].constrained
    }

    /// True when `a` and `b` are the same undirected edge.
    pub fn same_edge(&self, a: usize, b: usize) -> bool {
        a == b || self.twin(a) == b
    }

    pub fn segment(&self, he: usize) -> Segment2<T> {
        Segment2::new(
            self.position(self.origin(he)),
            self.position(self.destination(he)),
        )
    }

    pub fn half_edge_between(&self, a: usize, b: usize) -> Option<usize> {
        self.edge_map.get(&(a, b)).copied()
    }

    /// The three half-edges of `f` in counter-clockwise order.
    pub fn face_half_edges(&self, f: usize) -> [usize; 3] {
        let e0 = self.faces[f].half_edge;
        let e1 = self.half_edges[e0].next;
        let e2 = self.half_edges[e1].next;
        debug_assert_eq!(self.half_edges[e2].next, e0, "face {f} is not a triangle");
        [e0, e1, e2]
    }

    pub fn face_vertices(&self, f: usize) -> [usize; 3] {
        self.face_half_edges(f).map(|he| self.half_edges[he].origin)
    }

    /// Half-edges of `f` not shared with the outer face.
    pub fn inner_edges(&self, f: usize) -> SmallVec<[usize; 3]> {
        self.face_half_edges(f)
            .into_iter()
            .filter(|&he| self.right_face(he).is_some())
            .collect()
    }

    /// Outgoing half-edges of `v`, rotating counter-clockwise.
    pub fn outgoing_half_edges(&self, v: usize) -> SmallVec<[usize; 8]> {
        let mut out = SmallVec::new();
        let Some(start) = self.vertices[v].half_edge else {
            return out;
        };

        let mut he = start;
        loop {
            out.push(he);
            let prev = self.half_edges[he].prev;
            if prev == usize::MAX || out.len() > self.half_edges.len() {
                break;
            }
            he = self.half_edges[prev].twin;
            if he == start {
                break;
            }
        }
        out
    }

    /// Interior faces around `v`, in rotation order.
    pub fn incident_faces(&self, v: usize) -> SmallVec<[usize; 8]> {
        self.outgoing_half_edges(v)
            .into_iter()
            .filter_map(|he| self.half_edges[he].face)
            .collect()
    }

    pub fn distance_squared_vertex_to_edge(&self, v: usize, he: usize) -> T {
        let seg = self.segment(he);
        distance_squared_point_to_segment(&self.position(v), &seg.a, &seg.b)
    }

    /// Orthogonal projection of `p` onto the supporting line of `he`.
    pub fn project_orthogonal(&self, p: &Point2<T>, he: usize) -> Point2<T> {
        let seg = self.segment(he);
        project_orthogonal(p, &seg.a, &seg.b)
    }
}
