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

use std::collections::VecDeque;

use ahash::AHashSet;
use log::trace;
use rand::{Rng, SeedableRng, rngs::StdRng};
use smallvec::SmallVec;

use crate::{
    geometry::Point2,
    impl_mesh,
    kernel::{Orientation, segment_intersects_disk, side_tolerant},
    mesh::basic_types::LocateResult,
};

impl_mesh! {
    /// Classifies `p` against face `f`, or `None` when `p` is outside it.
    ///
    /// Corners win over edges and edges over the interior, each within the
    /// mesh tolerance.
    pub fn classify_in_face(&self, p: &Point2<T>, f: usize) -> Option<LocateResult> {
        let eps = self.epsilon;
        let eps2 = eps * eps;
        let edges = self.face_half_edges(f);

        for &he in &edges {
            let seg = self.segment(he);
            if side_tolerant(&seg.a, &seg.b, p, eps) == Orientation::Clockwise {
                return None;
            }
        }

        for &he in &edges {
            let v = self.origin(he);
            if self.position(v).distance2(p) <= eps2 {
                return Some(LocateResult::Vertex(v));
            }
        }

        for &he in &edges {
            if self.distance_squared_point_to_edge(p, he) <= eps2 {
                return Some(LocateResult::Edge(he));
            }
        }

        Some(LocateResult::Face(f))
    }

    /// Locates `p` by jump-and-walk, falling back to a linear scan when the
    /// walk leaves the mesh or cycles. `None` when `p` lies in the outer face.
    pub fn locate(&self, p: &Point2<T>) -> Option<LocateResult> {
        if self.faces.is_empty() || !p.is_finite() {
            return None;
        }

        let mut face = self.walk_seed_face(p);
        let mut visited: AHashSet<usize> = AHashSet::new();

        for step in 0..self.locate_max_steps {
            if let Some(found) = self.classify_in_face(p, face) {
                trace!("[Mesh] located {:?} after {} steps", found, step);
                return Some(found);
            }
            visited.insert(face);

            let crossing = self.face_half_edges(face).into_iter().find(|&he| {
                let seg = self.segment(he);
                side_tolerant(&seg.a, &seg.b, p, self.epsilon) == Orientation::Clockwise
            });
            match crossing.and_then(|he| self.right_face(he)) {
                Some(next) if !visited.contains(&next) => face = next,
                _ => break,
            }
        }

        trace!("[Mesh] walk gave up at face {}, scanning", face);
        self.locate_by_scan(p)
    }

    /// Exhaustive point location over every face, in index order.
    pub fn locate_by_scan(&self, p: &Point2<T>) -> Option<LocateResult> {
        (0..self.faces.len()).find_map(|f| self.classify_in_face(p, f))
    }

    /// True when a disk of radius `r` at `center` touches a constrained edge,
    /// or when `center` is outside the mesh.
    pub fn is_circle_intersecting_any_constraint(&self, center: &Point2<T>, r: T) -> bool {
        let Some(loc) = self.locate(center) else {
            return true;
        };

        let seeds: SmallVec<[usize; 8]> = match loc {
            LocateResult::Face(f) => SmallVec::from_slice(&[f]),
            LocateResult::Edge(he) => [self.left_face(he), self.right_face(he)]
                .into_iter()
                .flatten()
                .collect(),
            LocateResult::Vertex(v) => self.incident_faces(v),
        };

        let mut done: AHashSet<usize> = seeds.iter().copied().collect();
        let mut queue: VecDeque<usize> = seeds.into_iter().collect();

        while let Some(f) = queue.pop_front() {
            for he in self.face_half_edges(f) {
                let seg = self.segment(he);
                if !segment_intersects_disk(&seg.a, &seg.b, center, r) {
                    continue;
                }
                if self.is_constrained(he) {
                    return true;
                }
                if let Some(next) = self.right_face(he) {
                    if done.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }
        false
    }

    pub fn distance_squared_point_to_edge(&self, p: &Point2<T>, he: usize) -> T {
        let seg = self.segment(he);
        crate::kernel::distance_squared_point_to_segment(p, &seg.a, &seg.b)
    }

    /// Starting face for the walk: a face around the nearest of roughly
    /// n^(1/3) vertices drawn with a generator seeded from `p`.
    fn walk_seed_face(&self, p: &Point2<T>) -> usize {
        let n = self.vertices.len();
        let samples = ((n as f64).cbrt().ceil() as usize).max(1);
        let mut rng = StdRng::seed_from_u64(seed_from_point(p));

        let mut best: Option<(usize, T)> = None;
        for _ in 0..samples {
            let v = rng.random_range(0..n);
            if self.vertices[v].half_edge.is_none() {
                continue;
            }
            let d = self.position(v).distance2(p);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((v, d));
            }
        }

        best.and_then(|(v, _)| self.incident_faces(v).first().copied())
            .unwrap_or(0)
    }
}

fn seed_from_point<T: crate::numeric::scalar::Scalar>(p: &Point2<T>) -> u64 {
    let x = p.x.as_f64().to_bits();
    let y = p.y.as_f64().to_bits();
    x ^ y.rotate_left(29) ^ 0x9E37_79B9_7F4A_7C15
}
