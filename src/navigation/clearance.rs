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

use crate::{mesh::Mesh, numeric::scalar::Scalar};

/// Whether an agent of `radius` entering `through_face` across `from_edge`
/// can leave it across `to_edge`.
///
/// The two edges share a pivot vertex `vc`; `va` and `vb` are their other
/// ends. Clearance is measured around the pivot, widening the search over
/// neighbouring faces when the edge facing the pivot is passable.
pub fn is_walkable_by_radius<T: Scalar>(
    mesh: &Mesh<T>,
    from_edge: usize,
    through_face: usize,
    to_edge: usize,
    radius: T,
) -> bool {
    let diameter = radius * T::two();
    let diameter2 = diameter * diameter;

    let Some((va, vb, vc)) = pivot_vertices(mesh, from_edge, to_edge) else {
        debug_assert!(false, "edges {from_edge} and {to_edge} share no vertex");
        return false;
    };
    let (pa, pb, pc) = (mesh.position(va), mesh.position(vb), mesh.position(vc));

    // Right or obtuse angle at va or vb: the pinch is the edge itself.
    if (pc - pa).dot(&(pb - pa)) <= T::zero() {
        return pc.distance2(&pa) >= diameter2;
    }
    if (pc - pb).dot(&(pa - pb)) <= T::zero() {
        return pc.distance2(&pb) >= diameter2;
    }

    let Some(adjacent) = mesh
        .face_half_edges(through_face)
        .into_iter()
        .find(|&he| !mesh.same_edge(he, from_edge) && !mesh.same_edge(he, to_edge))
    else {
        debug_assert!(false, "face {through_face} does not hold both edges");
        return false;
    };

    if mesh.is_constrained(adjacent) {
        let proj = mesh.project_orthogonal(&pc, adjacent);
        return proj.distance2(&pc) >= diameter2;
    }

    if pc.distance2(&pa) < diameter2 || pc.distance2(&pb) < diameter2 {
        return false;
    }

    let mut done: AHashSet<usize> = AHashSet::new();
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    done.insert(through_face);
    if let Some(face) = mesh.right_face(adjacent) {
        done.insert(face);
        queue.push_back((face, mesh.twin(adjacent)));
    }

    while let Some((face, entered_by)) = queue.pop_front() {
        for he in mesh.face_half_edges(face) {
            if he == entered_by {
                continue;
            }
            if mesh.distance_squared_vertex_to_edge(vc, he) >= diameter2 {
                continue;
            }
            if mesh.is_constrained(he) {
                trace!("[Clearance] wall {} within {:?} of pivot {}", he, diameter, vc);
                return false;
            }
            if let Some(next) = mesh.right_face(he) {
                if done.insert(next) {
                    queue.push_back((next, mesh.twin(he)));
                }
            }
        }
    }

    true
}

/// `(va, vb, vc)`: the far ends of `from_edge` and `to_edge` and their shared vertex.
fn pivot_vertices<T: Scalar>(
    mesh: &Mesh<T>,
    from_edge: usize,
    to_edge: usize,
) -> Option<(usize, usize, usize)> {
    let (fo, fd) = (mesh.origin(from_edge), mesh.destination(from_edge));
    let (to, td) = (mesh.origin(to_edge), mesh.destination(to_edge));

    if fo == to {
        Some((fd, td, fo))
    } else if fd == td {
        Some((fo, to, fd))
    } else if fo == td {
        Some((fd, to, fo))
    } else if fd == to {
        Some((fo, td, fd))
    } else {
        None
    }
}
