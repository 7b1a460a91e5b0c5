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

//! Face-graph A* with an agent-radius clearance test.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};
use smallvec::{SmallVec, smallvec};

use crate::{
    config::AStarConfig,
    geometry::Point2,
    kernel::{distance_squared_point_to_segment, segments_intersect},
    mesh::{LocateResult, Mesh},
    navigation::{clearance::is_walkable_by_radius, corridor::Corridor},
    numeric::scalar::Scalar,
};

const NONE: usize = usize::MAX;

/// A face waiting in the open set.
#[derive(Clone, Copy, Debug)]
struct SearchNode<T: Scalar> {
    face: usize,
    f_cost: T,
}

impl<T: Scalar> Eq for SearchNode<T> {}

impl<T: Scalar> PartialEq for SearchNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.face == other.face && self.f_cost == other.f_cost
    }
}

impl<T: Scalar> Ord for SearchNode<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; lower face index wins ties
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.face.cmp(&self.face))
    }
}

impl<T: Scalar> PartialOrd for SearchNode<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NodeState {
    Open,
    Closed,
}

/// Per-face search arrays, reused across queries.
///
/// An entry is live only when its stamp equals the current generation, so
/// starting a query never clears the arrays.
#[derive(Debug, Default)]
struct SearchScratch<T: Scalar> {
    generation: u32,
    stamp: Vec<u32>,
    state: Vec<NodeState>,
    g_cost: Vec<T>,
    f_cost: Vec<T>,
    entry_edge: Vec<usize>,
    entry_point: Vec<Point2<T>>,
    predecessor: Vec<usize>,
    open: BinaryHeap<SearchNode<T>>,
}

impl<T: Scalar> SearchScratch<T> {
    fn begin(&mut self, face_count: usize) {
        if self.stamp.len() < face_count {
            self.stamp.resize(face_count, 0);
            self.state.resize(face_count, NodeState::Open);
            self.g_cost.resize(face_count, T::zero());
            self.f_cost.resize(face_count, T::zero());
            self.entry_edge.resize(face_count, NONE);
            self.entry_point.resize(face_count, Point2::origin());
            self.predecessor.resize(face_count, NONE);
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.stamp.fill(0);
            self.generation = 1;
        }
        self.open.clear();
    }

    fn state(&self, face: usize) -> Option<NodeState> {
        (self.stamp[face] == self.generation).then(|| self.state[face])
    }

    fn open_face(&mut self, face: usize, g: T, f: T, edge: usize, entry: Point2<T>, from: usize) {
        self.stamp[face] = self.generation;
        self.state[face] = NodeState::Open;
        self.g_cost[face] = g;
        self.f_cost[face] = f;
        self.entry_edge[face] = edge;
        self.entry_point[face] = entry;
        self.predecessor[face] = from;
        self.open.push(SearchNode { face, f_cost: f });
    }

    fn close(&mut self, face: usize) {
        self.state[face] = NodeState::Closed;
    }
}

/// Diagnostics from the most recent search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AStarStats {
    /// Faces popped and expanded
    pub faces_expanded: usize,
    /// Transitions rejected by the clearance test
    pub clearance_rejections: usize,
}

/// A* over the faces of a bound mesh for an agent of fixed radius.
#[derive(Debug)]
pub struct ClearanceAStar<'a, T: Scalar> {
    mesh: &'a Mesh<T>,
    radius: T,
    config: AStarConfig,
    scratch: SearchScratch<T>,
    stats: AStarStats,
}

impl<'a, T: Scalar> ClearanceAStar<'a, T> {
    pub fn new(mesh: &'a Mesh<T>, radius: T, config: &AStarConfig) -> Self {
        debug_assert!(radius >= T::zero(), "negative agent radius");
        Self {
            mesh,
            radius,
            config: config.clone(),
            scratch: SearchScratch::default(),
            stats: AStarStats::default(),
        }
    }

    pub fn radius(&self) -> T {
        self.radius
    }

    pub fn set_radius(&mut self, radius: T) {
        debug_assert!(radius >= T::zero(), "negative agent radius");
        self.radius = radius;
    }

    pub fn last_stats(&self) -> AStarStats {
        self.stats
    }

    /// Corridor of faces from `start` to `goal`, empty when unreachable.
    pub fn find_path(&mut self, start: Point2<T>, goal: Point2<T>) -> Corridor {
        self.stats = AStarStats::default();
        let mesh = self.mesh;

        let Some(start_faces) = self.resolve_start(&start) else {
            debug!("[AStar] FAILED: start {:?} is outside the mesh or on a wall", start);
            return Corridor::default();
        };
        let Some(goal_faces) = self.resolve_goal(&goal) else {
            debug!("[AStar] FAILED: goal {:?} is outside the mesh", goal);
            return Corridor::default();
        };
        if let Some(&shared) = start_faces.iter().find(|&&f| goal_faces.contains(&f)) {
            return Corridor::single(shared);
        }

        let scratch = &mut self.scratch;
        scratch.begin(mesh.face_count());
        let h = start.distance(&goal);
        for &face in &start_faces {
            scratch.open_face(face, T::zero(), h, NONE, start, NONE);
        }

        let mut reached = None;
        while let Some(node) = scratch.open.pop() {
            let current = node.face;
            if scratch.state(current) != Some(NodeState::Open) || node.f_cost > scratch.f_cost[current] {
                continue;
            }
            if goal_faces.contains(&current) {
                reached = Some(current);
                break;
            }

            self.stats.faces_expanded += 1;
            if self.stats.faces_expanded > self.config.max_iterations {
                debug!(
                    "[AStar] FAILED: iteration cap {} reached",
                    self.config.max_iterations
                );
                return Corridor::default();
            }

            for edge in mesh.inner_edges(current) {
                if mesh.is_constrained(edge) {
                    continue;
                }
                let Some(neighbour) = mesh.right_face(edge) else {
                    continue;
                };
                let seen = scratch.state(neighbour);
                if seen == Some(NodeState::Closed) {
                    continue;
                }

                if scratch.entry_edge[current] != NONE
                    && self.radius > T::zero()
                    && !is_walkable_by_radius(
                        mesh,
                        scratch.entry_edge[current],
                        current,
                        edge,
                        self.radius,
                    )
                {
                    self.stats.clearance_rejections += 1;
                    trace!("[AStar] face {} -> {} too narrow", current, neighbour);
                    continue;
                }

                let from_point = scratch.entry_point[current];
                let entry = entry_point(mesh, &from_point, &goal, edge);
                let g = scratch.g_cost[current] + from_point.distance(&entry);
                let f = g + entry.distance(&goal);

                let improves = match seen {
                    None => true,
                    Some(_) => f < scratch.f_cost[neighbour],
                };
                if improves {
                    scratch.open_face(neighbour, g, f, edge, entry, current);
                }
            }

            scratch.close(current);
        }

        let Some(goal_face) = reached else {
            debug!(
                "[AStar] FAILED: open set exhausted after {} faces",
                self.stats.faces_expanded
            );
            return Corridor::default();
        };

        let mut faces = vec![goal_face];
        let mut edges = Vec::new();
        let mut current = goal_face;
        while scratch.predecessor[current] != NONE {
            edges.push(scratch.entry_edge[current]);
            current = scratch.predecessor[current];
            faces.push(current);
        }
        faces.reverse();
        edges.reverse();

        debug!(
            "[AStar] corridor of {} faces, {} expanded",
            faces.len(),
            self.stats.faces_expanded
        );
        Corridor { faces, edges }
    }

    /// Faces the agent may start from; `None` when it would stand on a wall.
    ///
    /// A point on an edge or vertex belongs to every face around it.
    fn resolve_start(&self, p: &Point2<T>) -> Option<FaceSet> {
        let mesh = self.mesh;
        match mesh.locate(p)? {
            LocateResult::Edge(he) if mesh.is_constrained(he) => None,
            LocateResult::Vertex(v)
                if mesh
                    .outgoing_half_edges(v)
                    .iter()
                    .any(|&he| mesh.is_constrained(he)) =>
            {
                None
            }
            loc => Some(faces_around(mesh, loc)),
        }
    }

    /// Faces that count as arriving at `p`. Walls are legal goals.
    fn resolve_goal(&self, p: &Point2<T>) -> Option<FaceSet> {
        let faces = faces_around(self.mesh, self.mesh.locate(p)?);
        (!faces.is_empty()).then_some(faces)
    }
}

type FaceSet = SmallVec<[usize; 8]>;

fn faces_around<T: Scalar>(mesh: &Mesh<T>, loc: LocateResult) -> FaceSet {
    match loc {
        LocateResult::Face(f) => smallvec![f],
        LocateResult::Edge(he) => mesh
            .left_face(he)
            .into_iter()
            .chain(mesh.right_face(he))
            .collect(),
        LocateResult::Vertex(v) => mesh.incident_faces(v),
    }
}

/// Where the straight line `from -> goal` crosses `edge`, or the endpoint of
/// `edge` nearest to that segment.
fn entry_point<T: Scalar>(
    mesh: &Mesh<T>,
    from: &Point2<T>,
    goal: &Point2<T>,
    edge: usize,
) -> Point2<T> {
    let seg = mesh.segment(edge);
    if let Some(hit) = segments_intersect(from, goal, &seg.a, &seg.b) {
        return hit;
    }
    let da = distance_squared_point_to_segment(&seg.a, from, goal);
    let db = distance_squared_point_to_segment(&seg.b, from, goal);
    if da <= db { seg.a } else { seg.b }
}
