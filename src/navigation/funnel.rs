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

//! String pulling over a face corridor.
//!
//! The corridor's vertices are tagged by the wall they belong to and fed
//! through a left/right funnel. For a zero radius the funnel apexes are the
//! path; otherwise [`crate::navigation::smoothing`] inflates them.

use std::cmp::Ordering;

use log::{debug, trace, warn};

use crate::{
    config::NavConfig,
    error::SmoothingError,
    geometry::{Point2, Vector2},
    kernel::{
        Orientation, are_equal, distance_squared_point_to_segment, segments_intersect, side,
    },
    mesh::Mesh,
    navigation::{corridor::Corridor, smoothing::Inflater},
    numeric::scalar::Scalar,
};

/// Which corridor wall a funnel point belongs to, relative to the travel
/// direction (left is counter-clockwise, y-up).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    /// Start and goal
    OnPath,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::OnPath => Side::OnPath,
        }
    }
}

/// A point of the funnel arena, linked to the next point along the corridor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FunnelPoint<T: Scalar> {
    pub position: Point2<T>,
    pub side: Side,
    pub successor: Option<usize>,
}

/// Converts corridors into polylines for an agent of fixed radius.
#[derive(Clone, Debug)]
pub struct FunnelSmoother<T: Scalar> {
    radius: T,
    epsilon: T,
    push_factor: T,
    circle_samples: usize,
    sample_offsets: Vec<Vector2<T>>,
}

impl<T: Scalar> FunnelSmoother<T> {
    pub fn new(radius: T, config: &NavConfig) -> Self {
        debug_assert!(radius >= T::zero(), "negative agent radius");
        let circle_samples = config.circle_samples.max(3);
        Self {
            radius,
            epsilon: T::lit(config.epsilon),
            push_factor: T::lit(config.endpoint_push_factor),
            circle_samples,
            sample_offsets: circle_offsets(radius, circle_samples),
        }
    }

    pub fn radius(&self) -> T {
        self.radius
    }

    pub fn set_radius(&mut self, radius: T) {
        debug_assert!(radius >= T::zero(), "negative agent radius");
        self.radius = radius;
        self.sample_offsets = circle_offsets(radius, self.circle_samples);
    }

    /// Polyline from `start` to `goal` through `corridor`.
    ///
    /// Empty when the corridor is empty or when no tangent path exists for
    /// the current radius.
    pub fn find_path(
        &self,
        mesh: &Mesh<T>,
        start: Point2<T>,
        goal: Point2<T>,
        corridor: &Corridor,
    ) -> Vec<Point2<T>> {
        match self.try_find_path(mesh, start, goal, corridor) {
            Ok(path) => path,
            Err(err) => {
                warn!("[Funnel] radius {:?} infeasible: {}", self.radius, err);
                Vec::new()
            }
        }
    }

    pub fn try_find_path(
        &self,
        mesh: &Mesh<T>,
        start: Point2<T>,
        goal: Point2<T>,
        corridor: &Corridor,
    ) -> Result<Vec<Point2<T>>, SmoothingError> {
        if corridor.is_empty() {
            return Ok(Vec::new());
        }
        if corridor.len() == 1 && self.radius <= T::zero() {
            return Ok(vec![start, goal]);
        }

        let (faces, edges) = self.trim_to_endpoints(mesh, &start, &goal, corridor);
        let (start, goal) = if self.radius > T::zero() {
            (
                self.push_off_vertices(mesh, start, faces[0]),
                self.push_off_vertices(mesh, goal, faces[faces.len() - 1]),
            )
        } else {
            (start, goal)
        };
        if faces.len() == 1 {
            return Ok(vec![start, goal]);
        }

        let points = self.funnel_points(mesh, &start, &goal, faces[0], edges)?;
        let apexes = pull_string(&points);
        debug!(
            "[Funnel] {} corridor points, {} apexes",
            points.len(),
            apexes.len()
        );

        if self.radius <= T::zero() {
            return Ok(apexes.iter().map(|&i| points[i].position).collect());
        }

        Inflater::new(&points, self.radius, self.epsilon, &self.sample_offsets).run(&apexes)
    }

    /// Drops leading and trailing face/edge pairs whose crossed edge holds
    /// `start` or `goal`.
    ///
    /// The endpoint already stands on the next face, and the vertices of that
    /// edge must not become funnel corners at distance zero.
    fn trim_to_endpoints<'c>(
        &self,
        mesh: &Mesh<T>,
        start: &Point2<T>,
        goal: &Point2<T>,
        corridor: &'c Corridor,
    ) -> (&'c [usize], &'c [usize]) {
        let eps2 = self.epsilon * self.epsilon;
        let touches = |p: &Point2<T>, he: usize| {
            let seg = mesh.segment(he);
            distance_squared_point_to_segment(p, &seg.a, &seg.b) <= eps2
        };

        let mut faces = &corridor.faces[..];
        let mut edges = &corridor.edges[..];
        while let Some(&first) = edges.first() {
            if !touches(start, first) {
                break;
            }
            trace!("[Funnel] start lies on edge {}, skipping face {}", first, faces[0]);
            faces = &faces[1..];
            edges = &edges[1..];
        }
        while let Some(&last) = edges.last() {
            if !touches(goal, last) {
                break;
            }
            trace!(
                "[Funnel] goal lies on edge {}, skipping face {}",
                last,
                faces[faces.len() - 1]
            );
            faces = &faces[..faces.len() - 1];
            edges = &edges[..edges.len() - 1];
        }
        (faces, edges)
    }

    /// Moves `p` out of the radius around the nearest vertex of `face`,
    /// staying inside the face. A vertex `p` stands on is not a corner of
    /// the funnel and is ignored.
    fn push_off_vertices(&self, mesh: &Mesh<T>, p: Point2<T>, face: usize) -> Point2<T> {
        let nearest = mesh
            .face_vertices(face)
            .into_iter()
            .filter(|&v| !are_equal(&mesh.position(v), &p, self.epsilon))
            .map(|v| (v, mesh.position(v).distance2(&p)))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
        let Some((v, dist2)) = nearest else {
            return p;
        };
        if dist2 >= self.radius * self.radius {
            return p;
        }

        let corner = mesh.position(v);
        let away = (p - corner) / dist2.sqrt();
        let pushed = corner + away * (self.radius * self.push_factor);
        if mesh.classify_in_face(&pushed, face).is_some() {
            trace!("[Funnel] pushed {:?} off vertex {} to {:?}", p, v, pushed);
            return pushed;
        }

        // The push left the face: stop at its boundary.
        mesh.face_half_edges(face)
            .into_iter()
            .filter_map(|he| {
                let seg = mesh.segment(he);
                segments_intersect(&p, &pushed, &seg.a, &seg.b)
            })
            .max_by(|a, b| {
                a.distance2(&p)
                    .partial_cmp(&b.distance2(&p))
                    .unwrap_or(Ordering::Equal)
            })
            .unwrap_or(p)
    }

    /// Arena of start, corridor vertices in discovery order, then goal.
    ///
    /// Leaving `first_face` across its counter-clockwise half-edge `o -> d`
    /// puts `d` on the left wall and `o` on the right one.
    fn funnel_points(
        &self,
        mesh: &Mesh<T>,
        start: &Point2<T>,
        goal: &Point2<T>,
        first_face: usize,
        edges: &[usize],
    ) -> Result<Vec<FunnelPoint<T>>, SmoothingError> {
        let eps = self.epsilon;
        let mut points = Vec::with_capacity(edges.len() + 3);
        let mut push = |position: Point2<T>, side: Side| {
            // a wall vertex under an endpoint is not an obstacle to go around
            if side != Side::OnPath
                && (are_equal(&position, start, eps) || are_equal(&position, goal, eps))
            {
                trace!("[Funnel] corridor vertex {:?} under an endpoint", position);
                return;
            }
            points.push(FunnelPoint {
                position,
                side,
                successor: None,
            })
        };
        push(*start, Side::OnPath);

        let mut first = edges[0];
        if mesh.left_face(first) != Some(first_face) {
            first = mesh.twin(first);
        }
        if mesh.left_face(first) != Some(first_face) {
            return Err(SmoothingError::BrokenCorridor(edges[0]));
        }
        let (mut left, mut right) = (mesh.destination(first), mesh.origin(first));
        push(mesh.position(left), Side::Left);
        push(mesh.position(right), Side::Right);

        for &edge in &edges[1..] {
            let (a, b) = (mesh.origin(edge), mesh.destination(edge));
            let touches = |v: usize| a == v || b == v;
            let other = |v: usize| if a == v { b } else { a };
            match (touches(left), touches(right)) {
                (true, false) => {
                    right = other(left);
                    push(mesh.position(right), Side::Right);
                }
                (false, true) => {
                    left = other(right);
                    push(mesh.position(left), Side::Left);
                }
                _ => return Err(SmoothingError::BrokenCorridor(edge)),
            }
        }
        push(*goal, Side::OnPath);

        let last = points.len() - 1;
        for (i, point) in points.iter_mut().enumerate().take(last) {
            point.successor = Some(i + 1);
        }
        Ok(points)
    }
}

/// Counter-clockwise offsets of `samples` points on a circle of `radius`.
fn circle_offsets<T: Scalar>(radius: T, samples: usize) -> Vec<Vector2<T>> {
    let step = T::TAU() / T::lit(samples as f64);
    (0..samples)
        .map(|k| {
            let angle = step * T::lit(k as f64);
            Vector2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Index of the outermost funnel segment that `p` fails to keep on `keep`.
fn crossing_index<T: Scalar>(
    points: &[FunnelPoint<T>],
    funnel: &[usize],
    p: &Point2<T>,
    keep: Orientation,
) -> Option<usize> {
    (0..funnel.len().saturating_sub(1)).rev().find(|&j| {
        side(&points[funnel[j]].position, &points[funnel[j + 1]].position, p) != keep
    })
}

/// Drops points the newly appended tail makes redundant.
fn prune<T: Scalar>(points: &[FunnelPoint<T>], funnel: &mut Vec<usize>, keep: Orientation) {
    let Some(&tail) = funnel.last() else {
        return;
    };
    let p = points[tail].position;
    for j in (0..funnel.len().saturating_sub(2)).rev() {
        if side(&points[funnel[j]].position, &points[funnel[j + 1]].position, &p) == keep {
            break;
        }
        funnel.remove(j + 1);
    }
}

/// Apex indices of the taut path, start first and goal last.
pub(crate) fn pull_string<T: Scalar>(points: &[FunnelPoint<T>]) -> Vec<usize> {
    let goal = points.len() - 1;
    let mut left = vec![0];
    let mut right = vec![0];
    let mut path = vec![0];

    for idx in 1..goal {
        let p = points[idx].position;
        let (own, other, keep) = match points[idx].side {
            Side::Left => (&mut left, &mut right, Orientation::CounterClockwise),
            Side::Right => (&mut right, &mut left, Orientation::Clockwise),
            Side::OnPath => continue,
        };

        match crossing_index(points, other, &p, keep) {
            Some(j) => {
                path.extend_from_slice(&other[1..=j + 1]);
                let apex = other[j + 1];
                other.drain(..=j);
                *own = vec![apex, idx];
            }
            None => {
                own.push(idx);
                prune(points, own, keep);
            }
        }
    }

    let g = points[goal].position;
    if let Some(j) = crossing_index(points, &left, &g, Orientation::Clockwise) {
        path.extend_from_slice(&left[1..=j + 1]);
    } else if let Some(j) = crossing_index(points, &right, &g, Orientation::CounterClockwise) {
        path.extend_from_slice(&right[1..=j + 1]);
    }
    path.push(goal);
    path
}
