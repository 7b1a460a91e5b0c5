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

use log::debug;

use crate::{
    config::NavConfig,
    geometry::Point2,
    mesh::Mesh,
    navigation::{astar::ClearanceAStar, corridor::Corridor, funnel::FunnelSmoother},
    numeric::scalar::Scalar,
};

/// A circular agent standing on the mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Agent<T: Scalar> {
    pub position: Point2<T>,
    pub radius: T,
}

impl<T: Scalar> Agent<T> {
    pub fn new(position: Point2<T>, radius: T) -> Self {
        Self { position, radius }
    }
}

/// Plans paths for one agent over one mesh.
#[derive(Debug)]
pub struct PathFinder<'a, T: Scalar> {
    mesh: &'a Mesh<T>,
    agent: Agent<T>,
    astar: ClearanceAStar<'a, T>,
    funnel: FunnelSmoother<T>,
    last_corridor: Corridor,
}

impl<'a, T: Scalar> PathFinder<'a, T> {
    pub fn new(mesh: &'a Mesh<T>, agent: Agent<T>, config: &NavConfig) -> Self {
        debug_assert!(agent.radius >= T::zero(), "negative agent radius");
        Self {
            mesh,
            agent,
            astar: ClearanceAStar::new(mesh, agent.radius, &config.astar),
            funnel: FunnelSmoother::new(agent.radius, config),
            last_corridor: Corridor::default(),
        }
    }

    pub fn mesh(&self) -> &'a Mesh<T> {
        self.mesh
    }

    pub fn agent(&self) -> &Agent<T> {
        &self.agent
    }

    pub fn set_position(&mut self, position: Point2<T>) {
        self.agent.position = position;
    }

    /// Rebinds the radius used by both search and smoothing.
    pub fn set_radius(&mut self, radius: T) {
        debug_assert!(radius >= T::zero(), "negative agent radius");
        self.agent.radius = radius;
        self.astar.set_radius(radius);
        self.funnel.set_radius(radius);
    }

    /// Corridor found by the most recent search.
    pub fn last_corridor(&self) -> &Corridor {
        &self.last_corridor
    }

    /// Path from the agent's position to `goal`; empty when unreachable.
    pub fn find_path(&mut self, goal: Point2<T>) -> Vec<Point2<T>> {
        debug_assert!(self.agent.radius >= T::zero(), "negative agent radius");
        self.last_corridor = Corridor::default();

        if self
            .mesh
            .is_circle_intersecting_any_constraint(&goal, self.agent.radius)
        {
            debug!(
                "[PathFinder] goal {:?} blocked for radius {:?}",
                goal, self.agent.radius
            );
            return Vec::new();
        }

        let start = self.agent.position;
        self.last_corridor = self.astar.find_path(start, goal);
        if self.last_corridor.is_empty() {
            debug!("[PathFinder] no corridor from {:?} to {:?}", start, goal);
            return Vec::new();
        }

        let path = self
            .funnel
            .find_path(self.mesh, start, goal, &self.last_corridor);
        debug!(
            "[PathFinder] {} faces -> {} waypoints",
            self.last_corridor.len(),
            path.len()
        );
        path
    }
}
