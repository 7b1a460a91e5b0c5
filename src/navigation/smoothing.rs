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

//! Radius inflation of a pulled string.
//!
//! Every apex vertex becomes a circle of the agent radius. Consecutive apexes
//! are joined by the tangent that keeps each circle on its wall's side, and
//! corners are rounded with samples of the circle.

use log::trace;

use crate::{
    error::SmoothingError,
    geometry::{Point2, Vector2},
    kernel::{
        Orientation, distance_squared_point_to_segment, side, tangent_point_to_circle,
        tangents_crossed_circle_to_circle, tangents_parallel_circle_to_circle,
    },
    navigation::funnel::{FunnelPoint, Side},
    numeric::scalar::Scalar,
};

type SmoothResult<T> = Result<T, SmoothingError>;

pub(crate) struct Inflater<'p, T: Scalar> {
    points: &'p [FunnelPoint<T>],
    radius: T,
    epsilon: T,
    offsets: &'p [Vector2<T>],
}

impl<'p, T: Scalar> Inflater<'p, T> {
    pub(crate) fn new(
        points: &'p [FunnelPoint<T>],
        radius: T,
        epsilon: T,
        offsets: &'p [Vector2<T>],
    ) -> Self {
        Self {
            points,
            radius,
            epsilon,
            offsets,
        }
    }

    /// Inflated polyline for the apex chain `apexes` (start first, goal last).
    pub(crate) fn run(&self, apexes: &[usize]) -> SmoothResult<Vec<Point2<T>>> {
        let n = apexes.len();
        let mut new_path = Vec::with_capacity(n);
        let mut adjusted = Vec::with_capacity(2 * n);

        let mut emit = |a: usize, inflate_a: bool, b: usize, inflate_b: bool| {
            self.adjust_with_tangents(a, inflate_a, b, inflate_b, &mut new_path, &mut adjusted)
        };
        if n == 2 {
            emit(apexes[0], false, apexes[1], false)?;
        } else {
            emit(apexes[0], false, apexes[1], true)?;
            for pair in apexes[1..n - 1].windows(2) {
                emit(pair[0], true, pair[1], true)?;
            }
            emit(apexes[n - 2], true, apexes[n - 1], false)?;
        }
        new_path.push(apexes[n - 1]);

        self.repair(&mut new_path, &mut adjusted)?;
        self.smooth_corners(&new_path, &mut adjusted);
        adjusted.dedup();
        Ok(adjusted)
    }

    /// Emits the tangent from `p1` to `p2`, splitting at any corridor point
    /// between them that the tangent passes closer than the radius.
    fn adjust_with_tangents(
        &self,
        p1: usize,
        inflate1: bool,
        p2: usize,
        inflate2: bool,
        new_path: &mut Vec<usize>,
        adjusted: &mut Vec<Point2<T>>,
    ) -> SmoothResult<()> {
        let r2 = self.radius * self.radius;
        let mut stack = vec![(p1, inflate1, p2, inflate2)];

        while let Some((a, inflate_a, b, inflate_b)) = stack.pop() {
            let (t1, t2) = self.tangent_segment(a, inflate_a, b, inflate_b)?;

            let blocking = std::iter::successors(self.points[a].successor, |&k| {
                self.points[k].successor
            })
            .take_while(|&k| k != b)
            .find(|&k| {
                distance_squared_point_to_segment(&self.points[k].position, &t1, &t2) < r2
            });

            match blocking {
                Some(split) => {
                    trace!("[Funnel] tangent {} -> {} clips point {}", a, b, split);
                    stack.push((split, true, b, inflate_b));
                    stack.push((a, inflate_a, split, true));
                }
                None => {
                    adjusted.push(t1);
                    adjusted.push(t2);
                    new_path.push(a);
                }
            }
        }
        Ok(())
    }

    /// Segment from `a` to `b`, each optionally replaced by the circle of the
    /// agent radius around it.
    fn tangent_segment(
        &self,
        a: usize,
        inflate_a: bool,
        b: usize,
        inflate_b: bool,
    ) -> SmoothResult<(Point2<T>, Point2<T>)> {
        let FunnelPoint { position: c1, side: s1, .. } = self.points[a];
        let FunnelPoint { position: c2, side: s2, .. } = self.points[b];
        let inflate_a = inflate_a && s1 != Side::OnPath;
        let inflate_b = inflate_b && s2 != Side::OnPath;
        let r = self.radius;
        let missing = || SmoothingError::NoTangent(a, b);

        match (inflate_a, inflate_b) {
            (false, false) => Ok((c1, c2)),
            (false, true) => {
                let [right, left] = tangent_point_to_circle(&c1, &c2, r).ok_or_else(missing)?;
                Ok((c1, if s2 == Side::Right { left } else { right }))
            }
            (true, false) => {
                // seen from c2, so left and right swap
                let [right, left] = tangent_point_to_circle(&c2, &c1, r).ok_or_else(missing)?;
                Ok((if s1 == Side::Right { right } else { left }, c2))
            }
            (true, true) if s1 == s2 => {
                let [t1, t2, t3, t4] = tangents_parallel_circle_to_circle(r, &c1, &c2, self.epsilon)
                    .ok_or_else(missing)?;
                Ok(if s1 == Side::Right { (t2, t3) } else { (t1, t4) })
            }
            (true, true) => {
                let [t1, t2, t3, t4] =
                    tangents_crossed_circle_to_circle(r, &c1, &c2).ok_or_else(missing)?;
                Ok(if s1 == Side::Right { (t2, t4) } else { (t1, t3) })
            }
        }
    }

    /// Drops an apex whose outgoing tangent starts behind its incoming one,
    /// joining its neighbours directly.
    fn repair(
        &self,
        new_path: &mut Vec<usize>,
        adjusted: &mut Vec<Point2<T>>,
    ) -> SmoothResult<()> {
        let mut i = 2;
        while i < new_path.len() {
            let (p0, p1, p2) = (new_path[i - 2], new_path[i - 1], new_path[i]);
            if self.points[p1].side == self.points[p2].side {
                let a = adjusted[(i - 2) * 2];
                let b = adjusted[(i - 1) * 2 - 1];
                let c = adjusted[(i - 1) * 2];
                if (a - b).dot(&(c - b)) > T::zero() {
                    let last = new_path.len() - 1;
                    let (t1, t2) = self.tangent_segment(p0, i != 2, p2, i != last)?;
                    trace!("[Funnel] dropping reversed apex {}", p1);
                    adjusted[(i - 2) * 2] = t1;
                    adjusted[i * 2 - 1] = t2;
                    new_path.remove(i - 1);
                    adjusted.drain((i - 1) * 2 - 1..=(i - 1) * 2);
                    continue;
                }
            }
            i += 1;
        }
        Ok(())
    }

    fn smooth_corners(&self, new_path: &[usize], adjusted: &mut Vec<Point2<T>>) {
        for i in (1..new_path.len().saturating_sub(1)).rev() {
            let corner = self.points[new_path[i]];
            let arc = self.corner_arc(
                &adjusted[2 * i - 1],
                &corner.position,
                &adjusted[2 * i],
                corner.side,
            );
            adjusted.splice(2 * i..2 * i, arc);
        }
    }

    /// Circle samples around `corner` lying in the wedge between the incoming
    /// tangent end `prev` and the outgoing tangent start `next`, in travel order.
    fn corner_arc(
        &self,
        prev: &Point2<T>,
        corner: &Point2<T>,
        next: &Point2<T>,
        corner_side: Side,
    ) -> Vec<Point2<T>> {
        let chord2 = match self.offsets {
            [first, second, ..] => (*second - *first).norm2(),
            _ => return Vec::new(),
        };
        if prev.distance2(next) <= chord2 {
            return Vec::new();
        }

        let turn = match corner_side {
            Side::Right => Orientation::CounterClockwise,
            Side::Left => Orientation::Clockwise,
            Side::OnPath => return Vec::new(),
        };
        let convex = side(prev, corner, next) == turn;

        let mut arc = Vec::new();
        let mut insert_at = 0;
        for offset in self.offsets {
            let sample = *corner + *offset;
            let s1 = side(prev, corner, &sample) == turn;
            let s2 = side(corner, next, &sample) == turn;
            let inside = if convex { s1 && s2 } else { s1 || s2 };
            if inside {
                arc.insert(insert_at, sample);
                insert_at += 1;
            } else {
                insert_at = 0;
            }
        }

        if corner_side == Side::Right {
            arc.reverse();
        }
        arc
    }
}
