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

//! Fixed-step walking along a planned path.

use crate::{geometry::Point2, navigation::path_finder::Agent, numeric::scalar::Scalar};

/// Steps along a polyline at a fixed arc-length spacing.
///
/// Sample `k` sits at arc length `min(k * sampling_distance, length)`; the
/// last sample is the exact end of the path.
#[derive(Clone, Debug)]
pub struct LinearPathSampler<T: Scalar> {
    path: Vec<Point2<T>>,
    cumulative: Vec<T>,
    sampling_distance: T,
    count: usize,
    count_max: usize,
    cache: Option<Vec<Point2<T>>>,
}

impl<T: Scalar> LinearPathSampler<T> {
    pub fn new(path: Vec<Point2<T>>, sampling_distance: T) -> Self {
        debug_assert!(sampling_distance > T::zero(), "sampling distance must be positive");
        let mut sampler = Self {
            path: Vec::new(),
            cumulative: Vec::new(),
            sampling_distance,
            count: 0,
            count_max: 0,
            cache: None,
        };
        sampler.set_path(path);
        sampler
    }

    /// Replaces the path and rewinds to its start.
    pub fn set_path(&mut self, path: Vec<Point2<T>>) {
        let mut total = T::zero();
        self.cumulative = Vec::with_capacity(path.len());
        for (i, p) in path.iter().enumerate() {
            if i > 0 {
                total += path[i - 1].distance(p);
            }
            self.cumulative.push(total);
        }
        self.path = path;
        self.count = 0;
        self.cache = None;
        self.count_max = if total > T::zero() {
            (total / self.sampling_distance).ceil().to_usize().unwrap_or(0)
        } else {
            0
        };
    }

    pub fn path(&self) -> &[Point2<T>] {
        &self.path
    }

    pub fn length(&self) -> T {
        self.cumulative.last().copied().unwrap_or_else(T::zero)
    }

    pub fn sampling_distance(&self) -> T {
        self.sampling_distance
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Index of the final sample.
    pub fn count_max(&self) -> usize {
        self.count_max
    }

    pub fn set_count(&mut self, count: usize) {
        self.count = count.min(self.count_max);
    }

    pub fn has_next(&self) -> bool {
        !self.path.is_empty() && self.count < self.count_max
    }

    pub fn has_prev(&self) -> bool {
        self.count > 0
    }

    pub fn advance(&mut self) -> bool {
        if self.has_next() {
            self.count += 1;
            true
        } else {
            false
        }
    }

    pub fn retreat(&mut self) -> bool {
        if self.has_prev() {
            self.count -= 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Current sample; `None` for an empty path.
    pub fn position(&self) -> Option<Point2<T>> {
        match &self.cache {
            Some(cache) => cache.get(self.count).copied(),
            None => self.sample(self.count),
        }
    }

    /// Moves `agent` to the current sample.
    pub fn place(&self, agent: &mut Agent<T>) {
        if let Some(p) = self.position() {
            agent.position = p;
        }
    }

    /// Caches every sample so that later lookups skip the segment search.
    pub fn precompute(&mut self) {
        self.cache = Some(self.samples());
    }

    pub fn samples(&self) -> Vec<Point2<T>> {
        (0..=self.count_max).filter_map(|k| self.sample(k)).collect()
    }

    fn sample(&self, k: usize) -> Option<Point2<T>> {
        let (&first, &last) = (self.path.first()?, self.path.last()?);
        if k == 0 {
            return Some(first);
        }
        if k >= self.count_max {
            return Some(last);
        }

        let target = (self.sampling_distance * T::lit(k as f64)).min(self.length());
        let seg = self
            .cumulative
            .partition_point(|&c| c <= target)
            .clamp(1, self.path.len() - 1);
        let (a, b) = (self.path[seg - 1], self.path[seg]);
        let span = self.cumulative[seg] - self.cumulative[seg - 1];
        if span <= T::zero() {
            return Some(b);
        }
        Some(a.lerp(&b, (target - self.cumulative[seg - 1]) / span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn l_path() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 2.5),
        ]
    }

    #[test]
    fn samples_are_evenly_spaced_and_end_exactly() {
        let sampler = LinearPathSampler::new(l_path(), 1.0);
        assert_eq!(sampler.count_max(), 6);

        let samples = sampler.samples();
        assert_eq!(samples.len(), 7);
        assert_eq!(samples[0], Point2::new(0.0, 0.0));
        assert_abs_diff_eq!(samples[3].x, 3.0);
        assert_abs_diff_eq!(samples[4].y, 1.0);
        assert_eq!(samples[6], Point2::new(3.0, 2.5));
    }

    #[test]
    fn stepping_is_bounded() {
        let mut sampler = LinearPathSampler::new(l_path(), 2.0);
        assert!(!sampler.retreat());
        let mut steps = 0;
        while sampler.advance() {
            steps += 1;
        }
        assert_eq!(steps, sampler.count_max());
        assert!(!sampler.has_next());
        assert!(sampler.retreat());
        assert_eq!(sampler.count(), sampler.count_max() - 1);

        sampler.reset();
        assert_eq!(sampler.position(), Some(Point2::new(0.0, 0.0)));
    }

    #[test]
    fn precomputed_lookups_match_direct_ones() {
        let mut sampler = LinearPathSampler::new(l_path(), 0.7);
        sampler.set_count(5);
        let direct = sampler.position();
        sampler.precompute();
        assert_eq!(sampler.position(), direct);

        sampler.set_count(1000);
        assert_eq!(sampler.count(), sampler.count_max());
        assert_eq!(sampler.position(), Some(Point2::new(3.0, 2.5)));
    }

    #[test]
    fn degenerate_paths() {
        let empty: LinearPathSampler<f64> = LinearPathSampler::new(Vec::new(), 1.0);
        assert_eq!(empty.position(), None);
        assert!(!empty.has_next());

        let single = LinearPathSampler::new(vec![Point2::new(1.0, 1.0)], 1.0);
        assert_eq!(single.samples(), vec![Point2::new(1.0, 1.0)]);
    }

    #[test]
    fn places_agent() {
        let mut sampler = LinearPathSampler::new(l_path(), 1.0);
        let mut agent = Agent::new(Point2::new(-1.0, -1.0), 0.5);
        sampler.set_count(2);
        sampler.place(&mut agent);
        assert_abs_diff_eq!(agent.position.x, 2.0);
        assert_eq!(agent.radius, 0.5);
    }
}
