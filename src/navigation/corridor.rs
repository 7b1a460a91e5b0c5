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

/// Faces and crossed half-edges from a start face to a goal face.
///
/// `edges[i]` is the half-edge of `faces[i]` crossed to reach `faces[i + 1]`,
/// so `left_face(edges[i]) == faces[i]`. An empty corridor means no path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corridor {
    pub faces: Vec<usize>,
    pub edges: Vec<usize>,
}

impl Corridor {
    pub fn single(face: usize) -> Self {
        Self {
            faces: vec![face],
            edges: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Number of faces.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn start_face(&self) -> Option<usize> {
        self.faces.first().copied()
    }

    pub fn goal_face(&self) -> Option<usize> {
        self.faces.last().copied()
    }
}
