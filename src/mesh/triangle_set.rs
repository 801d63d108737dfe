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

use tracing::{info, warn};

use crate::{
    error::GeometryError, mesh::triangle::Triangle, numeric::scalar::Scalar,
    params::EquilateralParams,
};

/// What a [`TriangleSet::connect_closest_points`] pass did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectSummary {
    pub triples_examined: usize,
    pub triples_matched: usize,
    pub improvements: usize,
    /// `(index, error)` for every improvement attempt that failed.
    pub failures: Vec<(usize, GeometryError)>,
}

/// Insertion-ordered, owned collection of independent triangles.
#[derive(Debug, Clone, Default)]
pub struct TriangleSet<T: Scalar = f64> {
    triangles: Vec<Triangle<T>>,
    params: EquilateralParams,
}

impl<T: Scalar> TriangleSet<T> {
    pub fn new() -> Self {
        Self::with_params(EquilateralParams::default())
    }

    pub fn with_params(params: EquilateralParams) -> Self {
        Self {
            triangles: Vec::new(),
            params,
        }
    }

    pub fn params(&self) -> &EquilateralParams {
        &self.params
    }

    /// Appends without deduplication or validation.
    pub fn add(&mut self, triangle: Triangle<T>) {
        self.triangles.push(triangle);
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Triangle<T>> {
        self.triangles.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle<T>> {
        self.triangles.iter()
    }

    pub fn as_slice(&self) -> &[Triangle<T>] {
        &self.triangles
    }

    /// For every `i < j < k` where triangle `i` contains the first corner of both
    /// `j` and `k`, improves all three towards equilateral in place.
    ///
    /// Scans all triples (O(n³)). Containment is evaluated against the triangles as
    /// they are at that point of the scan, so earlier adjustments affect later
    /// matches. Failures are recorded and the scan goes on.
    pub fn connect_closest_points(&mut self) -> ConnectSummary {
        let mut summary = ConnectSummary::default();
        let n = self.triangles.len();

        for i in 0..n {
            for j in (i + 1)..n {
                for k in (j + 1)..n {
                    summary.triples_examined += 1;

                    let host = &self.triangles[i];
                    if !(host.contains(&self.triangles[j].p1)
                        && host.contains(&self.triangles[k].p1))
                    {
                        continue;
                    }
                    summary.triples_matched += 1;

                    for idx in [i, j, k] {
                        match self.triangles[idx].improve_equilateral(&self.params) {
                            Ok(_) => summary.improvements += 1,
                            Err(err) => {
                                warn!(triangle = idx, error = %err, "could not improve triangle");
                                summary.failures.push((idx, err));
                            }
                        }
                    }
                }
            }
        }

        info!(
            triangles = n,
            examined = summary.triples_examined,
            matched = summary.triples_matched,
            failures = summary.failures.len(),
            "connect pass finished"
        );
        summary
    }
}

impl<T: Scalar> FromIterator<Triangle<T>> for TriangleSet<T> {
    fn from_iter<I: IntoIterator<Item = Triangle<T>>>(iter: I) -> Self {
        let mut set = TriangleSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Scalar> Extend<Triangle<T>> for TriangleSet<T> {
    fn extend<I: IntoIterator<Item = Triangle<T>>>(&mut self, iter: I) {
        self.triangles.extend(iter);
    }
}

impl<T: Scalar> IntoIterator for TriangleSet<T> {
    type Item = Triangle<T>;
    type IntoIter = std::vec::IntoIter<Triangle<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.into_iter()
    }
}

impl<'a, T: Scalar> IntoIterator for &'a TriangleSet<T> {
    type Item = &'a Triangle<T>;
    type IntoIter = std::slice::Iter<'a, Triangle<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}
