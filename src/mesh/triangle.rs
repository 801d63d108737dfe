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

use crate::{
    geometry::Vector3,
    kernel::orientation::{determinant, turn_sign},
    numeric::scalar::Scalar,
};

use std::fmt;

/// Three ordered corners. The order fixes the winding; collinear or coincident
/// corners are allowed and simply give a zero-area triangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle<T: Scalar = f64> {
    pub p1: Vector3<T>,
    pub p2: Vector3<T>,
    pub p3: Vector3<T>,
}

impl<T: Scalar> Triangle<T> {
    pub fn new(p1: Vector3<T>, p2: Vector3<T>, p3: Vector3<T>) -> Self {
        Self { p1, p2, p3 }
    }

    pub fn corners(&self) -> [Vector3<T>; 3] {
        [self.p1, self.p2, self.p3]
    }

    pub fn area(&self) -> T {
        let v0 = self.p2 - self.p1;
        let v1 = self.p3 - self.p1;
        v0.cross(v1).norm() / T::two()
    }

    /// Unit normal following the winding. NaN for degenerate triangles.
    pub fn normal(&self) -> Vector3<T> {
        (self.p2 - self.p1).cross(self.p3 - self.p1).normalized()
    }

    pub fn centroid(&self) -> Vector3<T> {
        (self.p1 + self.p2 + self.p3) / T::three()
    }

    pub fn perimeter(&self) -> T {
        let [a, b, c] = self.side_lengths();
        a + b + c
    }

    /// Whether `point` falls inside the triangle seen along its normal.
    ///
    /// Points with a negative triple product of the corner offsets are rejected
    /// first; the rest pass if the three corner-to-corner turns, measured about the
    /// triangle normal, never disagree. Edges and corners count as inside.
    pub fn contains(&self, point: &Vector3<T>) -> bool {
        if !point.is_finite() {
            return false;
        }

        let v0 = self.p1 - *point;
        let v1 = self.p2 - *point;
        let v2 = self.p3 - *point;

        if determinant(&v0, &v1, &v2) < T::zero() {
            return false;
        }

        let normal = self.normal();
        if !normal.is_finite() {
            return false;
        }

        let turns = [
            turn_sign(&v0, &v1, &normal),
            turn_sign(&v1, &v2, &normal),
            turn_sign(&v2, &v0, &normal),
        ];
        let any_left = turns.iter().any(|&s| s > 0);
        let any_right = turns.iter().any(|&s| s < 0);

        !(any_left && any_right)
    }

    pub fn side_length(&self, a: &Vector3<T>, b: &Vector3<T>) -> T {
        a.distance_to(*b)
    }

    /// `[|p1 p2|, |p2 p3|, |p3 p1|]`
    pub fn side_lengths(&self) -> [T; 3] {
        [
            self.side_length(&self.p1, &self.p2),
            self.side_length(&self.p2, &self.p3),
            self.side_length(&self.p3, &self.p1),
        ]
    }

    /// `(longest - shortest) / longest`: 0 for an equilateral triangle, tending to 1
    /// as it degenerates. NaN when all corners coincide.
    pub fn equilateral_deviation(&self) -> T {
        let [a, b, c] = self.side_lengths();
        let max_side = a.max(b).max(c);
        let min_side = a.min(b).min(c);

        (max_side - min_side) / max_side
    }
}

impl<T: Scalar> From<[Vector3<T>; 3]> for Triangle<T> {
    fn from(corners: [Vector3<T>; 3]) -> Self {
        let [p1, p2, p3] = corners;
        Triangle::new(p1, p2, p3)
    }
}

impl<T: Scalar> fmt::Display for Triangle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Triangle points:")?;
        writeln!(f, "{}", self.p1)?;
        writeln!(f, "{}", self.p2)?;
        write!(f, "{}", self.p3)
    }
}
