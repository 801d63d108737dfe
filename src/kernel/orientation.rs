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

use crate::geometry::Vector3;
use crate::numeric::scalar::Scalar;

/// Scalar triple product `a · (b × c)`.
///
/// Returns:
/// - >0 if (a, b, c) is right-handed
/// - <0 if left-handed
/// - =0 if coplanar
///
/// The magnitude is six times the volume of the tetrahedron spanned by the three vectors.
pub fn determinant<T: Scalar>(a: &Vector3<T>, b: &Vector3<T>, c: &Vector3<T>) -> T {
    a.x * (b.y * c.z - b.z * c.y) - a.y * (b.x * c.z - b.z * c.x) + a.z * (b.x * c.y - b.y * c.x)
}

/// `(a × b) / |a × b|`. NaN components when `a` and `b` are parallel.
pub fn unit_normal<T: Scalar>(a: &Vector3<T>, b: &Vector3<T>) -> Vector3<T> {
    a.cross(*b).normalized()
}

/// Turn direction from `a` to `b` about their own unit normal: +1 or -1.
///
/// A zero or NaN determinant is reported as -1.
pub fn orientation_sign<T: Scalar>(a: &Vector3<T>, b: &Vector3<T>) -> i8 {
    if determinant(a, b, &unit_normal(a, b)) > T::zero() {
        1
    } else {
        -1
    }
}

/// Turn direction from `a` to `b` about a fixed `axis`: -1, 0 or +1 (NaN maps to 0).
pub fn turn_sign<T: Scalar>(a: &Vector3<T>, b: &Vector3<T>, axis: &Vector3<T>) -> i8 {
    determinant(a, b, axis).sign()
}
