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

pub fn dot<T: Scalar>(a: &Vector3<T>, b: &Vector3<T>) -> T {
    a.dot(*b)
}

/// Angle between `a` and `b` in radians, in `[0, π]`.
///
/// The cosine is clamped to `[-1, 1]` so rounding on (anti)parallel input cannot
/// leave the domain of `acos`. A zero-length operand still yields NaN.
pub fn angle_between<T: Scalar>(a: &Vector3<T>, b: &Vector3<T>) -> T {
    let cos = dot(a, b) / (a.norm() * b.norm());
    if cos.is_nan() {
        return cos;
    }
    cos.max(-T::one()).min(T::one()).acos()
}

#[cfg(test)]
mod tests {
    use super::angle_between;
    use crate::geometry::Vector3;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn right_angle() {
        let a = Vector3::new(2.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 0.0, 3.0);
        assert!((angle_between(&a, &b) - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn parallel_vectors_do_not_produce_nan() {
        let a: Vector3<f64> = Vector3::new(0.1, 0.2, 0.3);
        let b = a * 3.0;
        let angle = angle_between(&a, &b);
        assert!(angle.abs() < 1e-6);

        let opposite = angle_between(&a, &-b);
        assert!((opposite - PI).abs() < 1e-6);
    }

    #[test]
    fn zero_vector_yields_nan() {
        let a: Vector3<f64> = Vector3::new(1.0, 0.0, 0.0);
        assert!(angle_between(&a, &Vector3::zero()).is_nan());
    }
}
