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

use tracing::{debug, trace};

use crate::{
    error::{GeometryError, GeometryResult},
    geometry::Vector3,
    mesh::triangle::Triangle,
    numeric::scalar::Scalar,
    params::EquilateralParams,
};

/// Summary of a successful [`Triangle::improve_equilateral`] run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilateralOutcome<T: Scalar = f64> {
    pub iterations: usize,
    pub initial_deviation: T,
    pub final_deviation: T,
}

impl<T: Scalar> Triangle<T> {
    /// Nudges the corners in place until the equilateral deviation is within
    /// `params.tolerance`.
    ///
    /// Every iteration removes the fraction `params.delta` of the triangle's
    /// anti-equilateral part. Centroid and plane are preserved and the deviation
    /// never grows. On [`GeometryError::NotConverged`] the triangle keeps the
    /// progress made so far.
    pub fn improve_equilateral(
        &mut self,
        params: &EquilateralParams,
    ) -> GeometryResult<EquilateralOutcome<T>> {
        params.validate()?;
        let delta = T::from_f64(params.delta);
        let tolerance = T::from_f64(params.tolerance);

        let initial = self.equilateral_deviation();
        if initial <= tolerance {
            return Ok(EquilateralOutcome {
                iterations: 0,
                initial_deviation: initial,
                final_deviation: initial,
            });
        }

        let area = self.area();
        if initial.is_nan() || !(area > T::zero() && area.is_finite()) {
            return Err(GeometryError::DegenerateTriangle);
        }

        let mut deviation = initial;
        for iteration in 1..=params.max_iterations {
            let Some(offsets) = self.anti_equilateral_offsets() else {
                return Err(GeometryError::DegenerateTriangle);
            };

            self.p1.nudge(offsets[0], -delta);
            self.p2.nudge(offsets[1], -delta);
            self.p3.nudge(offsets[2], -delta);

            deviation = self.equilateral_deviation();
            if deviation <= tolerance {
                debug!(
                    iterations = iteration,
                    initial = initial.as_f64(),
                    deviation = deviation.as_f64(),
                    "triangle converged"
                );
                return Ok(EquilateralOutcome {
                    iterations: iteration,
                    initial_deviation: initial,
                    final_deviation: deviation,
                });
            }
            if iteration % 100_000 == 0 {
                trace!(iteration, deviation = deviation.as_f64(), "still improving");
            }
        }

        debug!(
            iterations = params.max_iterations,
            deviation = deviation.as_f64(),
            tolerance = params.tolerance,
            "triangle did not converge"
        );
        Err(GeometryError::NotConverged {
            iterations: params.max_iterations,
            deviation: deviation.as_f64(),
            tolerance: params.tolerance,
        })
    }

    /// Copying form of [`Triangle::improve_equilateral`]; `self` is left untouched.
    pub fn improved_equilateral(
        &self,
        params: &EquilateralParams,
    ) -> GeometryResult<(Triangle<T>, EquilateralOutcome<T>)> {
        let mut improved = *self;
        let outcome = improved.improve_equilateral(params)?;
        Ok((improved, outcome))
    }

    /// Per-corner offsets of the part of the centred corner sequence that turns
    /// against the winding. All three are zero exactly when the triangle is
    /// equilateral; `None` when the triangle has no plane.
    fn anti_equilateral_offsets(&self) -> Option<[Vector3<T>; 3]> {
        let normal = self.normal();
        if !normal.is_finite() {
            return None;
        }

        // in-plane frame (u, v) in which p1 -> p2 -> p3 runs counter-clockwise
        let u = (self.p2 - self.p1).normalized();
        let v = normal.cross(u);
        let centroid = self.centroid();

        // cube roots of unity as (re, im)
        let half = T::one() / T::two();
        let h = T::three().sqrt() / T::two();
        let roots = [(T::one(), T::zero()), (-half, h), (-half, -h)];

        let (mut b_re, mut b_im) = (T::zero(), T::zero());
        for (corner, (w_re, w_im)) in self.corners().into_iter().zip(roots) {
            let d = corner - centroid;
            let (z_re, z_im) = (d.dot(u), d.dot(v));
            b_re = b_re + z_re * w_re - z_im * w_im;
            b_im = b_im + z_re * w_im + z_im * w_re;
        }
        b_re = b_re / T::three();
        b_im = b_im / T::three();

        Some(roots.map(|(w_re, w_im)| {
            let re = b_re * w_re + b_im * w_im;
            let im = b_im * w_re - b_re * w_im;
            u * re + v * im
        }))
    }
}
