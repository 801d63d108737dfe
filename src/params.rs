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

//! Parameters for the equilateral improvement procedure.

use crate::error::{GeometryError, GeometryResult};

pub const DEFAULT_DELTA: f64 = 1e-4;
pub const DEFAULT_TOLERANCE: f64 = 1e-3;
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000_000;

/// Tuning of [`Triangle::improve_equilateral`](crate::mesh::Triangle::improve_equilateral).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilateralParams {
    /// Fraction of the remaining non-equilateral part removed per iteration.
    /// Must lie in `(0, 1]`. Default: 1e-4
    pub delta: f64,

    /// Deviation at or below which the triangle counts as equilateral. Default: 1e-3
    pub tolerance: f64,

    /// Hard cap on iterations before reporting non-convergence. Default: 1 000 000
    pub max_iterations: usize,
}

impl Default for EquilateralParams {
    fn default() -> Self {
        Self {
            delta: DEFAULT_DELTA,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl EquilateralParams {
    #[must_use]
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Coarse settings: large steps, loose tolerance.
    #[must_use]
    pub fn fast() -> Self {
        Self {
            delta: 0.1,
            tolerance: 1e-2,
            max_iterations: 10_000,
        }
    }

    pub fn validate(&self) -> GeometryResult<()> {
        if !(self.delta > 0.0 && self.delta <= 1.0) {
            return Err(GeometryError::InvalidParams {
                name: "delta",
                value: self.delta,
                reason: "must be in (0, 1]",
            });
        }
        if !(self.tolerance >= 0.0 && self.tolerance.is_finite()) {
            return Err(GeometryError::InvalidParams {
                name: "tolerance",
                value: self.tolerance,
                reason: "must be finite and non-negative",
            });
        }
        if self.max_iterations == 0 {
            return Err(GeometryError::InvalidParams {
                name: "max_iterations",
                value: 0.0,
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = EquilateralParams::default();
        assert_eq!(params.delta, 1e-4);
        assert_eq!(params.tolerance, 1e-3);
        assert!(params.validate().is_ok());
        assert!(EquilateralParams::fast().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_delta() {
        for delta in [0.0, -1e-3, 1.5, f64::NAN] {
            let err = EquilateralParams::default()
                .with_delta(delta)
                .validate()
                .unwrap_err();
            assert!(matches!(err, GeometryError::InvalidParams { name: "delta", .. }));
        }
        assert!(EquilateralParams::default().with_delta(1.0).validate().is_ok());
    }

    #[test]
    fn rejects_bad_tolerance_and_cap() {
        let err = EquilateralParams::default()
            .with_tolerance(-0.5)
            .validate()
            .unwrap_err();
        assert!(matches!(err, GeometryError::InvalidParams { name: "tolerance", .. }));

        let err = EquilateralParams::default()
            .with_max_iterations(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, GeometryError::InvalidParams { name: "max_iterations", .. }));
    }
}
