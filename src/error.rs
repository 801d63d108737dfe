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

//! Error types for triangle adjustment.

use thiserror::Error;

/// Errors reported by the equilateral improvement procedure.
///
/// The vector algebra itself never fails; degenerate input there yields NaN.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A tuning parameter is outside its accepted range.
    #[error("Invalid parameter `{name}` = {value}: {reason}")]
    InvalidParams {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Corners are collinear or coincident; there is no plane to work in.
    #[error("Degenerate triangle: corners are collinear or coincident")]
    DegenerateTriangle,

    /// The iteration cap was reached before the deviation dropped to the tolerance.
    #[error(
        "Did not converge after {iterations} iterations (deviation {deviation}, tolerance {tolerance})"
    )]
    NotConverged {
        iterations: usize,
        deviation: f64,
        tolerance: f64,
    },
}

/// Result type for fallible geometry operations.
pub type GeometryResult<T> = std::result::Result<T, GeometryError>;
