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

use num_traits::Float;

use std::fmt::{Debug, Display};

/// Coordinate type of every geometric value in the kernel.
///
/// Arithmetic is plain IEEE-754: degenerate inputs produce NaN or infinities
/// instead of failing.
pub trait Scalar: Float + Debug + Display + Default + Send + Sync + 'static {
    fn from_f64(v: f64) -> Self;

    /// Widening (or identity) conversion used for reporting.
    fn as_f64(self) -> f64;

    #[inline(always)]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline(always)]
    fn three() -> Self {
        Self::two() + Self::one()
    }

    /// Returns -1, 0, or +1. NaN maps to 0.
    fn sign(self) -> i8 {
        if self > Self::zero() {
            1
        } else if self < Self::zero() {
            -1
        } else {
            0
        }
    }
}

impl Scalar for f64 {
    #[inline(always)]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline(always)]
    fn as_f64(self) -> f64 {
        self
    }
}

impl Scalar for f32 {
    #[inline(always)]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline(always)]
    fn as_f64(self) -> f64 {
        self as f64
    }
}
