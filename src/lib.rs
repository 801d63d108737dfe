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

//! A small 3-D geometry kernel: vector algebra, orientation predicates and
//! triangles that can be measured, queried for containment and nudged towards
//! equilateral.
//!
//! ```
//! use trikernel::{EquilateralParams, Triangle, Vector3};
//!
//! let mut t = Triangle::new(
//!     Vector3::new(0.0, 0.0, 6.0),
//!     Vector3::new(1.0, 0.0, 0.0),
//!     Vector3::new(0.0, 3.0, 0.0),
//! );
//! let before = t.equilateral_deviation();
//! let outcome = t.improve_equilateral(&EquilateralParams::fast()).unwrap();
//! assert!(outcome.final_deviation <= 1e-2);
//! assert!(t.equilateral_deviation() < before);
//! ```

pub mod error;
pub mod geometry;
pub mod kernel;
pub mod mesh;
pub mod numeric;
pub mod params;

pub use error::{GeometryError, GeometryResult};
pub use geometry::Vector3;
pub use kernel::{angle_between, determinant, dot, orientation_sign, turn_sign, unit_normal};
pub use mesh::{ConnectSummary, EquilateralOutcome, Triangle, TriangleSet};
pub use numeric::Scalar;
pub use params::EquilateralParams;
