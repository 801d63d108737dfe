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

use crate::numeric::scalar::Scalar;

use std::{
    fmt,
    ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign},
};

/// A point or a free vector in 3-D space. Which one is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3<T: Scalar = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Vector3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Vector3 {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    pub fn add(self, other: Self) -> Self {
        Vector3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    pub fn subtract(self, other: Self) -> Self {
        Vector3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    pub fn scale(self, k: T) -> Self {
        Vector3 {
            x: self.x * k,
            y: self.y * k,
            z: self.z * k,
        }
    }

    /// Division by zero follows IEEE-754 (Inf/NaN components).
    pub fn divide(self, k: T) -> Self {
        Vector3 {
            x: self.x / k,
            y: self.y / k,
            z: self.z / k,
        }
    }

    pub fn cross(self, other: Self) -> Self {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn norm2(self) -> T {
        self.dot(self)
    }

    pub fn norm(self) -> T {
        self.distance_to(Self::zero())
    }

    /// NaN components for the zero vector.
    pub fn normalized(self) -> Self {
        self.divide(self.norm())
    }

    pub fn distance_to(self, other: Self) -> T {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn midpoint(self, other: Self) -> Self {
        self.add(other).divide(T::two())
    }

    /// Moves this point by `delta * direction` and returns it for chaining.
    pub fn nudge(&mut self, direction: Self, delta: T) -> &mut Self {
        self.x = self.x + delta * direction.x;
        self.y = self.y + delta * direction.y;
        self.z = self.z + delta * direction.z;
        self
    }

    /// Same displacement as [`Vector3::nudge`], applied to a copy.
    #[must_use]
    pub fn nudged(self, direction: Self, delta: T) -> Self {
        let mut out = self;
        out.nudge(direction, delta);
        out
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<T: Scalar> Add for Vector3<T> {
    type Output = Vector3<T>;
    fn add(self, rhs: Vector3<T>) -> Vector3<T> {
        Vector3::add(self, rhs)
    }
}

impl<T: Scalar> Sub for Vector3<T> {
    type Output = Vector3<T>;
    fn sub(self, rhs: Vector3<T>) -> Vector3<T> {
        self.subtract(rhs)
    }
}

impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Vector3<T>;
    fn mul(self, k: T) -> Vector3<T> {
        self.scale(k)
    }
}

impl<T: Scalar> Div<T> for Vector3<T> {
    type Output = Vector3<T>;
    fn div(self, k: T) -> Vector3<T> {
        self.divide(k)
    }
}

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Vector3<T>;
    fn neg(self) -> Vector3<T> {
        Vector3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T: Scalar> AddAssign for Vector3<T> {
    fn add_assign(&mut self, rhs: Vector3<T>) {
        *self = Vector3::add(*self, rhs);
    }
}

impl<T: Scalar> SubAssign for Vector3<T> {
    fn sub_assign(&mut self, rhs: Vector3<T>) {
        *self = self.subtract(rhs);
    }
}

impl<T: Scalar> Index<usize> for Vector3<T> {
    type Output = T;
    fn index(&self, axis: usize) -> &T {
        match axis {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Invalid axis"),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Vector3<T> {
    fn index_mut(&mut self, axis: usize) -> &mut T {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Invalid axis"),
        }
    }
}

impl<T: Scalar> From<[T; 3]> for Vector3<T> {
    fn from(coords: [T; 3]) -> Self {
        Vector3::new(coords[0], coords[1], coords[2])
    }
}

impl<T: Scalar> From<(T, T, T)> for Vector3<T> {
    fn from(coords: (T, T, T)) -> Self {
        Vector3::new(coords.0, coords.1, coords.2)
    }
}

impl<T: Scalar> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> [T; 3] {
        [v.x, v.y, v.z]
    }
}

impl<T: Scalar> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {}, {})", self.x, self.y, self.z)
    }
}
