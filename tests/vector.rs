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

use rand::{Rng, SeedableRng, rngs::StdRng};
use trikernel::{Vector3, angle_between, determinant, dot};

fn random_vector(rng: &mut StdRng) -> Vector3 {
    Vector3::new(
        rng.random_range(-10.0..10.0),
        rng.random_range(-10.0..10.0),
        rng.random_range(-10.0..10.0),
    )
}

#[test]
fn test_basic_algebra() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(-4.0, 0.5, 2.0);

    assert_eq!(a.add(b), Vector3::new(-3.0, 2.5, 5.0));
    assert_eq!(a.subtract(b), Vector3::new(5.0, 1.5, 1.0));
    assert_eq!(a.scale(2.0), Vector3::new(2.0, 4.0, 6.0));
    assert_eq!(a.divide(2.0), Vector3::new(0.5, 1.0, 1.5));

    // operators agree with the named forms
    assert_eq!(a + b, a.add(b));
    assert_eq!(a - b, a.subtract(b));
    assert_eq!(a * 2.0, a.scale(2.0));
    assert_eq!(a / 2.0, a.divide(2.0));
    assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));

    let mut c = a;
    c += b;
    c -= b;
    assert_eq!(c, a);
}

#[test]
fn test_vector_cross() {
    let i = Vector3::new(1.0, 0.0, 0.0);
    let j = Vector3::new(0.0, 1.0, 0.0);
    // i × j = k
    assert_eq!(i.cross(j), Vector3::new(0.0, 0.0, 1.0));
}

#[test]
fn test_distance() {
    let p1 = Vector3::new(0.0, 0.0, 0.0);
    let p2 = Vector3::new(1.0, 2.0, 2.0);
    // √(1² + 2² + 2²) = √9 = 3
    assert_eq!(p1.distance_to(p2), 3.0);
    assert_eq!(p2.norm(), 3.0);
    assert_eq!(p2.norm2(), 9.0);
    assert_eq!(p1.midpoint(p2), Vector3::new(0.5, 1.0, 1.0));
}

#[test]
fn test_divide_by_zero_is_not_an_error() {
    let v = Vector3::new(1.0, -1.0, 0.0) / 0.0;
    assert_eq!(v.x, f64::INFINITY);
    assert_eq!(v.y, f64::NEG_INFINITY);
    assert!(v.z.is_nan());
    assert!(!v.is_finite());

    assert!(Vector3::<f64>::zero().normalized().x.is_nan());
}

#[test]
fn test_conversions() {
    let v: Vector3 = [1.0, 2.0, 3.0].into();
    let w: Vector3 = (1.0, 2.0, 3.0).into();
    assert_eq!(v, w);

    let coords: [f64; 3] = v.into();
    assert_eq!(coords, [1.0, 2.0, 3.0]);
}

#[test]
fn test_f32_vectors() {
    let a = Vector3::<f32>::new(3.0, 0.0, 4.0);
    assert_eq!(a.norm(), 5.0_f32);
    assert_eq!(a.normalized(), Vector3::new(0.6, 0.0, 0.8));
}

#[test]
fn cross_is_anticommutative_and_orthogonal() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);

        assert_eq!(a.cross(b), -b.cross(a));

        let scale = a.norm() * a.norm() * b.norm();
        assert!(dot(&a, &a.cross(b)).abs() <= 1e-12 * scale);
        assert!(dot(&b, &a.cross(b)).abs() <= 1e-12 * scale);
    }
}

#[test]
fn determinant_is_antisymmetric() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        let c = random_vector(&mut rng);

        let scale = a.norm() * b.norm() * c.norm();
        assert!((determinant(&a, &b, &c) + determinant(&b, &a, &c)).abs() <= 1e-12 * scale);
        // triple product identity
        assert!((determinant(&a, &b, &c) - dot(&a, &b.cross(c))).abs() <= 1e-12 * scale);
    }
}

#[test]
fn scale_then_divide_round_trips() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let v = random_vector(&mut rng);
        let k: f64 = rng.random_range(0.1..10.0);
        let k = if rng.random_bool(0.5) { k } else { -k };

        let back = v.scale(k).divide(k);
        assert!(back.distance_to(v) <= 1e-12 * (1.0 + v.norm()));
    }
}

#[test]
fn angle_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..200 {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        let angle = angle_between(&a, &b);
        assert!((0.0..=std::f64::consts::PI).contains(&angle));
        assert!((angle - angle_between(&b, &a)).abs() < 1e-12);
    }
}
