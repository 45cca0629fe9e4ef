// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Clamping and arithmetic properties of vectors
//!
//! Exercises sequences of writes and arithmetic against clamped vectors to
//! confirm coordinates never escape their rectangle.

use kinetic2d::math::{helpers, ClampBounds, Point, Vector};

fn assert_within(vector: &Vector, bounds: ClampBounds) {
    assert!(
        vector.x() >= bounds.x_min && vector.x() <= bounds.x_max,
        "x = {} escaped [{}, {}]",
        vector.x(),
        bounds.x_min,
        bounds.x_max
    );
    assert!(
        vector.y() >= bounds.y_min && vector.y() <= bounds.y_max,
        "y = {} escaped [{}, {}]",
        vector.y(),
        bounds.y_min,
        bounds.y_max
    );
}

#[test]
fn test_writes_stay_in_bounds() {
    let mut vector = Vector::new(5.0, 5.0);
    vector.clamp(0.0, -10.0, 10.0, 10.0);
    let bounds = vector.clamp_bounds().unwrap();

    let writes = [
        (20.0, 20.0),
        (-5.0, -50.0),
        (3.0, 4.0),
        (f64::MAX, f64::MIN),
        (10.0, -10.0),
    ];
    for (x, y) in writes {
        vector.set_x(x);
        vector.set_y(y);
        assert_within(&vector, bounds);

        vector.set((y, x));
        assert_within(&vector, bounds);
    }
}

#[test]
fn test_add_respects_bounds_for_any_operand() {
    let mut vector = Vector::new(5.0, 5.0);
    vector.clamp(0.0, 0.0, 10.0, 10.0);
    let bounds = vector.clamp_bounds().unwrap();

    let operands = [
        Point::new(100.0, -100.0),
        Point::new(-3.0, 2.0),
        Point::new(0.5, 0.5),
        Point::new(1e12, 1e12),
    ];
    for operand in operands {
        let sum = vector.add(operand);
        assert!(sum.is_clamped());
        assert_within(&sum, bounds);

        let difference = vector.subtract(operand);
        assert_within(&difference, bounds);
    }
}

#[test]
fn test_repeated_accumulation_saturates_at_edge() {
    let mut vector = Vector::new(0.0, 0.0);
    vector.clamp(-1.0, -1.0, 1.0, 1.0);

    for _ in 0..100 {
        vector = vector.add((0.3, -0.3));
    }
    assert_eq!((vector.x(), vector.y()), (1.0, -1.0));
}

#[test]
fn test_scale_and_normalize_drop_clamping() {
    let mut vector = Vector::new(3.0, 4.0);
    vector.clamp(0.0, 0.0, 5.0, 5.0);

    let scaled = vector.scale(10.0);
    assert!(!scaled.is_clamped());
    assert_eq!((scaled.x(), scaled.y()), (30.0, 40.0));

    let unit = vector.normalize();
    assert!(!unit.is_clamped());
    assert!((unit.length() - 1.0).abs() < 1e-12);
}

#[test]
fn test_zero_normalizes_to_zero() {
    let unit = Vector::zero().normalize();
    assert_eq!((unit.x(), unit.y()), (0.0, 0.0));
    assert!(unit.is_valid());
}

#[test]
fn test_operator_forms_match_methods() {
    let a = Vector::new(1.0, 2.0);
    let b = Vector::new(3.0, 5.0);

    assert_eq!(a + b, a.add(b));
    assert_eq!(b - a, b.subtract(a));
    assert_eq!(a * 3.0, a.scale(3.0));

    let mut c = a;
    c += b;
    c -= a;
    assert_eq!(c, b);
}

#[test]
fn test_interpolation_values() {
    assert_eq!(helpers::lerp(10.0, 20.0, 0.5), 15.0);
    assert_eq!(helpers::lerp(10.0, 20.0, 2.0), 30.0);
    assert_eq!(helpers::lerp(10.0, 20.0, -1.0), 0.0);
    assert_eq!(helpers::inverse_lerp(10.0, 20.0, 15.0), 0.5);
    assert_eq!(helpers::inverse_lerp(10.0, 20.0, 30.0), 2.0);
    assert_eq!(helpers::clamp(10.0, 20.0, 5.0), 10.0);
    assert_eq!(helpers::clamp(10.0, 20.0, 30.0), 20.0);
    assert_eq!(helpers::clamp(10.0, 20.0, 15.0), 15.0);
}

#[test]
fn test_seeded_random_is_reproducible() {
    let mut first = helpers::seed_rand("kinetic");
    let mut second = helpers::seed_rand("kinetic");

    for _ in 0..32 {
        let a = helpers::rand_int(-5, 5, &mut first);
        let b = helpers::rand_int(-5, 5, &mut second);
        assert_eq!(a, b);
        assert!((-5..5).contains(&a));
    }
}
