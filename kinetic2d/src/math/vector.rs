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
//! Two-dimensional vector with optional persistent clamping
//!
//! A [`Vector`] behaves like a plain `(x, y)` pair until [`Vector::clamp`] is
//! called. From then on every write to `x` or `y` is constrained to the clamp
//! rectangle, and vectors derived through [`Vector::add`] or
//! [`Vector::subtract`] inherit the same rectangle. Scaling and normalizing
//! produce unclamped vectors since the bounds are positional.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use super::helpers;
use super::{Point, Pointlike};

/// Rectangle a clamped [`Vector`] is constrained to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampBounds {
    /// Minimum x value
    pub x_min: f64,
    /// Minimum y value
    pub y_min: f64,
    /// Maximum x value
    pub x_max: f64,
    /// Maximum y value
    pub y_max: f64,
}

impl ClampBounds {
    /// Create a new clamp rectangle
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        ClampBounds {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Constrain an x value to the rectangle
    pub fn clamp_x(&self, x: f64) -> f64 {
        helpers::clamp(self.x_min, self.x_max, x)
    }

    /// Constrain a y value to the rectangle
    pub fn clamp_y(&self, y: f64) -> f64 {
        helpers::clamp(self.y_min, self.y_max, y)
    }

    /// Check if a point lies inside the rectangle (inclusive)
    pub fn contains(&self, point: impl Pointlike) -> bool {
        point.x() >= self.x_min
            && point.x() <= self.x_max
            && point.y() >= self.y_min
            && point.y() <= self.y_max
    }
}

/// 2D vector with double-precision components
///
/// Arithmetic never mutates its operands; every operation returns a new
/// vector. Equality compares components only, so a clamped and an unclamped
/// vector with the same coordinates are equal.
///
/// # Examples
///
/// ```
/// use kinetic2d::math::Vector;
///
/// let mut v = Vector::new(100.0, 200.0);
/// v.clamp(0.0, 0.0, 200.0, 300.0);
///
/// v.set_x(v.x() + 200.0);
/// assert_eq!(v.x(), 200.0);
///
/// let moved = v.add((-500.0, 500.0));
/// assert_eq!(moved, Vector::new(0.0, 300.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector {
    x: f64,
    y: f64,
    bounds: Option<ClampBounds>,
}

impl Vector {
    /// Create a new unclamped vector
    pub const fn new(x: f64, y: f64) -> Self {
        Vector { x, y, bounds: None }
    }

    /// Create the zero vector
    pub const fn zero() -> Self {
        Vector::new(0.0, 0.0)
    }

    /// Create an unclamped vector from any point-like value
    pub fn from_point(point: impl Pointlike) -> Self {
        Vector::new(point.x(), point.y())
    }

    /// Create a vector that shares `other`'s clamp rectangle
    ///
    /// The coordinates are constrained immediately. If `other` is unclamped
    /// the result is too.
    pub fn with_clamp_of(x: f64, y: f64, other: &Vector) -> Self {
        Vector::with_bounds(x, y, other.bounds)
    }

    // Builds a derived vector that keeps the given clamp rectangle and
    // immediately constrains the new coordinates to it.
    fn with_bounds(x: f64, y: f64, bounds: Option<ClampBounds>) -> Self {
        let mut vector = Vector { x: 0.0, y: 0.0, bounds };
        vector.set_x(x);
        vector.set_y(y);
        vector
    }

    /// Get the x coordinate
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Get the y coordinate
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Set the x coordinate, constrained to the clamp rectangle if any
    pub fn set_x(&mut self, x: f64) {
        self.x = match self.bounds {
            Some(bounds) => bounds.clamp_x(x),
            None => x,
        };
    }

    /// Set the y coordinate, constrained to the clamp rectangle if any
    pub fn set_y(&mut self, y: f64) {
        self.y = match self.bounds {
            Some(bounds) => bounds.clamp_y(y),
            None => y,
        };
    }

    /// Overwrite both coordinates from a point-like value
    pub fn set(&mut self, point: impl Pointlike) {
        self.set_x(point.x());
        self.set_y(point.y());
    }

    /// Sum of this vector and `other`, keeping this vector's clamp rectangle
    pub fn add(&self, other: impl Pointlike) -> Vector {
        Vector::with_bounds(self.x + other.x(), self.y + other.y(), self.bounds)
    }

    /// Difference of this vector and `other`, keeping this vector's clamp rectangle
    pub fn subtract(&self, other: impl Pointlike) -> Vector {
        Vector::with_bounds(self.x - other.x(), self.y - other.y(), self.bounds)
    }

    /// Multiply both components by `value`
    ///
    /// The result is never clamped.
    pub fn scale(&self, value: f64) -> Vector {
        Vector::new(self.x * value, self.y * value)
    }

    /// Unit vector pointing in the same direction
    ///
    /// The zero vector normalizes to itself instead of `(NaN, NaN)`.
    pub fn normalize(&self) -> Vector {
        let length = self.length();
        let divisor = if length == 0.0 { 1.0 } else { length };
        Vector::new(self.x / divisor, self.y / divisor)
    }

    /// Dot product with `other`
    pub fn dot(&self, other: impl Pointlike) -> f64 {
        self.x * other.x() + self.y * other.y()
    }

    /// Euclidean length (magnitude)
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`
    pub fn distance(&self, other: impl Pointlike) -> f64 {
        (self.x - other.x()).hypot(self.y - other.y())
    }

    /// Angle in radians between this vector and `other`, in `[0, π]`
    ///
    /// Returns NaN when either vector has zero length; callers must guard.
    pub fn angle(&self, other: impl Pointlike) -> f64 {
        let other_length = other.x().hypot(other.y());
        (self.dot(&other) / (self.length() * other_length)).acos()
    }

    /// Angle in radians of this vector, in `(-π, π]`
    pub fn direction(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Constrain all future writes to the given rectangle
    ///
    /// The current coordinates are left untouched until the next write.
    pub fn clamp(&mut self, x_min: f64, y_min: f64, x_max: f64, y_max: f64) {
        self.bounds = Some(ClampBounds::new(x_min, y_min, x_max, y_max));
    }

    /// Get the clamp rectangle, if the vector is clamped
    pub fn clamp_bounds(&self) -> Option<ClampBounds> {
        self.bounds
    }

    /// Check if the vector is clamped
    pub fn is_clamped(&self) -> bool {
        self.bounds.is_some()
    }

    /// Check if both components are finite (not NaN or infinite)
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Copy the coordinates into a plain [`Point`]
    pub fn to_point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl Pointlike for Vector {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl From<Point> for Vector {
    fn from(point: Point) -> Self {
        Vector::from_point(point)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}

impl<P: Pointlike> Add<P> for Vector {
    type Output = Vector;

    fn add(self, rhs: P) -> Vector {
        Vector::add(&self, rhs)
    }
}

impl<P: Pointlike> Sub<P> for Vector {
    type Output = Vector;

    fn sub(self, rhs: P) -> Vector {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}

impl<P: Pointlike> AddAssign<P> for Vector {
    fn add_assign(&mut self, rhs: P) {
        *self = Vector::add(self, rhs);
    }
}

impl<P: Pointlike> SubAssign<P> for Vector {
    fn sub_assign(&mut self, rhs: P) {
        *self = self.subtract(rhs);
    }
}
