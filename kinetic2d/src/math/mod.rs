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
//! 2D math primitives
//!
//! This module provides the point and vector types shared by the rest of the
//! toolkit, plus a small library of stateless numeric helpers:
//! - [`Point`]: a plain `{x, y}` value
//! - [`Pointlike`]: anything that exposes `x` and `y` coordinates
//! - [`Vector`]: a 2D vector with optional persistent axis clamping
//! - [`helpers`]: angle conversion, interpolation, clamping and seeded RNG

mod vector;
pub mod helpers;

pub use vector::{ClampBounds, Vector};

/// Anything with `x` and `y` coordinates
///
/// Vector constructors and operations accept any `Pointlike` value, so a
/// [`Point`], a [`Vector`] or a plain `(f64, f64)` tuple can be passed
/// interchangeably.
pub trait Pointlike {
    /// Get the x coordinate
    fn x(&self) -> f64;

    /// Get the y coordinate
    fn y(&self) -> f64;
}

/// Plain 2D point without any behavior attached
///
/// Used for anchors, helper inputs and results.
///
/// # Examples
///
/// ```
/// use kinetic2d::math::{Point, Pointlike};
///
/// let p = Point::new(3.0, 4.0);
/// assert_eq!(p.x(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// The origin (0, 0)
    pub const fn zero() -> Self {
        Point::new(0.0, 0.0)
    }
}

impl Pointlike for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl Pointlike for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

impl<T: Pointlike + ?Sized> Pointlike for &T {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}
