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
//! Stateless numeric helpers
//!
//! Angle conversion, point rotation and movement, linear interpolation,
//! clamping and seeded random number generation. None of these functions
//! hold state; the RNG helpers take or return an explicit generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Point, Pointlike};

/// Convert degrees to radians
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

/// Convert radians to degrees
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / std::f64::consts::PI
}

/// Angle in radians from `source` to `target`
///
/// # Examples
///
/// ```
/// use kinetic2d::math::{helpers::angle_to_target, Point};
///
/// let angle = angle_to_target(Point::new(0.0, 0.0), Point::new(0.0, 10.0));
/// assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn angle_to_target(source: impl Pointlike, target: impl Pointlike) -> f64 {
    (target.y() - source.y()).atan2(target.x() - source.x())
}

/// Rotate a point around the origin by `angle` radians
pub fn rotate_point(point: impl Pointlike, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(
        point.x() * cos - point.y() * sin,
        point.x() * sin + point.y() * cos,
    )
}

/// Move a point `distance` units along `angle` radians
pub fn move_point(point: impl Pointlike, angle: f64, distance: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(point.x() + cos * distance, point.y() + sin * distance)
}

/// Random integer in `[min, max)` drawn from `rng`
///
/// Returns `min` when the range is empty (`max <= min`).
pub fn rand_int<R: Rng>(min: i32, max: i32, rng: &mut R) -> i32 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..max)
}

/// Create a deterministic generator seeded from a string
///
/// The same string always yields the same sequence.
pub fn seed_rand(seed: &str) -> StdRng {
    // 31-based rolling hash over the characters, wrapped to 32 bits
    let hash = seed
        .chars()
        .fold(0u32, |hash, c| hash.wrapping_mul(31).wrapping_add(c as u32));
    StdRng::seed_from_u64(u64::from(hash))
}

/// Linear interpolation between `start` and `end`
///
/// `percent` is not clamped, so values outside `[0, 1]` extrapolate.
pub fn lerp(start: f64, end: f64, percent: f64) -> f64 {
    start * (1.0 - percent) + end * percent
}

/// Inverse of [`lerp`]: where `value` falls between `start` and `end`
pub fn inverse_lerp(start: f64, end: f64, value: f64) -> f64 {
    (value - start) / (end - start)
}

/// Constrain `value` to `[min, max]`
///
/// Computed as `min(max(min, value), max)`, so `max` wins if the range is
/// inverted. Argument order follows the lower bound, upper bound, value
/// convention used throughout the toolkit.
pub fn clamp(min: f64, max: f64, value: f64) -> f64 {
    min.max(value).min(max)
}
