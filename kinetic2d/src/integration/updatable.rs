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
//! Frame-stepped motion state
//!
//! [`Updatable`] owns the position, velocity and acceleration of a simulated
//! body together with a time-to-live counter measured in frames.
//!
//! # Algorithm
//!
//! Each call to [`Updatable::advance`] performs one semi-implicit Euler step:
//!
//! ```text
//! v(t + dt) = v(t) + a(t)*dt
//! x(t + dt) = x(t) + v(t + dt)*dt
//! ttl       = ttl - 1
//! ```
//!
//! Velocity is updated first and the *new* velocity moves the position.
//! A `dt` of zero means "one whole unit per frame": the vectors are added
//! unscaled instead of being multiplied by zero.

use crate::math::Vector;

/// Position, velocity, acceleration and lifetime of a simulated body
///
/// # Examples
///
/// ```
/// use kinetic2d::integration::Updatable;
/// use kinetic2d::math::Vector;
///
/// let mut body = Updatable::new()
///     .with_velocity(Vector::new(5.0, 10.0))
///     .with_acceleration(Vector::new(10.0, 20.0));
///
/// body.advance(0.5);
/// assert_eq!(*body.velocity(), Vector::new(10.0, 20.0));
/// assert_eq!(*body.position(), Vector::new(5.0, 10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Updatable {
    position: Vector,
    velocity: Vector,
    acceleration: Vector,
    ttl: i32,
}

impl Updatable {
    /// TTL of a body that never expires
    pub const IMMORTAL: i32 = i32::MAX;

    /// Create a body at rest at the origin that never expires
    pub fn new() -> Self {
        Updatable {
            position: Vector::zero(),
            velocity: Vector::zero(),
            acceleration: Vector::zero(),
            ttl: Self::IMMORTAL,
        }
    }

    /// Set the initial position
    pub fn with_position(mut self, position: Vector) -> Self {
        self.position = position;
        self
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the initial acceleration
    pub fn with_acceleration(mut self, acceleration: Vector) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Set the initial time-to-live in frames
    pub fn with_ttl(mut self, ttl: i32) -> Self {
        self.ttl = ttl;
        self
    }

    /// Advance the body by one frame
    ///
    /// Applies acceleration to velocity, then the updated velocity to
    /// position, scaling both by `dt` unless it is zero. The TTL always drops
    /// by exactly one, independent of `dt`.
    pub fn advance(&mut self, dt: f64) {
        let acceleration = if dt != 0.0 {
            self.acceleration.scale(dt)
        } else {
            self.acceleration
        };
        self.velocity = self.velocity.add(acceleration);

        let velocity = if dt != 0.0 {
            self.velocity.scale(dt)
        } else {
            self.velocity
        };
        self.position = self.position.add(velocity);

        self.ttl = self.ttl.saturating_sub(1);
    }

    /// Per-frame update entry point; identical to [`advance`](Self::advance)
    pub fn update(&mut self, dt: f64) {
        self.advance(dt);
    }

    /// Check if the body is still alive (`ttl > 0`)
    pub fn is_alive(&self) -> bool {
        self.ttl > 0
    }

    /// Get the position vector
    pub fn position(&self) -> &Vector {
        &self.position
    }

    /// Get mutable access to the position vector
    pub fn position_mut(&mut self) -> &mut Vector {
        &mut self.position
    }

    /// Replace the position vector
    pub fn set_position(&mut self, position: Vector) {
        self.position = position;
    }

    /// Get the velocity vector
    pub fn velocity(&self) -> &Vector {
        &self.velocity
    }

    /// Get mutable access to the velocity vector
    pub fn velocity_mut(&mut self) -> &mut Vector {
        &mut self.velocity
    }

    /// Replace the velocity vector
    pub fn set_velocity(&mut self, velocity: Vector) {
        self.velocity = velocity;
    }

    /// Get the acceleration vector
    pub fn acceleration(&self) -> &Vector {
        &self.acceleration
    }

    /// Get mutable access to the acceleration vector
    pub fn acceleration_mut(&mut self) -> &mut Vector {
        &mut self.acceleration
    }

    /// Replace the acceleration vector
    pub fn set_acceleration(&mut self, acceleration: Vector) {
        self.acceleration = acceleration;
    }

    /// Get the x component of velocity
    pub fn dx(&self) -> f64 {
        self.velocity.x()
    }

    /// Get the y component of velocity
    pub fn dy(&self) -> f64 {
        self.velocity.y()
    }

    /// Set the x component of velocity (subject to its clamp)
    pub fn set_dx(&mut self, dx: f64) {
        self.velocity.set_x(dx);
    }

    /// Set the y component of velocity (subject to its clamp)
    pub fn set_dy(&mut self, dy: f64) {
        self.velocity.set_y(dy);
    }

    /// Get the x component of acceleration
    pub fn ddx(&self) -> f64 {
        self.acceleration.x()
    }

    /// Get the y component of acceleration
    pub fn ddy(&self) -> f64 {
        self.acceleration.y()
    }

    /// Set the x component of acceleration (subject to its clamp)
    pub fn set_ddx(&mut self, ddx: f64) {
        self.acceleration.set_x(ddx);
    }

    /// Set the y component of acceleration (subject to its clamp)
    pub fn set_ddy(&mut self, ddy: f64) {
        self.acceleration.set_y(ddy);
    }

    /// Get the remaining time-to-live in frames
    pub fn ttl(&self) -> i32 {
        self.ttl
    }

    /// Set the remaining time-to-live in frames
    pub fn set_ttl(&mut self, ttl: i32) {
        self.ttl = ttl;
    }
}

impl Default for Updatable {
    fn default() -> Self {
        Updatable::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let body = Updatable::new();
        assert_eq!(*body.position(), Vector::zero());
        assert_eq!(*body.velocity(), Vector::zero());
        assert_eq!(*body.acceleration(), Vector::zero());
        assert_eq!(body.ttl(), i32::MAX);
        assert!(body.is_alive());
    }

    #[test]
    fn test_zero_dt_adds_acceleration_unscaled() {
        let mut body = Updatable::new()
            .with_velocity(Vector::new(5.0, 10.0))
            .with_acceleration(Vector::new(15.0, 20.0));

        body.advance(0.0);
        assert_eq!(*body.velocity(), Vector::new(20.0, 30.0));
    }

    #[test]
    fn test_zero_dt_adds_velocity_unscaled() {
        let mut body = Updatable::new()
            .with_position(Vector::new(5.0, 10.0))
            .with_velocity(Vector::new(15.0, 20.0));

        body.advance(0.0);
        assert_eq!(*body.position(), Vector::new(20.0, 30.0));
    }

    #[test]
    fn test_dt_scales_deltas() {
        let mut body = Updatable::new()
            .with_velocity(Vector::new(5.0, 10.0))
            .with_acceleration(Vector::new(10.0, 20.0));

        body.advance(0.5);
        assert_eq!(*body.velocity(), Vector::new(10.0, 20.0));
    }

    #[test]
    fn test_position_uses_updated_velocity() {
        let mut body = Updatable::new()
            .with_velocity(Vector::new(1.0, 0.0))
            .with_acceleration(Vector::new(1.0, 0.0));

        body.advance(1.0);
        // New velocity (2, 0) moves the body, not the old one
        assert_eq!(*body.position(), Vector::new(2.0, 0.0));
    }

    #[test]
    fn test_ttl_counts_frames() {
        let mut body = Updatable::new().with_ttl(2);

        body.advance(100.0);
        assert_eq!(body.ttl(), 1);
        assert!(body.is_alive());

        body.advance(0.001);
        assert_eq!(body.ttl(), 0);
        assert!(!body.is_alive());

        body.advance(0.0);
        assert_eq!(body.ttl(), -1);
        assert!(!body.is_alive());
    }

    #[test]
    fn test_ttl_saturates() {
        let mut body = Updatable::new().with_ttl(i32::MIN);
        body.advance(1.0);
        assert_eq!(body.ttl(), i32::MIN);
    }

    #[test]
    fn test_update_matches_advance() {
        let mut a = Updatable::new().with_velocity(Vector::new(3.0, 4.0));
        let mut b = a;
        a.update(0.25);
        b.advance(0.25);
        assert_eq!(a, b);
    }

    #[test]
    fn test_component_accessors() {
        let mut body = Updatable::new();
        body.set_dx(1.0);
        body.set_dy(2.0);
        body.set_ddx(3.0);
        body.set_ddy(4.0);

        assert_eq!(body.dx(), 1.0);
        assert_eq!(body.dy(), 2.0);
        assert_eq!(body.ddx(), 3.0);
        assert_eq!(body.ddy(), 4.0);
        assert_eq!(*body.velocity(), Vector::new(1.0, 2.0));
        assert_eq!(*body.acceleration(), Vector::new(3.0, 4.0));
    }

    #[test]
    fn test_component_writes_respect_clamp() {
        let mut body = Updatable::new();
        body.velocity_mut().clamp(-5.0, -5.0, 5.0, 5.0);

        body.set_dx(50.0);
        body.set_dy(-50.0);
        assert_eq!(body.dx(), 5.0);
        assert_eq!(body.dy(), -5.0);
    }

    #[test]
    fn test_clamped_position_survives_advance() {
        let mut position = Vector::new(0.0, 0.0);
        position.clamp(0.0, 0.0, 10.0, 10.0);
        let mut body = Updatable::new()
            .with_position(position)
            .with_velocity(Vector::new(4.0, 4.0));

        for _ in 0..10 {
            body.advance(1.0);
        }
        assert_eq!(*body.position(), Vector::new(10.0, 10.0));
        assert!(body.position().is_clamped());
    }
}
