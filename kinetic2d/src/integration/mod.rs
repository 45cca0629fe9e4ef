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
//! Frame-stepped integration for simulated bodies
//!
//! This module provides [`Updatable`], the per-body motion state used by
//! every game object, together with batch helpers for stepping many
//! independent bodies at once.
//!
//! # Integration Scheme
//!
//! Bodies use semi-implicit (symplectic) Euler: velocity is updated from
//! acceleration first and the updated velocity then moves the position.
//! This is cheap, stable for the constant accelerations typical of 2D games,
//! and keeps the per-frame cost to two vector additions.
//!
//! # Timestep Guidelines
//!
//! - `dt == 0`: velocity and acceleration are treated as per-frame deltas
//! - `dt > 0`: velocity and acceleration are per-second rates scaled by `dt`
//! - TTL always counts frames, never elapsed time

mod updatable;

pub use updatable::Updatable;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Advance every body in `bodies` by one frame
///
/// With the `parallel` feature enabled the slice is split across the rayon
/// thread pool; bodies are independent so the result is identical to the
/// sequential path.
pub fn advance_all(bodies: &mut [Updatable], dt: f64) {
    #[cfg(feature = "parallel")]
    {
        bodies.par_iter_mut().for_each(|body| body.advance(dt));
    }

    #[cfg(not(feature = "parallel"))]
    {
        bodies.iter_mut().for_each(|body| body.advance(dt));
    }
}

/// Count the bodies whose TTL is still above zero
pub fn count_alive(bodies: &[Updatable]) -> usize {
    bodies.iter().filter(|body| body.is_alive()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector;

    #[test]
    fn test_advance_all_matches_individual_advance() {
        let mut batch: Vec<Updatable> = (0..64)
            .map(|i| {
                Updatable::new()
                    .with_velocity(Vector::new(i as f64, -(i as f64)))
                    .with_acceleration(Vector::new(0.0, 9.81))
            })
            .collect();
        let mut expected = batch.clone();

        advance_all(&mut batch, 1.0 / 60.0);
        for body in &mut expected {
            body.advance(1.0 / 60.0);
        }

        assert_eq!(batch, expected);
    }

    #[test]
    fn test_count_alive() {
        let mut bodies = vec![
            Updatable::new().with_ttl(1),
            Updatable::new().with_ttl(2),
            Updatable::new(),
        ];
        assert_eq!(count_alive(&bodies), 3);

        advance_all(&mut bodies, 0.0);
        assert_eq!(count_alive(&bodies), 2);

        advance_all(&mut bodies, 0.0);
        assert_eq!(count_alive(&bodies), 1);
    }

    #[test]
    fn test_advance_all_empty_slice() {
        let mut bodies: Vec<Updatable> = Vec::new();
        advance_all(&mut bodies, 1.0);
        assert_eq!(count_alive(&bodies), 0);
    }
}
