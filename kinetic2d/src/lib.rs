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
//! # Kinetic2D
//!
//! A lightweight 2D game-object toolkit: clamped vectors, frame-stepped
//! motion, a parent/child scene graph with composed world transforms, and a
//! render pass that drives any canvas-style drawing surface.
//!
//! ## Features
//!
//! - **Math**: 2D vectors with optional persistent clamping, angle and
//!   interpolation helpers, seeded random numbers
//! - **Integration**: semi-implicit Euler motion with frame-counted TTL
//! - **Scene Graph**: generational handles, reparenting, cached world transforms
//! - **Rendering**: canvas-style [`RenderContext`](render::RenderContext)
//!   trait with a recording implementation for headless use
//! - **Events**: named listener registry with removable listeners
//! - **Parallelization**: optional Rayon integration for batch body updates
//!
//! ## Example
//!
//! ```rust
//! use kinetic2d::core::Core;
//! use kinetic2d::events::EventBus;
//! use kinetic2d::render::{shared, RecordingContext};
//! use kinetic2d::scene::GameObjectConfig;
//!
//! let mut bus = EventBus::new();
//! let core = Core::new(Some(shared(RecordingContext::new())), &mut bus);
//!
//! let mut scene = core.scene();
//! let ball = scene.spawn(
//!     GameObjectConfig::new(16.0, 16.0)
//!         .at(40.0, 40.0)
//!         .with_velocity(2.0, -1.0),
//! );
//!
//! scene.update_roots(0.0);
//! scene.render_roots();
//!
//! let ball = scene.get(ball).unwrap();
//! assert_eq!((ball.x(), ball.y()), (42.0, 39.0));
//! ```

#![warn(missing_docs)]

/// Toolkit initialization
pub mod core;

/// Error types
pub mod error;

/// Named publish/subscribe events
pub mod events;

/// Frame-stepped motion
pub mod integration;

/// 2D math primitives and helpers
pub mod math;

/// Drawing surface abstraction
pub mod render;

/// Game objects and the scene graph
pub mod scene;

pub use error::KineticError;
pub use integration::Updatable;
pub use math::{Point, Vector};
pub use scene::{GameObject, GameObjectConfig, ObjectId, Scene};
