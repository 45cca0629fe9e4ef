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
//! Game objects and their scene graph
//!
//! A [`Scene`] owns every [`GameObject`] and hands out [`ObjectId`] handles.
//! Objects form a tree: each has an ordered list of children and at most one
//! parent. Every object caches a [`WorldTransform`] composed from its own
//! attributes and its ancestors', recomputed whenever a position, size,
//! opacity, rotation, scale or parent changes.
//!
//! # Frame Loop
//!
//! ```
//! use kinetic2d::render::{shared, RecordingContext};
//! use kinetic2d::scene::{GameObjectConfig, Scene};
//!
//! let mut scene = Scene::with_context(shared(RecordingContext::new()));
//! scene.spawn(GameObjectConfig::new(8.0, 8.0).with_velocity(1.0, 0.0));
//!
//! for _ in 0..3 {
//!     scene.update_roots(0.0);
//!     scene.render_roots();
//! }
//! ```

mod arena;
mod config;
mod handle;
mod object;
mod render;
mod transform;

pub use arena::Scene;
pub use config::{GameObjectConfig, RenderFn, UpdateFn};
pub use handle::ObjectId;
pub use object::GameObject;
pub use transform::WorldTransform;
