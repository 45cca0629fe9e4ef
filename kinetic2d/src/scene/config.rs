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
//! Game object configuration
//!
//! [`GameObjectConfig`] enumerates every property a game object accepts at
//! construction. Unset fields take neutral defaults: no rotation, unit scale,
//! full opacity, top-left anchor and an immortal TTL.

use crate::math::Point;
use crate::render::{RenderContext, SharedContext};

use super::{GameObject, ObjectId};

/// Callback drawing a game object
///
/// Invoked with the surface already transformed so that `(0, 0)` is the
/// object's anchor-adjusted top-left corner.
///
/// The object's [`SharedContext`] stays mutably borrowed while the callback
/// runs. Draw through the `&mut dyn RenderContext` argument; borrowing a
/// captured clone of the same surface panics.
pub type RenderFn = Box<dyn FnMut(&GameObject, &mut dyn RenderContext)>;

/// Callback advancing a game object by one frame
pub type UpdateFn = Box<dyn FnMut(&mut GameObject, f64)>;

/// Construction properties for a game object
///
/// # Examples
///
/// ```
/// use kinetic2d::render::{shared, RecordingContext};
/// use kinetic2d::scene::{GameObjectConfig, Scene};
///
/// let mut scene = Scene::new();
/// let id = scene.spawn(
///     GameObjectConfig::new(50.0, 50.0)
///         .at(100.0, 80.0)
///         .with_anchor(0.5, 0.5)
///         .with_context(shared(RecordingContext::new())),
/// );
/// assert_eq!(scene.get(id).map(|o| o.width()), Some(50.0));
/// ```
pub struct GameObjectConfig {
    /// X coordinate of the position vector
    pub x: f64,
    /// Y coordinate of the position vector
    pub y: f64,
    /// Local width
    pub width: f64,
    /// Local height
    pub height: f64,
    /// X component of the velocity vector
    pub dx: f64,
    /// Y component of the velocity vector
    pub dy: f64,
    /// X component of the acceleration vector
    pub ddx: f64,
    /// Y component of the acceleration vector
    pub ddy: f64,
    /// Frames the object stays alive
    pub ttl: i32,
    /// Surface to draw to; falls back to the scene's default surface
    pub context: Option<SharedContext>,
    /// Draw callback; draws nothing when unset
    pub render: Option<RenderFn>,
    /// Per-frame callback; runs [`GameObject::advance`] when unset
    pub update: Option<UpdateFn>,
    /// Normalized origin, `(0, 0)` top-left to `(1, 1)` bottom-right
    pub anchor: Point,
    /// Local opacity in `[0, 1]`
    pub opacity: f64,
    /// Local rotation in radians
    pub rotation: f64,
    /// Local horizontal scale
    pub scale_x: f64,
    /// Local vertical scale
    pub scale_y: f64,
    /// Existing objects to attach as children, in order
    pub children: Vec<ObjectId>,
}

impl GameObjectConfig {
    /// Start a configuration for an object of the given size
    pub fn new(width: f64, height: f64) -> Self {
        GameObjectConfig {
            width,
            height,
            ..Default::default()
        }
    }

    /// Set the initial position
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the drawing surface
    pub fn with_context(mut self, context: SharedContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Set the draw callback
    pub fn with_render<F>(mut self, render: F) -> Self
    where
        F: FnMut(&GameObject, &mut dyn RenderContext) + 'static,
    {
        self.render = Some(Box::new(render));
        self
    }

    /// Set the per-frame callback
    pub fn with_update<F>(mut self, update: F) -> Self
    where
        F: FnMut(&mut GameObject, f64) + 'static,
    {
        self.update = Some(Box::new(update));
        self
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, dx: f64, dy: f64) -> Self {
        self.dx = dx;
        self.dy = dy;
        self
    }

    /// Set the initial acceleration
    pub fn with_acceleration(mut self, ddx: f64, ddy: f64) -> Self {
        self.ddx = ddx;
        self.ddy = ddy;
        self
    }

    /// Set the time-to-live in frames
    pub fn with_ttl(mut self, ttl: i32) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the anchor
    pub fn with_anchor(mut self, x: f64, y: f64) -> Self {
        self.anchor = Point::new(x, y);
        self
    }

    /// Set the opacity
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set the rotation in radians
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the horizontal and vertical scale
    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    /// Set the children to attach after construction
    pub fn with_children(mut self, children: Vec<ObjectId>) -> Self {
        self.children = children;
        self
    }
}

impl Default for GameObjectConfig {
    fn default() -> Self {
        GameObjectConfig {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            dx: 0.0,
            dy: 0.0,
            ddx: 0.0,
            ddy: 0.0,
            ttl: i32::MAX,
            context: None,
            render: None,
            update: None,
            anchor: Point::zero(),
            opacity: 1.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            children: Vec::new(),
        }
    }
}
