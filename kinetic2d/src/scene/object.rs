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
//! Game object state
//!
//! A [`GameObject`] combines an [`Updatable`] body with the spatial
//! attributes used for rendering: size, anchor, opacity, rotation and scale.
//! It also caches its [`WorldTransform`], the result of composing those
//! attributes with every ancestor.
//!
//! Objects are owned by a [`Scene`](super::Scene). Setters here only change
//! local state; the scene runs the property-changed pass after every
//! mutation it hands out (`Scene::modify`, `Scene::update`), so the cached
//! world values of the whole subtree are always current.

use crate::integration::Updatable;
use crate::math::{helpers, Point, Vector};
use crate::render::SharedContext;

use super::{ObjectId, WorldTransform};

/// Renderable, updatable object in a scene hierarchy
pub struct GameObject {
    body: Updatable,
    width: f64,
    height: f64,
    anchor: Point,
    opacity: f64,
    rotation: f64,
    scale_x: f64,
    scale_y: f64,
    context: SharedContext,
    parent: Option<ObjectId>,
    children: Vec<ObjectId>,
    world: WorldTransform,
    // World values are not computed until construction completes
    done_init: bool,
}

impl GameObject {
    pub(crate) fn new(body: Updatable, width: f64, height: f64, context: SharedContext) -> Self {
        GameObject {
            body,
            width,
            height,
            anchor: Point::zero(),
            opacity: 1.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            context,
            parent: None,
            children: Vec::new(),
            world: WorldTransform::default(),
            done_init: false,
        }
    }

    /// X coordinate of the local position
    pub fn x(&self) -> f64 {
        self.body.position().x()
    }

    /// Y coordinate of the local position
    pub fn y(&self) -> f64 {
        self.body.position().y()
    }

    /// Set the x coordinate (subject to the position clamp)
    pub fn set_x(&mut self, x: f64) {
        self.body.position_mut().set_x(x);
    }

    /// Set the y coordinate (subject to the position clamp)
    pub fn set_y(&mut self, y: f64) {
        self.body.position_mut().set_y(y);
    }

    /// Set both coordinates of the local position
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.body.position_mut().set((x, y));
    }

    /// Local position vector
    pub fn position(&self) -> &Vector {
        self.body.position()
    }

    /// Local width
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Local height
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Set the local width
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Set the local height
    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    /// Normalized origin within the local bounds
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Set the anchor
    pub fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }

    /// Translation that moves the anchor to the origin: `(-w*ax, -h*ay)`
    pub fn anchor_offset(&self) -> (f64, f64) {
        (-self.width * self.anchor.x, -self.height * self.anchor.y)
    }

    /// Local opacity
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Set the local opacity, clamped to `[0, 1]`
    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = helpers::clamp(0.0, 1.0, opacity);
    }

    /// Local rotation in radians
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Set the local rotation in radians
    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    /// Local horizontal scale
    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    /// Local vertical scale
    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    /// Set the local horizontal scale
    pub fn set_scale_x(&mut self, scale_x: f64) {
        self.scale_x = scale_x;
    }

    /// Set the local vertical scale
    pub fn set_scale_y(&mut self, scale_y: f64) {
        self.scale_y = scale_y;
    }

    /// Set both scale factors
    pub fn set_scale(&mut self, scale_x: f64, scale_y: f64) {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
    }

    /// Set both scale factors to `scale`
    pub fn set_uniform_scale(&mut self, scale: f64) {
        self.set_scale(scale, scale);
    }

    /// Motion state (position, velocity, acceleration, TTL)
    pub fn body(&self) -> &Updatable {
        &self.body
    }

    /// Mutable motion state
    pub fn body_mut(&mut self) -> &mut Updatable {
        &mut self.body
    }

    /// Move the object by its velocity and acceleration
    ///
    /// See [`Updatable::advance`].
    pub fn advance(&mut self, dt: f64) {
        self.body.advance(dt);
    }

    /// Check if the object's TTL is above zero
    pub fn is_alive(&self) -> bool {
        self.body.is_alive()
    }

    /// Cached world transform
    pub fn world(&self) -> &WorldTransform {
        &self.world
    }

    /// Parent handle, if attached
    pub fn parent(&self) -> Option<ObjectId> {
        self.parent
    }

    /// Child handles in render order
    pub fn children(&self) -> &[ObjectId] {
        &self.children
    }

    // Borrowed mutably for the whole render pass; callbacks draw through the
    // surface argument instead.
    pub(crate) fn context(&self) -> &SharedContext {
        &self.context
    }

    pub(crate) fn set_parent(&mut self, parent: Option<ObjectId>) {
        self.parent = parent;
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<ObjectId> {
        &mut self.children
    }

    pub(crate) fn set_world(&mut self, world: WorldTransform) {
        self.world = world;
    }

    pub(crate) fn is_initialized(&self) -> bool {
        self.done_init
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.done_init = true;
    }
}
