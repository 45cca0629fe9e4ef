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
//! World transform composition
//!
//! Each object caches the transform it ends up with after composing its
//! local attributes with its parent's world transform. The property-changed
//! pass recomputes that cache top-down, from a mutated object through its
//! whole subtree, so reads never see stale values.
//!
//! # Composition
//!
//! Given the parent's world transform `P` (the identity for a root):
//!
//! ```text
//! scale    = P.scale * scale
//! x, y     = (x * P.scale_x, y * P.scale_y)
//! size     = (width * scale_x, height * scale_y)
//! rotation = P.rotation + rotation
//! x, y     = rotate((x, y), P.rotation) + (P.x, P.y)
//! opacity  = P.opacity * opacity
//! ```
//!
//! The parent's rotation turns the child's offset before the child's own
//! rotation is added, so the child orbits the parent's origin.

use log::trace;

use crate::math::{helpers, Point};

use super::{GameObject, ObjectId, Scene};

/// Effective transform of an object after composing all ancestors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldTransform {
    /// World x coordinate
    pub x: f64,
    /// World y coordinate
    pub y: f64,
    /// World width
    pub width: f64,
    /// World height
    pub height: f64,
    /// World opacity
    pub opacity: f64,
    /// World rotation in radians
    pub rotation: f64,
    /// World horizontal scale
    pub scale_x: f64,
    /// World vertical scale
    pub scale_y: f64,
}

impl WorldTransform {
    /// Transform of the scene root: origin, full opacity, no rotation, unit scale
    pub const IDENTITY: WorldTransform = WorldTransform {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
        opacity: 1.0,
        rotation: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
    };

    /// Compose `object`'s local attributes onto this (parent) transform
    pub fn compose(&self, object: &GameObject) -> WorldTransform {
        let scale_x = self.scale_x * object.scale_x();
        let scale_y = self.scale_y * object.scale_y();

        let offset = Point::new(object.x() * self.scale_x, object.y() * self.scale_y);
        let rotated = helpers::rotate_point(offset, self.rotation);

        WorldTransform {
            x: rotated.x + self.x,
            y: rotated.y + self.y,
            width: object.width() * scale_x,
            height: object.height() * scale_y,
            opacity: self.opacity * object.opacity(),
            rotation: self.rotation + object.rotation(),
            scale_x,
            scale_y,
        }
    }
}

impl Default for WorldTransform {
    fn default() -> Self {
        WorldTransform::IDENTITY
    }
}

impl Scene {
    /// Recompute cached world transforms for `id` and its whole subtree
    ///
    /// Parents are always visited before their children. Objects that have
    /// not finished construction are skipped along with their subtree.
    pub(crate) fn property_changed(&mut self, id: ObjectId) {
        let mut pending = vec![id];

        while let Some(current) = pending.pop() {
            let parent_world = self
                .get(current)
                .and_then(GameObject::parent)
                .and_then(|parent| self.get(parent))
                .map_or(WorldTransform::IDENTITY, |parent| *parent.world());

            let Some(object) = self.object_mut(current) else {
                continue;
            };
            if !object.is_initialized() {
                continue;
            }

            let world = parent_world.compose(object);
            object.set_world(world);
            trace!("Recomputed world transform for {}: {:?}", current, world);

            // Reverse so children are visited in their stored order
            pending.extend(object.children().iter().rev().copied());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::Updatable;
    use crate::math::Vector;
    use crate::render::{shared, RecordingContext};
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-9;

    fn object_at(x: f64, y: f64, width: f64, height: f64) -> GameObject {
        let mut object = GameObject::new(
            Updatable::new().with_position(Vector::new(x, y)),
            width,
            height,
            shared(RecordingContext::new()),
        );
        object.mark_initialized();
        object
    }

    #[test]
    fn test_identity_leaves_local_values() {
        let object = object_at(10.0, 20.0, 30.0, 40.0);
        let world = WorldTransform::IDENTITY.compose(&object);

        assert_eq!((world.x, world.y), (10.0, 20.0));
        assert_eq!((world.width, world.height), (30.0, 40.0));
        assert_eq!(world.opacity, 1.0);
        assert_eq!(world.rotation, 0.0);
        assert_eq!((world.scale_x, world.scale_y), (1.0, 1.0));
    }

    #[test]
    fn test_own_scale_affects_size_not_position() {
        let mut object = object_at(10.0, 20.0, 30.0, 40.0);
        object.set_scale(2.0, 3.0);
        let world = WorldTransform::IDENTITY.compose(&object);

        assert_eq!((world.x, world.y), (10.0, 20.0));
        assert_eq!((world.width, world.height), (60.0, 120.0));
        assert_eq!((world.scale_x, world.scale_y), (2.0, 3.0));
    }

    #[test]
    fn test_parent_scale_affects_position() {
        let parent = WorldTransform {
            x: 100.0,
            y: 50.0,
            scale_x: 2.0,
            scale_y: 0.5,
            ..WorldTransform::IDENTITY
        };
        let object = object_at(10.0, 20.0, 4.0, 4.0);
        let world = parent.compose(&object);

        assert_eq!((world.x, world.y), (120.0, 60.0));
        assert_eq!((world.width, world.height), (8.0, 2.0));
    }

    #[test]
    fn test_parent_rotation_turns_offset() {
        let parent = WorldTransform {
            rotation: FRAC_PI_2,
            ..WorldTransform::IDENTITY
        };
        let mut object = object_at(10.0, 0.0, 1.0, 1.0);
        object.set_rotation(0.25);
        let world = parent.compose(&object);

        assert!(world.x.abs() < EPSILON);
        assert!((world.y - 10.0).abs() < EPSILON);
        assert!((world.rotation - (FRAC_PI_2 + 0.25)).abs() < EPSILON);
    }

    #[test]
    fn test_opacity_multiplies() {
        let parent = WorldTransform {
            opacity: 0.5,
            ..WorldTransform::IDENTITY
        };
        let mut object = object_at(0.0, 0.0, 1.0, 1.0);
        object.set_opacity(0.5);
        assert_eq!(parent.compose(&object).opacity, 0.25);
    }
}
