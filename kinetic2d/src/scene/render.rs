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
//! Render pass
//!
//! Rendering pushes each object's local transform onto its drawing surface
//! and lets nested `save`/`restore` pairs compose the hierarchy, so children
//! draw relative to their parent without consulting cached world values.

use log::warn;

use crate::render::SharedContext;

use super::{ObjectId, Scene};

// Pops the surface state pushed at the start of `Scene::render`, including
// when a render callback unwinds.
struct RestoreOnDrop(SharedContext);

impl Drop for RestoreOnDrop {
    fn drop(&mut self) {
        if let Ok(mut surface) = self.0.try_borrow_mut() {
            surface.restore();
        }
    }
}

impl Scene {
    /// Draw `id` and its subtree
    ///
    /// Issues, in order: `save`, translate to the position, rotate, scale,
    /// translate by the anchor offset, set the global alpha to the object's
    /// opacity, the render callback, translate back, every child, `restore`.
    /// Identity steps are skipped.
    pub fn render(&mut self, id: ObjectId) {
        let Some(slot) = self.slot_mut(id) else {
            warn!("Attempted to render stale {}", id);
            return;
        };

        let context = slot.object.context().clone();
        context.borrow_mut().save();
        let _restore = RestoreOnDrop(context.clone());

        let children = {
            let object = &slot.object;
            let mut surface = context.borrow_mut();

            if object.x() != 0.0 || object.y() != 0.0 {
                surface.translate(object.x(), object.y());
            }
            if object.rotation() != 0.0 {
                surface.rotate(object.rotation());
            }
            if object.scale_x() != 1.0 || object.scale_y() != 1.0 {
                surface.scale(object.scale_x(), object.scale_y());
            }

            let (anchor_x, anchor_y) = object.anchor_offset();
            let anchored = anchor_x != 0.0 || anchor_y != 0.0;
            if anchored {
                surface.translate(anchor_x, anchor_y);
            }

            surface.set_global_alpha(object.opacity());
            (slot.hooks.render)(object, &mut *surface);

            if anchored {
                surface.translate(-anchor_x, -anchor_y);
            }

            object.children().to_vec()
        };

        for child in children {
            self.render(child);
        }
    }
}
