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
//! Scene arena
//!
//! The [`Scene`] owns every game object and the relations between them.
//! Objects are addressed by generational [`ObjectId`] handles; each object
//! stores its parent handle (non-owning) and an ordered list of child
//! handles. Despawning an object bumps its slot's generation so that old
//! handles are rejected instead of aliasing a newer object.

use log::{debug, warn};

use crate::error::KineticError;
use crate::integration::Updatable;
use crate::math::Vector;
use crate::render::{RenderContext, SharedContext};

use super::config::{RenderFn, UpdateFn};
use super::{GameObject, GameObjectConfig, ObjectId};

pub(crate) struct Hooks {
    pub(crate) render: RenderFn,
    pub(crate) update: UpdateFn,
}

pub(crate) struct Slot {
    pub(crate) object: GameObject,
    pub(crate) hooks: Hooks,
}

struct Entry {
    generation: u32,
    slot: Option<Slot>,
}

/// Arena owning game objects and their hierarchy
///
/// # Examples
///
/// ```
/// use kinetic2d::render::{shared, RecordingContext};
/// use kinetic2d::scene::{GameObjectConfig, Scene};
///
/// let mut scene = Scene::with_context(shared(RecordingContext::new()));
///
/// let ship = scene.spawn(GameObjectConfig::new(20.0, 20.0).at(100.0, 100.0));
/// let turret = scene.spawn(GameObjectConfig::new(4.0, 4.0).at(5.0, 0.0));
/// scene.add_child(ship, turret).unwrap();
///
/// let world = scene.get(turret).unwrap().world();
/// assert_eq!((world.x, world.y), (105.0, 100.0));
/// ```
pub struct Scene {
    entries: Vec<Entry>,
    free: Vec<u32>,
    roots: Vec<ObjectId>,
    live: usize,
    default_context: Option<SharedContext>,
}

impl Scene {
    /// Create an empty scene without a default drawing surface
    pub fn new() -> Self {
        Scene {
            entries: Vec::new(),
            free: Vec::new(),
            roots: Vec::new(),
            live: 0,
            default_context: None,
        }
    }

    /// Create an empty scene whose objects draw to `context` unless their
    /// configuration names another surface
    pub fn with_context(context: SharedContext) -> Self {
        Scene {
            default_context: Some(context),
            ..Scene::new()
        }
    }

    /// Surface used for objects spawned without one
    pub fn default_context(&self) -> Option<&SharedContext> {
        self.default_context.as_ref()
    }

    /// Create a game object and return its handle
    ///
    /// # Panics
    ///
    /// Panics if neither the configuration nor the scene supplies a drawing
    /// surface, or if a configured child handle is stale. Use
    /// [`try_spawn`](Self::try_spawn) for fallible construction.
    pub fn spawn(&mut self, config: GameObjectConfig) -> ObjectId {
        match self.try_spawn(config) {
            Ok(id) => id,
            Err(err) => panic!("GameObject construction failed: {}", err),
        }
    }

    /// Create a game object, reporting a missing surface or stale child
    /// handle as an error
    pub fn try_spawn(&mut self, config: GameObjectConfig) -> Result<ObjectId, KineticError> {
        let context = config
            .context
            .or_else(|| self.default_context.clone())
            .ok_or(KineticError::MissingContext)?;

        if let Some(stale) = config.children.iter().find(|child| !self.contains(**child)) {
            return Err(KineticError::StaleObject(*stale));
        }

        let body = Updatable::new()
            .with_position(Vector::new(config.x, config.y))
            .with_velocity(Vector::new(config.dx, config.dy))
            .with_acceleration(Vector::new(config.ddx, config.ddy))
            .with_ttl(config.ttl);

        let mut object = GameObject::new(body, config.width, config.height, context);
        object.set_anchor(config.anchor);
        object.set_opacity(config.opacity);
        object.set_rotation(config.rotation);
        object.set_scale(config.scale_x, config.scale_y);
        object.mark_initialized();

        let hooks = Hooks {
            render: config
                .render
                .unwrap_or_else(|| Box::new(|_: &GameObject, _: &mut dyn RenderContext| {})),
            update: config
                .update
                .unwrap_or_else(|| Box::new(|object: &mut GameObject, dt| object.advance(dt))),
        };

        let id = self.insert(Slot { object, hooks });
        self.roots.push(id);
        self.property_changed(id);

        for child in config.children {
            // Children were validated above and a fresh object has no
            // ancestors, so attaching cannot fail
            if let Err(err) = self.add_child(id, child) {
                warn!("Failed to attach {} to new object {}: {}", child, id, err);
            }
        }

        debug!("Spawned {}", id);
        Ok(id)
    }

    fn insert(&mut self, slot: Slot) -> ObjectId {
        self.live += 1;

        if let Some(index) = self.free.pop() {
            let entry = &mut self.entries[index as usize];
            entry.slot = Some(slot);
            return ObjectId::new(index, entry.generation);
        }

        let index = self.entries.len() as u32;
        self.entries.push(Entry {
            generation: 0,
            slot: Some(slot),
        });
        ObjectId::new(index, 0)
    }

    /// Remove an object and its entire subtree
    ///
    /// Returns `false` if the handle is stale.
    pub fn despawn(&mut self, id: ObjectId) -> bool {
        if !self.contains(id) {
            warn!("Attempted to despawn stale {}", id);
            return false;
        }

        self.detach(id);

        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            let entry = &mut self.entries[current.index() as usize];
            if let Some(slot) = entry.slot.take() {
                pending.extend_from_slice(slot.object.children());
                entry.generation = entry.generation.wrapping_add(1);
                self.free.push(current.index());
                self.live -= 1;
                debug!("Despawned {}", current);
            }
        }
        true
    }

    pub(crate) fn slot(&self, id: ObjectId) -> Option<&Slot> {
        self.entries
            .get(id.index() as usize)
            .filter(|entry| entry.generation == id.generation())
            .and_then(|entry| entry.slot.as_ref())
    }

    pub(crate) fn slot_mut(&mut self, id: ObjectId) -> Option<&mut Slot> {
        self.entries
            .get_mut(id.index() as usize)
            .filter(|entry| entry.generation == id.generation())
            .and_then(|entry| entry.slot.as_mut())
    }

    pub(crate) fn object_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.slot_mut(id).map(|slot| &mut slot.object)
    }

    /// Get an object by handle
    pub fn get(&self, id: ObjectId) -> Option<&GameObject> {
        self.slot(id).map(|slot| &slot.object)
    }

    /// Mutate an object, then recompute world transforms for its subtree
    ///
    /// Returns `None` without calling `f` if the handle is stale.
    ///
    /// # Examples
    ///
    /// ```
    /// use kinetic2d::render::{shared, RecordingContext};
    /// use kinetic2d::scene::{GameObjectConfig, Scene};
    ///
    /// let mut scene = Scene::with_context(shared(RecordingContext::new()));
    /// let id = scene.spawn(GameObjectConfig::new(10.0, 10.0));
    ///
    /// scene.modify(id, |object| object.set_scale(2.0, 2.0));
    /// assert_eq!(scene.get(id).unwrap().world().width, 20.0);
    /// ```
    pub fn modify<R, F>(&mut self, id: ObjectId, f: F) -> Option<R>
    where
        F: FnOnce(&mut GameObject) -> R,
    {
        let result = f(self.object_mut(id)?);
        self.property_changed(id);
        Some(result)
    }

    /// Check if a handle refers to a live object
    pub fn contains(&self, id: ObjectId) -> bool {
        self.slot(id).is_some()
    }

    /// Number of live objects
    pub fn len(&self) -> usize {
        self.live
    }

    /// Check if the scene holds no objects
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Objects without a parent, in the order they became roots
    pub fn roots(&self) -> &[ObjectId] {
        &self.roots
    }

    /// Parent of an object, if it has one
    pub fn parent(&self, id: ObjectId) -> Option<ObjectId> {
        self.get(id).and_then(GameObject::parent)
    }

    /// Children of an object; empty for stale handles
    pub fn children(&self, id: ObjectId) -> &[ObjectId] {
        self.get(id).map_or(&[][..], GameObject::children)
    }

    /// Iterate over all live objects in slot order
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &GameObject)> + '_ {
        self.entries.iter().enumerate().filter_map(|(index, entry)| {
            entry
                .slot
                .as_ref()
                .map(|slot| (ObjectId::new(index as u32, entry.generation), &slot.object))
        })
    }

    /// Attach `child` as the last child of `parent`
    ///
    /// A child that already belongs to another parent is moved. Attaching an
    /// object to itself or to one of its descendants is rejected.
    pub fn add_child(&mut self, parent: ObjectId, child: ObjectId) -> Result<(), KineticError> {
        if !self.contains(parent) {
            return Err(KineticError::StaleObject(parent));
        }
        if !self.contains(child) {
            return Err(KineticError::StaleObject(child));
        }
        if self.is_ancestor_or_self(child, parent) {
            warn!("Rejected attaching {} under {}: cycle", child, parent);
            return Err(KineticError::HierarchyCycle { parent, child });
        }
        if self.parent(child) == Some(parent) {
            return Ok(());
        }

        self.detach(child);
        if let Some(object) = self.object_mut(parent) {
            object.children_mut().push(child);
        }
        if let Some(object) = self.object_mut(child) {
            object.set_parent(Some(parent));
        }
        self.roots.retain(|root| *root != child);
        self.property_changed(child);

        debug!("Attached {} under {}", child, parent);
        Ok(())
    }

    /// Detach `child` from `parent`
    ///
    /// The child becomes a root and its subtree's world transforms revert to
    /// local-only values. Returns `false` if `child` is not a child of `parent`.
    pub fn remove_child(&mut self, parent: ObjectId, child: ObjectId) -> bool {
        let removed = match self.object_mut(parent) {
            Some(object) => {
                let children = object.children_mut();
                let before = children.len();
                children.retain(|existing| *existing != child);
                children.len() != before
            }
            None => false,
        };
        if !removed {
            return false;
        }

        if let Some(object) = self.object_mut(child) {
            object.set_parent(None);
        }
        self.roots.push(child);
        self.property_changed(child);

        debug!("Detached {} from {}", child, parent);
        true
    }

    /// Replace all of `parent`'s children with `children`, in order
    ///
    /// Current children that are not in the new list become roots. The whole
    /// list is validated first, so a stale handle or a cycle leaves the
    /// hierarchy unchanged.
    pub fn set_children(
        &mut self,
        parent: ObjectId,
        children: Vec<ObjectId>,
    ) -> Result<(), KineticError> {
        if !self.contains(parent) {
            return Err(KineticError::StaleObject(parent));
        }
        for &child in &children {
            if !self.contains(child) {
                return Err(KineticError::StaleObject(child));
            }
            if self.is_ancestor_or_self(child, parent) {
                warn!("Rejected attaching {} under {}: cycle", child, parent);
                return Err(KineticError::HierarchyCycle { parent, child });
            }
        }

        for child in self.children(parent).to_vec() {
            self.remove_child(parent, child);
        }
        for child in children {
            self.add_child(parent, child)?;
        }
        Ok(())
    }

    // Unlinks `id` from its parent (or the root list) without touching its
    // world transform.
    fn detach(&mut self, id: ObjectId) {
        match self.parent(id) {
            Some(parent) => {
                if let Some(object) = self.object_mut(parent) {
                    object.children_mut().retain(|existing| *existing != id);
                }
                if let Some(object) = self.object_mut(id) {
                    object.set_parent(None);
                }
            }
            None => self.roots.retain(|root| *root != id),
        }
    }

    fn is_ancestor_or_self(&self, candidate: ObjectId, mut id: ObjectId) -> bool {
        loop {
            if id == candidate {
                return true;
            }
            match self.parent(id) {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    /// Run one frame of `id`'s update callback, then its children's
    ///
    /// The default callback advances the object's body. World transforms are
    /// recomputed after the callback returns.
    pub fn update(&mut self, id: ObjectId, dt: f64) {
        let Some(slot) = self.slot_mut(id) else {
            warn!("Attempted to update stale {}", id);
            return;
        };

        (slot.hooks.update)(&mut slot.object, dt);
        let children = slot.object.children().to_vec();

        self.property_changed(id);
        for child in children {
            self.update(child, dt);
        }
    }

    /// Update every root object and, through them, the whole scene
    pub fn update_roots(&mut self, dt: f64) {
        for root in self.roots.clone() {
            self.update(root, dt);
        }
    }

    /// Render every root object and, through them, the whole scene
    pub fn render_roots(&mut self) {
        for root in self.roots.clone() {
            self.render(root);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
