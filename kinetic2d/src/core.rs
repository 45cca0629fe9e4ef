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
//! Toolkit initialization
//!
//! [`Core`] binds the toolkit to a host drawing surface and announces that
//! the toolkit is ready by emitting [`events::INIT`].

use log::info;

use crate::error::KineticError;
use crate::events::{self, EventBus};
use crate::render::SharedContext;
use crate::scene::Scene;

/// Initialized toolkit bound to a drawing surface
pub struct Core {
    context: SharedContext,
}

impl Core {
    /// Initialize the toolkit and emit [`events::INIT`] on `bus`
    ///
    /// # Panics
    ///
    /// Panics if `context` is `None`. Use [`Core::try_new`] for a
    /// non-panicking alternative.
    ///
    /// # Examples
    ///
    /// ```
    /// use kinetic2d::core::Core;
    /// use kinetic2d::events::{EventBus, INIT};
    /// use kinetic2d::render::{shared, RecordingContext};
    ///
    /// let mut bus = EventBus::new();
    /// bus.on(INIT, |_| println!("ready"));
    ///
    /// let core = Core::new(Some(shared(RecordingContext::new())), &mut bus);
    /// let scene = core.scene();
    /// assert!(scene.is_empty());
    /// ```
    pub fn new(context: Option<SharedContext>, bus: &mut EventBus) -> Self {
        match Self::try_new(context, bus) {
            Ok(core) => core,
            Err(err) => panic!("Core initialization failed: {}", err),
        }
    }

    /// Initialize the toolkit, returning an error if no surface is supplied
    ///
    /// Nothing is emitted when initialization fails.
    pub fn try_new(context: Option<SharedContext>, bus: &mut EventBus) -> Result<Self, KineticError> {
        let context = context.ok_or(KineticError::MissingContext)?;
        info!("Toolkit initialized");
        bus.emit(events::INIT, &[]);
        Ok(Core { context })
    }

    /// Surface the toolkit was initialized with
    pub fn context(&self) -> &SharedContext {
        &self.context
    }

    /// Create an empty scene drawing to this surface by default
    pub fn scene(&self) -> Scene {
        Scene::with_context(self.context.clone())
    }
}
