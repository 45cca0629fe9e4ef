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
//! Named publish/subscribe events
//!
//! A small registry mapping event names to ordered listener lists. Listeners
//! are plain closures receiving the emitted arguments as a slice of
//! [`Any`] references, so each listener downcasts the values it expects.
//!
//! The bus is an explicit value owned by the caller; there is no process-wide
//! registry. Listener identity is the [`ListenerId`] returned by
//! [`EventBus::on`], since closures cannot be compared.
//!
//! # Lifecycle Events
//!
//! - [`INIT`] is emitted once by [`Core`](crate::core::Core) when the toolkit
//!   is initialized with a drawing surface.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use log::{debug, trace};

/// Emitted once after the toolkit is initialized with a drawing surface
pub const INIT: &str = "init";

/// Handle identifying a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Get the raw id value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

type Listener = Box<dyn FnMut(&[&dyn Any])>;

/// Registry of named event listeners
///
/// # Examples
///
/// ```
/// use std::any::Any;
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use kinetic2d::events::EventBus;
///
/// let mut bus = EventBus::new();
/// let total = Rc::new(Cell::new(0));
///
/// let sink = Rc::clone(&total);
/// let id = bus.on("score", move |args| {
///     if let Some(points) = args.first().and_then(|a| a.downcast_ref::<i32>()) {
///         sink.set(sink.get() + points);
///     }
/// });
///
/// let args: [&dyn Any; 1] = [&5];
/// bus.emit("score", &args);
/// bus.off("score", id);
/// bus.emit("score", &args);
///
/// assert_eq!(total.get(), 5);
/// ```
pub struct EventBus {
    listeners: HashMap<String, Vec<(ListenerId, Listener)>>,
    next_id: u64,
}

impl EventBus {
    /// Create a bus with no listeners
    pub fn new() -> Self {
        EventBus {
            listeners: HashMap::new(),
            next_id: 0,
        }
    }

    /// Register `callback` to run whenever `event` is emitted
    ///
    /// Listeners for the same event run in registration order.
    pub fn on<F>(&mut self, event: &str, callback: F) -> ListenerId
    where
        F: FnMut(&[&dyn Any]) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;

        self.listeners
            .entry(event.to_string())
            .or_default()
            .push((id, Box::new(callback)));

        debug!("Registered listener {} for event '{}'", id.0, event);
        id
    }

    /// Remove a previously registered listener
    ///
    /// Returns `false` if the event or listener is unknown; this is not an error.
    pub fn off(&mut self, event: &str, id: ListenerId) -> bool {
        let Some(list) = self.listeners.get_mut(event) else {
            return false;
        };

        match list.iter().position(|(listener_id, _)| *listener_id == id) {
            Some(index) => {
                drop(list.remove(index));
                debug!("Removed listener {} from event '{}'", id.0, event);
                true
            }
            None => false,
        }
    }

    /// Synchronously invoke every listener registered for `event`
    ///
    /// Emitting an event nobody listens to does nothing.
    pub fn emit(&mut self, event: &str, args: &[&dyn Any]) {
        if let Some(list) = self.listeners.get_mut(event) {
            trace!("Emitting '{}' to {} listener(s)", event, list.len());
            for (_, callback) in list.iter_mut() {
                callback(args);
            }
        }
    }

    /// Number of listeners registered for `event`
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.get(event).map_or(0, Vec::len)
    }

    /// Remove every listener for every event
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts: Vec<(&str, usize)> = self
            .listeners
            .iter()
            .map(|(name, list)| (name.as_str(), list.len()))
            .collect();
        counts.sort_unstable();
        f.debug_struct("EventBus").field("listeners", &counts).finish()
    }
}
