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
//! Error types

use std::fmt;

use crate::scene::ObjectId;

/// Errors reported by fallible toolkit operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KineticError {
    /// A drawing surface was required but none was supplied
    MissingContext,
    /// The handle refers to an object that was despawned or never existed
    StaleObject(ObjectId),
    /// Attaching `child` under `parent` would make an object its own ancestor
    HierarchyCycle {
        /// Object that would receive the child
        parent: ObjectId,
        /// Object being attached
        child: ObjectId,
    },
}

impl fmt::Display for KineticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KineticError::MissingContext => write!(f, "a drawing context is required"),
            KineticError::StaleObject(id) => write!(f, "{} is not alive in this scene", id),
            KineticError::HierarchyCycle { parent, child } => write!(
                f,
                "cannot attach {} under {}: it would become its own ancestor",
                child, parent
            ),
        }
    }
}

impl std::error::Error for KineticError {}
