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
//! Drawing surface abstraction
//!
//! Game objects never draw pixels themselves; they issue canvas-style calls
//! against a [`RenderContext`] supplied by the host. The trait mirrors the
//! subset of a 2D canvas context the toolkit relies on: rectangles, paths,
//! text, affine transforms, scoped state and a global alpha.
//!
//! Transforms compose left-to-right, exactly like a canvas: every
//! `translate`/`rotate`/`scale` call multiplies the current matrix, and
//! `save`/`restore` push and pop the whole state.
//!
//! [`RecordingContext`] is an in-memory implementation that records every
//! call, useful for headless runs and for asserting render order in tests.

use std::cell::RefCell;
use std::rc::Rc;

mod recording;

pub use recording::{DrawCommand, RecordingContext};

/// Measured extent of a run of text
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    /// Advance width of the text in surface units
    pub width: f64,
}

/// Canvas-style 2D drawing surface
pub trait RenderContext {
    /// Fill a rectangle with the current fill style
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Clear a rectangle to transparent
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Outline a rectangle with the current stroke style
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Start a new path
    fn begin_path(&mut self);

    /// Move the pen without drawing
    fn move_to(&mut self, x: f64, y: f64);

    /// Add a straight segment to the current path
    fn line_to(&mut self, x: f64, y: f64);

    /// Close the current sub-path
    fn close_path(&mut self);

    /// Stroke the current path
    fn stroke(&mut self);

    /// Fill the current path
    fn fill(&mut self);

    /// Add a circular arc to the current path
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    );

    /// Add an arc connecting two tangents to the current path
    fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64);

    /// Fill text at the given position
    fn fill_text(&mut self, text: &str, x: f64, y: f64, max_width: Option<f64>);

    /// Stroke text at the given position
    fn stroke_text(&mut self, text: &str, x: f64, y: f64, max_width: Option<f64>);

    /// Measure text with the current font
    fn measure_text(&mut self, text: &str) -> TextMetrics;

    /// Scale the current transform
    fn scale(&mut self, x: f64, y: f64);

    /// Rotate the current transform by `angle` radians
    fn rotate(&mut self, angle: f64);

    /// Translate the current transform
    fn translate(&mut self, x: f64, y: f64);

    /// Multiply the current transform by the matrix `[a c e; b d f; 0 0 1]`
    fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64);

    /// Push the current drawing state
    fn save(&mut self);

    /// Pop the most recently saved drawing state
    fn restore(&mut self);

    /// Get the global alpha applied to all drawing
    fn global_alpha(&self) -> f64;

    /// Set the global alpha applied to all drawing
    fn set_global_alpha(&mut self, alpha: f64);
}

/// Shared handle to a drawing surface
///
/// Several game objects usually draw to the same surface, so the handle is
/// reference counted. The object model is single-threaded.
pub type SharedContext = Rc<RefCell<dyn RenderContext>>;

/// Wrap a drawing surface in a [`SharedContext`]
///
/// # Examples
///
/// ```
/// use kinetic2d::render::{shared, RecordingContext};
///
/// let context = shared(RecordingContext::new());
/// context.borrow_mut().fill_rect(0.0, 0.0, 10.0, 10.0);
/// ```
pub fn shared<C: RenderContext + 'static>(context: C) -> SharedContext {
    Rc::new(RefCell::new(context))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_context_is_usable_through_trait_object() {
        let context = shared(RecordingContext::new());
        context.borrow_mut().set_global_alpha(0.5);
        assert_eq!(context.borrow().global_alpha(), 0.5);
    }
}
