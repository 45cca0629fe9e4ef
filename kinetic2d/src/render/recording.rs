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
//! Recording drawing surface
//!
//! Stores every call as a [`DrawCommand`] instead of rasterizing. Tracks the
//! save/restore depth and the global alpha stack so callers can verify that
//! a render pass leaves the surface balanced.

use super::{RenderContext, TextMetrics};

/// One recorded call against a [`RecordingContext`]
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum DrawCommand {
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    StrokeRect { x: f64, y: f64, width: f64, height: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    ClosePath,
    Stroke,
    Fill,
    Arc {
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    },
    ArcTo { x1: f64, y1: f64, x2: f64, y2: f64, radius: f64 },
    FillText { text: String, x: f64, y: f64, max_width: Option<f64> },
    StrokeText { text: String, x: f64, y: f64, max_width: Option<f64> },
    MeasureText { text: String },
    Scale { x: f64, y: f64 },
    Rotate { angle: f64 },
    Translate { x: f64, y: f64 },
    Transform { a: f64, b: f64, c: f64, d: f64, e: f64, f: f64 },
    Save,
    Restore,
    SetGlobalAlpha { alpha: f64 },
}

/// Drawing surface that records calls instead of drawing
///
/// # Examples
///
/// ```
/// use kinetic2d::render::{DrawCommand, RecordingContext, RenderContext};
///
/// let mut context = RecordingContext::new();
/// context.save();
/// context.translate(10.0, 20.0);
/// context.restore();
///
/// assert_eq!(context.commands()[1], DrawCommand::Translate { x: 10.0, y: 20.0 });
/// assert_eq!(context.depth(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    alpha: f64,
    saved_alpha: Vec<f64>,
    glyph_width: f64,
}

impl RecordingContext {
    /// Width reported per character by `measure_text` unless overridden
    pub const DEFAULT_GLYPH_WIDTH: f64 = 8.0;

    /// Create an empty recording surface with full opacity
    pub fn new() -> Self {
        RecordingContext {
            commands: Vec::new(),
            alpha: 1.0,
            saved_alpha: Vec::new(),
            glyph_width: Self::DEFAULT_GLYPH_WIDTH,
        }
    }

    /// Use a fixed per-character advance for `measure_text`
    pub fn with_glyph_width(mut self, glyph_width: f64) -> Self {
        self.glyph_width = glyph_width;
        self
    }

    /// All commands recorded so far, oldest first
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Remove and return all recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of `save` calls not yet matched by a `restore`
    pub fn depth(&self) -> usize {
        self.saved_alpha.len()
    }

    /// Forget recorded commands and reset state
    pub fn clear(&mut self) {
        self.commands.clear();
        self.saved_alpha.clear();
        self.alpha = 1.0;
    }
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderContext for RecordingContext {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::FillRect { x, y, width, height });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::ClearRect { x, y, width, height });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::StrokeRect { x, y, width, height });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) {
        self.commands.push(DrawCommand::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        });
    }

    fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64) {
        self.commands.push(DrawCommand::ArcTo { x1, y1, x2, y2, radius });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, max_width: Option<f64>) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            max_width,
        });
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64, max_width: Option<f64>) {
        self.commands.push(DrawCommand::StrokeText {
            text: text.to_string(),
            x,
            y,
            max_width,
        });
    }

    fn measure_text(&mut self, text: &str) -> TextMetrics {
        self.commands.push(DrawCommand::MeasureText {
            text: text.to_string(),
        });
        TextMetrics {
            width: text.chars().count() as f64 * self.glyph_width,
        }
    }

    fn scale(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::Scale { x, y });
    }

    fn rotate(&mut self, angle: f64) {
        self.commands.push(DrawCommand::Rotate { angle });
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::Translate { x, y });
    }

    fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        self.commands.push(DrawCommand::Transform { a, b, c, d, e, f });
    }

    fn save(&mut self) {
        self.saved_alpha.push(self.alpha);
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        // Unbalanced restore is a no-op on a canvas; mirror that
        if let Some(alpha) = self.saved_alpha.pop() {
            self.alpha = alpha;
        }
        self.commands.push(DrawCommand::Restore);
    }

    fn global_alpha(&self) -> f64 {
        self.alpha
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
        self.commands.push(DrawCommand::SetGlobalAlpha { alpha });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut context = RecordingContext::new();
        context.begin_path();
        context.move_to(0.0, 0.0);
        context.line_to(10.0, 10.0);
        context.stroke();

        assert_eq!(
            context.commands(),
            &[
                DrawCommand::BeginPath,
                DrawCommand::MoveTo { x: 0.0, y: 0.0 },
                DrawCommand::LineTo { x: 10.0, y: 10.0 },
                DrawCommand::Stroke,
            ]
        );
    }

    #[test]
    fn test_restore_pops_alpha() {
        let mut context = RecordingContext::new();
        context.save();
        context.set_global_alpha(0.25);
        assert_eq!(context.global_alpha(), 0.25);
        assert_eq!(context.depth(), 1);

        context.restore();
        assert_eq!(context.global_alpha(), 1.0);
        assert_eq!(context.depth(), 0);
    }

    #[test]
    fn test_unbalanced_restore_is_harmless() {
        let mut context = RecordingContext::new();
        context.restore();
        assert_eq!(context.depth(), 0);
        assert_eq!(context.commands(), &[DrawCommand::Restore]);
    }

    #[test]
    fn test_measure_text_uses_glyph_width() {
        let mut context = RecordingContext::new().with_glyph_width(5.0);
        assert_eq!(context.measure_text("abcd").width, 20.0);
    }

    #[test]
    fn test_take_commands_drains() {
        let mut context = RecordingContext::new();
        context.fill();
        assert_eq!(context.take_commands(), vec![DrawCommand::Fill]);
        assert!(context.commands().is_empty());
    }
}
