//! In-memory backend
//!
//! `RecordingSurface` logs every draw call instead of producing pixels; the
//! headless driver and the tests draw into it.

use std::collections::HashMap;

use serde::Serialize;

use super::{DrawSurface, ImageHandle, ImageLookup, Rect};
use crate::consts::{ENEMY_SHEET, ICONS_SHEET, PLAYER_SHEET};

/// One recorded call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear { x: f32, y: f32, w: f32, h: f32 },
    DrawImage { sheet: String, src: [f32; 4], dst: [f32; 4] },
    FillRect { x: f32, y: f32, w: f32, h: f32, style: String },
    FillText { text: String, x: f32, y: f32, style: String, font: String },
    Save,
    Restore,
    Translate(f32, f32),
    Rotate(f32),
}

#[derive(Debug, Clone)]
struct PaintState {
    fill_style: String,
    font: String,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            fill_style: "#000".to_string(),
            font: "10px sans-serif".to_string(),
        }
    }
}

/// Draw surface that records commands
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    /// Advance per character used by `measure_text`, as a fraction of the
    /// font's pixel size
    pub glyph_aspect: f32,
    paint: PaintState,
    stack: Vec<PaintState>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            glyph_aspect: 0.5,
            paint: PaintState::default(),
            stack: Vec::new(),
        }
    }

    /// Drop the recorded commands (start of a new frame)
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn image_draws(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::DrawImage { .. }))
            .count()
    }

    /// Text of every `fill_text` call, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Current save/restore nesting depth
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn font_px(&self) -> f32 {
        self.paint
            .font
            .split_whitespace()
            .find_map(|part| part.strip_suffix("px")?.parse::<f32>().ok())
            .unwrap_or(10.0)
    }
}

impl DrawSurface for RecordingSurface {
    fn clear_rect(&mut self, r: Rect) {
        self.commands.push(DrawCommand::Clear {
            x: r.x,
            y: r.y,
            w: r.w,
            h: r.h,
        });
    }

    fn draw_image_region(&mut self, image: &ImageHandle, src: Rect, dst: Rect) {
        self.commands.push(DrawCommand::DrawImage {
            sheet: image.name.clone(),
            src: [src.x, src.y, src.w, src.h],
            dst: [dst.x, dst.y, dst.w, dst.h],
        });
    }

    fn fill_rect(&mut self, r: Rect) {
        self.commands.push(DrawCommand::FillRect {
            x: r.x,
            y: r.y,
            w: r.w,
            h: r.h,
            style: self.paint.fill_style.clone(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            style: self.paint.fill_style.clone(),
            font: self.paint.font.clone(),
        });
    }

    fn measure_text(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.font_px() * self.glyph_aspect
    }

    fn set_fill_style(&mut self, style: &str) {
        self.paint.fill_style = style.to_string();
    }

    fn set_font(&mut self, font: &str) {
        self.paint.font = font.to_string();
    }

    fn save(&mut self) {
        self.stack.push(self.paint.clone());
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        // Unbalanced restore is ignored, like a canvas
        if let Some(paint) = self.stack.pop() {
            self.paint = paint;
        }
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::Translate(x, y));
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCommand::Rotate(angle));
    }
}

/// Name-keyed image registry
#[derive(Debug, Clone, Default)]
pub struct ImageAtlas {
    images: HashMap<String, ImageHandle>,
}

impl ImageAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atlas with the three game sheets registered
    pub fn with_default_sheets() -> Self {
        let mut atlas = Self::new();
        atlas.insert(PLAYER_SHEET, 8, 24);
        atlas.insert(ENEMY_SHEET, 48, 48);
        atlas.insert(ICONS_SHEET, 32, 24);
        atlas
    }

    pub fn insert(&mut self, name: &str, width: u32, height: u32) {
        self.images.insert(
            name.to_string(),
            ImageHandle {
                name: name.to_string(),
                width,
                height,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageLookup for ImageAtlas {
    fn image(&self, name: &str) -> Option<ImageHandle> {
        self.images.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_restore_paint_state() {
        let mut surface = RecordingSurface::new();
        surface.set_fill_style("red");
        surface.save();
        surface.set_fill_style("blue");
        surface.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        surface.restore();
        surface.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0));

        let styles: Vec<_> = surface
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { style, .. } => Some(style.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(styles, vec!["blue", "red"]);
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn test_unbalanced_restore_is_ignored() {
        let mut surface = RecordingSurface::new();
        surface.set_font("24px SyntheticText");
        surface.restore();
        assert_eq!(surface.measure_text("ab"), 24.0);
    }

    #[test]
    fn test_measure_text_uses_font_size() {
        let mut surface = RecordingSurface::new();
        surface.set_font("32px SyntheticText");
        assert_eq!(surface.measure_text("START"), 80.0);
        surface.set_font("bold");
        assert_eq!(surface.measure_text("ab"), 10.0);
    }

    #[test]
    fn test_atlas_lookup() {
        let atlas = ImageAtlas::with_default_sheets();
        assert_eq!(atlas.len(), 3);
        assert_eq!(atlas.image(ICONS_SHEET).map(|i| i.width), Some(32));
        assert!(atlas.image("missing").is_none());
        assert!(ImageAtlas::new().is_empty());
    }
}
