//! Rendering module
//!
//! Drawing goes through two seams so the game never touches a concrete
//! backend: `DrawSurface` (a 2D canvas-style context) and `ImageLookup`
//! (loaded sprite sheets by name).

pub mod recording;
pub mod sprites;

pub use recording::{DrawCommand, ImageAtlas, RecordingSurface};
pub use sprites::{draw_sprite, source_region};

use glam::Vec2;

/// Axis-aligned rectangle in surface or sheet pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of `size` centered on the origin
    pub fn centered(size: Vec2) -> Self {
        Self::new(-size.x * 0.5, -size.y * 0.5, size.x, size.y)
    }
}

/// A loaded image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

/// Resolves sprite sheets by name. `None` means not loaded (yet).
pub trait ImageLookup {
    fn image(&self, name: &str) -> Option<ImageHandle>;
}

/// Canvas-style immediate-mode drawing context
pub trait DrawSurface {
    fn clear_rect(&mut self, rect: Rect);
    /// Blit `src` of `image` into `dst`
    fn draw_image_region(&mut self, image: &ImageHandle, src: Rect, dst: Rect);
    fn fill_rect(&mut self, rect: Rect);
    /// Text is positioned at its left baseline
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
    fn measure_text(&self, text: &str) -> f32;
    fn set_fill_style(&mut self, style: &str);
    fn set_font(&mut self, font: &str);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    /// Radians, clockwise on screen
    fn rotate(&mut self, angle: f32);
}
