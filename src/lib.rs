//! Star Sweep - a bounded-field arcade shooter
//!
//! Core modules:
//! - `sim`: Simulation core (entities, collisions, spawning, game phases)
//! - `platform`: Input query and frame clock seams
//! - `renderer`: Draw-surface abstraction and sprite drawing
//! - `ui`: HUD panels and menu overlay
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Fixed presentation constants (sprite sheets, HUD layout)
pub mod consts {
    /// Source cell size of every sprite sheet, in pixels
    pub const SPRITE_CELL: f32 = 8.0;
    /// Enemy sheet is laid out in columns of this many variants
    pub const ENEMY_SHEET_ROWS: u32 = 6;
    /// Projectile sprite source size
    pub const PROJECTILE_CELL: f32 = 3.0;
    /// Row of the explosion strip in the icons sheet
    pub const EXPLOSION_ROW_Y: f32 = 8.0;
    /// Row of the projectile sprite in the icons sheet
    pub const PROJECTILE_ROW_Y: f32 = 16.0;

    /// Sprite sheet names resolved through `ImageLookup`
    pub const PLAYER_SHEET: &str = "player_ships";
    pub const ENEMY_SHEET: &str = "enemy_ships";
    pub const ICONS_SHEET: &str = "icons";

    /// HUD
    pub const HUD_COLOR: &str = "hsl(120, 100%, 40%)";
    pub const OVERLAY_COLOR: &str = "hsl(0 0% 40% / 50%)";
    pub const SCORE_FONT: &str = "24px SyntheticText";
    pub const MENU_ITEM_HEIGHT: f32 = 32.0;
    pub const MENU_ITEM_GAP: f32 = 16.0;
    pub const LIFE_ICON_SIZE: f32 = 16.0;
    pub const LIFE_ICON_MARGIN: f32 = 3.0;
}

/// Unit travel vector for a heading. Heading 0 points up the screen
/// (negative y), and positive headings turn clockwise.
#[inline]
pub fn heading_vector(heading: f32) -> Vec2 {
    Vec2::new(heading.sin(), -heading.cos())
}

/// Unit vector perpendicular to the heading, pointing to the ship's right
#[inline]
pub fn strafe_vector(heading: f32) -> Vec2 {
    Vec2::new(heading.cos(), heading.sin())
}
