//! HUD and menu overlay
//!
//! Read-only consumers of `FrameSnapshot`.

use glam::Vec2;

use crate::consts::*;
use crate::renderer::{DrawSurface, ImageLookup, Rect, draw_sprite};
use crate::sim::{FrameSnapshot, MenuSnapshot};

/// Current score, top-left
#[derive(Debug, Clone, Copy)]
pub struct ScorePanel {
    /// Text baseline origin
    pub anchor: Vec2,
}

impl Default for ScorePanel {
    fn default() -> Self {
        Self {
            anchor: Vec2::new(8.0, 24.0),
        }
    }
}

impl ScorePanel {
    pub fn render(&self, surface: &mut impl DrawSurface, score: u64) {
        surface.save();
        surface.set_fill_style(HUD_COLOR);
        surface.set_font(SCORE_FONT);
        surface.fill_text(&score.to_string(), self.anchor.x, self.anchor.y);
        surface.restore();
    }
}

/// One ship icon per remaining life, laid out leftward from the
/// bottom-right anchor
#[derive(Debug, Clone, Copy)]
pub struct LivesPanel {
    pub anchor: Vec2,
}

impl LivesPanel {
    pub fn new(field_width: f32, field_height: f32) -> Self {
        Self {
            anchor: Vec2::new(field_width - 10.0, field_height - 10.0),
        }
    }

    /// Destination rectangle of the `index`th icon from the right
    pub fn icon_rect(&self, index: u32) -> Rect {
        let i = index as f32;
        Rect::new(
            self.anchor.x - LIFE_ICON_SIZE * (i + 1.0) - LIFE_ICON_MARGIN * i,
            self.anchor.y - LIFE_ICON_SIZE,
            LIFE_ICON_SIZE,
            LIFE_ICON_SIZE,
        )
    }

    pub fn render(&self, surface: &mut impl DrawSurface, images: &impl ImageLookup, lives: u32) {
        let Some(icons) = images.image(ICONS_SHEET) else {
            return;
        };
        let src = Rect::new(0.0, 0.0, SPRITE_CELL, SPRITE_CELL);
        surface.save();
        for i in 0..lives {
            surface.draw_image_region(&icons, src, self.icon_rect(i));
        }
        surface.restore();
    }
}

/// Dim the field and list the menu entries centered, underlining the
/// active one
pub fn render_menu(surface: &mut impl DrawSurface, menu: &MenuSnapshot, width: f32, height: f32) {
    const OVERHANG: f32 = 4.0;
    const PADDING: f32 = 3.0;

    surface.save();
    surface.set_fill_style(OVERLAY_COLOR);
    surface.fill_rect(Rect::new(0.0, 0.0, width, height));

    surface.set_fill_style(HUD_COLOR);
    surface.set_font(&format!("{}px SyntheticText", MENU_ITEM_HEIGHT));

    for (index, label) in menu.labels.iter().enumerate() {
        let text_width = surface.measure_text(label);
        let x = width * 0.5 - text_width * 0.5;
        let y = height * 0.5 - MENU_ITEM_HEIGHT * 0.5
            + (MENU_ITEM_HEIGHT + MENU_ITEM_GAP) * index as f32;
        surface.fill_text(label, x, y);

        if index == menu.active {
            surface.fill_rect(Rect::new(
                x - OVERHANG,
                y + PADDING,
                text_width + OVERHANG * 2.0,
                1.0,
            ));
        }
    }
    surface.restore();
}

/// Draw a whole frame: clear, sprites, HUD, then the overlay when a menu is up
pub fn render_frame(surface: &mut impl DrawSurface, images: &impl ImageLookup, frame: &FrameSnapshot) {
    surface.clear_rect(Rect::new(0.0, 0.0, frame.width, frame.height));

    for sprite in frame.sprites() {
        draw_sprite(surface, images, sprite);
    }

    if frame.in_game {
        LivesPanel::new(frame.width, frame.height).render(surface, images, frame.lives);
        ScorePanel::default().render(surface, frame.score);
    }

    if let Some(menu) = &frame.menu {
        render_menu(surface, menu, frame.width, frame.height);
    }
}
