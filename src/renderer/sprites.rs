//! Sprite sheet regions and entity drawing

use super::{DrawSurface, ImageLookup, Rect};
use crate::consts::*;
use crate::sim::{SpriteKind, SpriteSnapshot};

/// Sheet name and source rectangle for a sprite
pub fn source_region(kind: SpriteKind, variant: u32) -> (&'static str, Rect) {
    match kind {
        SpriteKind::Player => (
            PLAYER_SHEET,
            Rect::new(0.0, variant as f32 * SPRITE_CELL, SPRITE_CELL, SPRITE_CELL),
        ),
        SpriteKind::Enemy => {
            // Variants run down columns of ENEMY_SHEET_ROWS
            let col = variant / ENEMY_SHEET_ROWS;
            let row = variant % ENEMY_SHEET_ROWS;
            (
                ENEMY_SHEET,
                Rect::new(
                    col as f32 * SPRITE_CELL,
                    row as f32 * SPRITE_CELL,
                    SPRITE_CELL,
                    SPRITE_CELL,
                ),
            )
        }
        SpriteKind::Explosion => (
            ICONS_SHEET,
            Rect::new(
                variant as f32 * SPRITE_CELL,
                EXPLOSION_ROW_Y,
                SPRITE_CELL,
                SPRITE_CELL,
            ),
        ),
        SpriteKind::Projectile => (
            ICONS_SHEET,
            Rect::new(0.0, PROJECTILE_ROW_Y, PROJECTILE_CELL, PROJECTILE_CELL),
        ),
    }
}

/// Draw one sprite centered on its position, rotated by its heading.
/// Skipped when its sheet isn't loaded.
pub fn draw_sprite(surface: &mut impl DrawSurface, images: &impl ImageLookup, sprite: &SpriteSnapshot) {
    let (sheet, src) = source_region(sprite.kind, sprite.variant);
    let Some(image) = images.image(sheet) else {
        log::debug!("Sheet {} not loaded, skipping {:?}", sheet, sprite.kind);
        return;
    };

    surface.save();
    surface.translate(sprite.pos.x, sprite.pos.y);
    // Explosions are never rotated
    if sprite.kind != SpriteKind::Explosion {
        surface.rotate(sprite.heading);
    }
    surface.draw_image_region(&image, src, Rect::centered(sprite.size));
    surface.restore();
}
