//! Read-only render snapshots
//!
//! Captured once per frame after `tick`. The renderer and UI only ever see
//! these, never `GameState`.

use glam::Vec2;
use serde::Serialize;

use super::state::{GamePhase, GameState};

/// Which sheet/region a sprite comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpriteKind {
    Player,
    Enemy,
    Projectile,
    Explosion,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpriteSnapshot {
    pub kind: SpriteKind,
    pub pos: Vec2,
    /// Radians
    pub heading: f32,
    pub size: Vec2,
    /// Sheet variant; the animation frame for explosions
    pub variant: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuSnapshot {
    pub labels: Vec<String>,
    pub active: usize,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub tick: u64,
    pub width: f32,
    pub height: f32,
    /// A game has been started; the HUD is drawn
    pub in_game: bool,
    pub score: u64,
    pub lives: u32,
    /// Hidden while the player is down
    pub player: Option<SpriteSnapshot>,
    pub enemies: Vec<SpriteSnapshot>,
    pub projectiles: Vec<SpriteSnapshot>,
    pub explosions: Vec<SpriteSnapshot>,
    /// Present while the menu overlay is up
    pub menu: Option<MenuSnapshot>,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let down = state.player_down();

        let player = match &state.player {
            Some(p) if !down => Some(SpriteSnapshot {
                kind: SpriteKind::Player,
                pos: p.pos,
                heading: p.heading,
                size: p.size,
                variant: p.variant,
            }),
            _ => None,
        };

        // Live actors are only drawn while the player is alive
        let (enemies, projectiles) = if down {
            (Vec::new(), Vec::new())
        } else {
            (
                state
                    .enemies
                    .iter()
                    .map(|e| SpriteSnapshot {
                        kind: SpriteKind::Enemy,
                        pos: e.pos,
                        heading: e.heading,
                        size: e.size,
                        variant: e.variant,
                    })
                    .collect(),
                state
                    .projectiles
                    .iter()
                    .map(|p| SpriteSnapshot {
                        kind: SpriteKind::Projectile,
                        pos: p.pos,
                        heading: p.heading,
                        size: p.size,
                        variant: 0,
                    })
                    .collect(),
            )
        };

        let explosions = state
            .explosions
            .iter()
            .map(|x| SpriteSnapshot {
                kind: SpriteKind::Explosion,
                pos: x.pos,
                heading: 0.0,
                size: x.size,
                variant: x.frame,
            })
            .collect();

        let menu = state.menu_open().then(|| MenuSnapshot {
            labels: state.menu.labels(),
            active: state.menu.active_index(),
        });

        Self {
            phase: state.phase,
            tick: state.time_ticks,
            width: state.field.width,
            height: state.field.height,
            in_game: state.player.is_some(),
            score: state.score(),
            lives: state.lives(),
            player,
            enemies,
            projectiles,
            explosions,
            menu,
        }
    }

    /// Every sprite in draw order
    pub fn sprites(&self) -> impl Iterator<Item = &SpriteSnapshot> {
        self.player
            .iter()
            .chain(&self.projectiles)
            .chain(&self.enemies)
            .chain(&self.explosions)
    }
}
