//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Movement is per tick; dt only drives millisecond timers
//! - Seeded RNG only
//! - Stable iteration order (collection index)
//! - No rendering or platform dependencies beyond `InputQuery`

pub mod collision;
pub mod entities;
pub mod menu;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Collider, Field, Hitbox, hitbox, overlaps};
pub use entities::{Enemy, Explosion, Player, Projectile, ProjectileStep};
pub use menu::{Menu, MenuAction, MenuItem};
pub use snapshot::{FrameSnapshot, MenuSnapshot, SpriteKind, SpriteSnapshot};
pub use spawn::{Edge, SpawnPoint, SpawnScheduler, calculate_spawn_point};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::tick;
