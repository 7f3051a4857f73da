//! Simulation entities
//!
//! Each entity owns its kinematic state and advances itself against the
//! field. Cross-entity effects (spawning a projectile, leaving the field,
//! finishing an animation) are reported back to the caller instead of being
//! applied here; `GameState` owns the collections and applies them.

use glam::Vec2;

use super::collision::{Collider, Field, Hitbox, hitbox};
use crate::platform::{Action, InputQuery};
use crate::tuning::Tuning;
use crate::{heading_vector, strafe_vector};

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Radians; 0 faces up the screen
    pub heading: f32,
    pub speed: f32,
    /// Radians turned per tick while rotating
    pub rotation_speed: f32,
    pub lives: u32,
    pub score: u64,
    /// Milliseconds of held fire since the last shot
    pub fire_cooldown: f32,
    pub fire_delay: f32,
    /// Sprite row in the player sheet
    pub variant: u32,
}

impl Player {
    /// New ship with a full set of lives. Position is set by `respawn`.
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::new(tuning.player_width, tuning.player_height),
            heading: 0.0,
            speed: tuning.player_speed,
            rotation_speed: tuning.player_rotation_rad(),
            lives: tuning.player_lives,
            score: 0,
            fire_cooldown: f32::INFINITY,
            fire_delay: tuning.fire_delay_ms,
            variant: 0,
        }
    }

    /// Put the ship back at the field center facing up. Lives, score and the
    /// fire cooldown carry over.
    pub fn respawn(&mut self, field: &Field) {
        self.pos = field.center();
        self.heading = 0.0;
    }

    /// Apply one tick of input. Returns a projectile when a shot is fired.
    ///
    /// Held directions add up without normalization, so moving forward while
    /// strafing covers more ground than either alone.
    pub fn update(
        &mut self,
        input: &impl InputQuery,
        dt: f32,
        field: &Field,
        tuning: &Tuning,
    ) -> Option<Projectile> {
        let mut rotation = 0.0;
        if input.is_pressed(Action::RotateLeft) {
            rotation = -1.0;
        }
        if input.is_pressed(Action::RotateRight) {
            rotation = 1.0;
        }
        self.heading += self.rotation_speed * rotation;

        let forward = heading_vector(self.heading) * self.speed;
        let strafe = strafe_vector(self.heading) * self.speed;
        let mut step = Vec2::ZERO;
        if input.is_pressed(Action::Right) {
            step += strafe;
        }
        if input.is_pressed(Action::Left) {
            step -= strafe;
        }
        if input.is_pressed(Action::Up) {
            step += forward;
        }
        if input.is_pressed(Action::Down) {
            step -= forward;
        }
        self.pos = field.clamp(self.pos + step, self.size);

        if !input.is_pressed(Action::Fire) {
            return None;
        }
        if self.fire_cooldown < self.fire_delay {
            self.fire_cooldown += dt;
            return None;
        }
        self.fire_cooldown = 0.0;
        Some(Projectile::new(self.pos, self.heading, tuning))
    }
}

impl Collider for Player {
    fn hitbox(&self) -> Hitbox {
        hitbox(self.pos, self.size)
    }
}

/// A drifting enemy that bounces off the field walls
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    /// Radians
    pub heading: f32,
    pub speed: f32,
    /// Cosmetic sprite index
    pub variant: u32,
}

impl Enemy {
    pub fn new(pos: Vec2, size: Vec2, heading_deg: f32, speed: f32, variant: u32) -> Self {
        Self {
            pos,
            size,
            heading: heading_deg.to_radians(),
            speed,
            variant,
        }
    }

    /// Move one tick, bouncing instead of leaving the field.
    ///
    /// The axes are resolved in turn: X first, then Y using the heading as
    /// possibly mirrored by X. A blocked axis keeps its coordinate. Horizontal
    /// bounces negate the heading, vertical bounces reflect it around ±π.
    pub fn update(&mut self, field: &Field) {
        let dx = self.speed * self.heading.sin();
        let new_x = self.pos.x + dx;
        if field.fits_x(new_x, self.size.x) {
            self.pos.x = new_x;
        } else {
            self.heading = -self.heading;
        }

        let dy = self.speed * -self.heading.cos();
        let new_y = self.pos.y + dy;
        if field.fits_y(new_y, self.size.y) {
            self.pos.y = new_y;
        } else {
            let pivot = if self.heading >= 0.0 {
                std::f32::consts::PI
            } else {
                -std::f32::consts::PI
            };
            self.heading = pivot - self.heading;
        }
    }
}

impl Collider for Enemy {
    fn hitbox(&self) -> Hitbox {
        hitbox(self.pos, self.size)
    }
}

/// Outcome of advancing a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileStep {
    Moved,
    /// The next position would leave the field; remove it now
    Exited,
}

/// A straight-flying shot
#[derive(Debug, Clone)]
pub struct Projectile {
    pub pos: Vec2,
    pub size: Vec2,
    /// Radians, fixed at fire time
    pub heading: f32,
    pub speed: f32,
}

impl Projectile {
    pub fn new(pos: Vec2, heading: f32, tuning: &Tuning) -> Self {
        Self {
            pos,
            size: Vec2::new(tuning.projectile_width, tuning.projectile_height),
            heading,
            speed: tuning.projectile_speed,
        }
    }

    /// Fly one tick. Never clamps or bounces: a shot whose next position is
    /// outside the field on either axis does not move and reports `Exited`.
    pub fn update(&mut self, field: &Field) -> ProjectileStep {
        let next = self.pos + heading_vector(self.heading) * self.speed;
        if !field.fits_x(next.x, self.size.x) || !field.fits_y(next.y, self.size.y) {
            return ProjectileStep::Exited;
        }
        self.pos = next;
        ProjectileStep::Moved
    }
}

impl Collider for Projectile {
    fn hitbox(&self) -> Hitbox {
        hitbox(self.pos, self.size)
    }
}

/// Time-boxed blast animation
#[derive(Debug, Clone)]
pub struct Explosion {
    pub pos: Vec2,
    pub size: Vec2,
    /// Ticks spent on the current frame
    pub ticks: u32,
    pub frame: u32,
    pub ticks_per_frame: u32,
    pub max_frame: u32,
}

impl Explosion {
    pub fn new(pos: Vec2, size: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            size,
            ticks: 0,
            frame: 0,
            ticks_per_frame: tuning.explosion_ticks_per_frame,
            max_frame: tuning.explosion_max_frame,
        }
    }

    /// Advance the animation; returns true once it has played out
    pub fn update(&mut self) -> bool {
        self.ticks += 1;
        if self.ticks > self.ticks_per_frame {
            self.frame += 1;
            self.ticks = 0;
        }
        self.frame > self.max_frame
    }

    /// Total ticks from creation until `update` reports finished
    #[cfg(test)]
    pub fn lifetime_ticks(&self) -> u32 {
        (self.ticks_per_frame + 1) * (self.max_frame + 1)
    }
}
