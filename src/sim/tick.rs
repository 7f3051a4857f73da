//! Per-frame simulation tick
//!
//! One call per display refresh. Movement is per tick (not scaled by dt);
//! dt only feeds the millisecond accumulators (fire cooldown, spawn timer,
//! menu debounce).

use super::collision::{Collider, overlaps};
use super::entities::ProjectileStep;
use super::state::{GameEvent, GamePhase, GameState};
use crate::platform::{Action, InputQuery};

/// Advance the game by one frame
pub fn tick<I: InputQuery>(state: &mut GameState, input: &mut I, dt: f32) {
    // Pause toggles on the press, not while the key is held
    let pause_down = input.is_pressed(Action::Pause);
    let pause_edge = pause_down && !state.pause_held;
    state.pause_held = pause_down;

    if pause_edge {
        match state.phase {
            GamePhase::Playing | GamePhase::PlayerKilled => {
                state.pause();
                return;
            }
            GamePhase::Paused => {
                state.resume();
                return;
            }
            _ => {}
        }
    }

    state.time_ticks += 1;

    match state.phase {
        GamePhase::Menu | GamePhase::Paused => update_menu(state, input, dt),
        GamePhase::GameOver => {
            // Let the final blast finish under the overlay
            update_explosions(state);
            update_menu(state, input, dt);
        }
        GamePhase::Playing | GamePhase::PlayerKilled => update_field(state, input, dt),
    }
}

fn update_menu<I: InputQuery>(state: &mut GameState, input: &mut I, dt: f32) {
    if let Some(action) = state.menu.update(&*input, dt) {
        log::debug!("Menu action {:?}", action);
        state.apply_menu_action(action, input);
    }
}

fn update_field<I: InputQuery>(state: &mut GameState, input: &mut I, dt: f32) {
    let killed = state.phase == GamePhase::PlayerKilled;

    if !killed {
        // Order matters: enemies test against projectiles already moved this tick
        update_player(state, &*input, dt);
        update_projectiles(state);
        update_enemies(state);
        if state.phase == GamePhase::Playing && state.spawner.poll(state.enemies.len(), dt) {
            state.spawn_enemy();
        }
    }

    if state.phase == GamePhase::PlayerKilled && state.explosions.is_empty() {
        state.respawn();
        log::info!("Player respawned");
        state.emit(GameEvent::PlayerRespawned);
    }

    update_explosions(state);
}

fn update_player<I: InputQuery>(state: &mut GameState, input: &I, dt: f32) {
    let Some(player) = state.player.as_mut() else {
        return;
    };
    if let Some(shot) = player.update(input, dt, &state.field, &state.tuning) {
        state.add_projectile(shot);
    }

    let hit = match &state.player {
        Some(player) => state.enemies.iter().any(|e| player.collides_with(e)),
        None => false,
    };
    if hit {
        state.player_hit();
    }
}

fn update_projectiles(state: &mut GameState) {
    let mut i = 0;
    while i < state.projectiles.len() {
        match state.projectiles[i].update(&state.field) {
            ProjectileStep::Moved => i += 1,
            ProjectileStep::Exited => state.remove_projectile(i),
        }
    }
}

fn update_enemies(state: &mut GameState) {
    let mut i = 0;
    while i < state.enemies.len() {
        state.enemies[i].update(&state.field);

        // First overlapping projectile in iteration order wins
        let enemy_box = state.enemies[i].hitbox();
        let hit = state
            .projectiles
            .iter()
            .position(|p| overlaps(&enemy_box, &p.hitbox()));

        match hit {
            Some(j) => state.enemy_killed(i, j),
            None => i += 1,
        }
    }
}

fn update_explosions(state: &mut GameState) {
    let mut i = 0;
    while i < state.explosions.len() {
        if state.explosions[i].update() {
            state.remove_explosion(i);
        } else {
            i += 1;
        }
    }
}
