//! Game state and orchestration helpers
//!
//! `GameState` owns every entity collection. Entities never mutate the
//! collections themselves; all adds and removals go through the methods here
//! so side effects (spawn timer reset, score, events) stay in one place.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Field;
use super::entities::{Enemy, Explosion, Player, Projectile};
use super::menu::{Menu, MenuAction, MenuItem};
use super::spawn::{SpawnScheduler, calculate_spawn_point};
use crate::platform::InputQuery;
use crate::tuning::Tuning;

/// Coarse game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title menu, no game yet
    Menu,
    /// Active gameplay
    Playing,
    /// Player lost a life; waiting for explosions to finish before respawn
    PlayerKilled,
    /// Simulation frozen under the pause menu
    Paused,
    /// Out of lives; NEW GAME menu shown
    GameOver,
}

/// Things that happened during a tick, drained by the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    GameStarted,
    EnemySpawned { pos: Vec2 },
    ProjectileFired { pos: Vec2 },
    EnemyDestroyed { pos: Vec2, score: u64 },
    PlayerHit { lives: u32 },
    PlayerRespawned,
    GameOver { score: u64 },
    Paused,
    Resumed,
    /// Every accepted menu activation, including ones the game handles itself
    MenuActivated(MenuAction),
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub field: Field,
    pub phase: GamePhase,
    /// Phase to return to when the pause menu closes
    pub paused_from: GamePhase,
    /// `None` until the first game starts
    pub player: Option<Player>,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub explosions: Vec<Explosion>,
    pub spawner: SpawnScheduler,
    pub menu: Menu<MenuAction>,
    /// Pause key state on the previous tick (edge detection)
    pub pause_held: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a state sitting on the title menu
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let field = Field::new(tuning.field_width, tuning.field_height);
        let mut menu = Menu::new(tuning.menu_input_delay_ms);
        menu.open(vec![
            MenuItem::new("START", MenuAction::Start),
            MenuItem::new("CREDITS", MenuAction::Credits),
        ]);

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            spawner: SpawnScheduler::new(tuning.spawn_frequency_ms, tuning.max_enemies),
            tuning,
            field,
            phase: GamePhase::Menu,
            paused_from: GamePhase::Playing,
            player: None,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            explosions: Vec::new(),
            menu,
            pause_held: false,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn score(&self) -> u64 {
        self.player.as_ref().map_or(0, |p| p.score)
    }

    pub fn lives(&self) -> u32 {
        self.player.as_ref().map_or(0, |p| p.lives)
    }

    /// Whether the field is showing the aftermath of a lost life
    pub fn player_down(&self) -> bool {
        match self.phase {
            GamePhase::PlayerKilled | GamePhase::GameOver => true,
            GamePhase::Paused => self.paused_from == GamePhase::PlayerKilled,
            _ => false,
        }
    }

    /// Whether the menu overlay is active
    pub fn menu_open(&self) -> bool {
        matches!(
            self.phase,
            GamePhase::Menu | GamePhase::Paused | GamePhase::GameOver
        )
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn add_projectile(&mut self, projectile: Projectile) {
        self.emit(GameEvent::ProjectileFired { pos: projectile.pos });
        self.projectiles.push(projectile);
    }

    pub fn remove_projectile(&mut self, index: usize) {
        if index < self.projectiles.len() {
            self.projectiles.remove(index);
        }
    }

    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.emit(GameEvent::EnemySpawned { pos: enemy.pos });
        self.enemies.push(enemy);
    }

    /// Remove an enemy; the spawn timer restarts so a replacement can follow
    pub fn remove_enemy(&mut self, index: usize) {
        if index < self.enemies.len() {
            self.enemies.remove(index);
            self.spawner.reset();
        }
    }

    pub fn spawn_explosion(&mut self, pos: Vec2, size: Vec2) {
        self.explosions.push(Explosion::new(pos, size, &self.tuning));
    }

    pub fn remove_explosion(&mut self, index: usize) {
        if index < self.explosions.len() {
            self.explosions.remove(index);
        }
    }

    /// Create an enemy at a random edge
    pub fn spawn_enemy(&mut self) {
        let t = &self.tuning;
        let point = calculate_spawn_point(&self.field, t.spawn_margin, &mut self.rng);
        let speed = self.rng.random_range(t.enemy_speed_min..t.enemy_speed_max) as f32;
        let variant = self.rng.random_range(0..t.enemy_variants);
        let enemy = Enemy::new(
            point.pos,
            Vec2::new(t.enemy_width, t.enemy_height),
            point.heading_deg,
            speed,
            variant,
        );
        log::debug!(
            "Enemy spawned from {:?} at ({:.0}, {:.0}) heading {}° speed {}",
            point.edge,
            point.pos.x,
            point.pos.y,
            point.heading_deg,
            speed
        );
        self.add_enemy(enemy);
    }

    /// A projectile hit an enemy: both go, an explosion replaces the enemy,
    /// the player scores a point
    pub fn enemy_killed(&mut self, enemy_index: usize, projectile_index: usize) {
        let Some(enemy) = self.enemies.get(enemy_index) else {
            return;
        };
        let (pos, size) = (enemy.pos, enemy.size);
        self.spawn_explosion(pos, size);
        self.remove_enemy(enemy_index);
        self.remove_projectile(projectile_index);

        let score = match self.player.as_mut() {
            Some(player) => {
                player.score += 1;
                player.score
            }
            None => 0,
        };
        self.emit(GameEvent::EnemyDestroyed { pos, score });
    }

    /// Blow up every live enemy and clear them from the field
    pub fn explode_enemies(&mut self) {
        let blasts: Vec<_> = self.enemies.iter().map(|e| (e.pos, e.size)).collect();
        for (pos, size) in blasts {
            self.spawn_explosion(pos, size);
        }
        self.enemies.clear();
        self.spawner.reset();
    }

    /// The player touched an enemy
    pub fn player_hit(&mut self) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        player.lives = player.lives.saturating_sub(1);
        let (pos, size, lives) = (player.pos, player.size, player.lives);

        self.spawn_explosion(pos, size);
        self.emit(GameEvent::PlayerHit { lives });

        if lives > 0 {
            self.kill_player();
        } else {
            self.end_game();
        }
    }

    /// Lose a life; respawn happens once the explosions finish
    pub fn kill_player(&mut self) {
        log::info!("Player killed, {} lives left", self.lives());
        self.explode_enemies();
        self.phase = GamePhase::PlayerKilled;
    }

    /// Out of lives
    pub fn end_game(&mut self) {
        let score = self.score();
        log::info!("Game over with score {}", score);
        self.explode_enemies();
        self.phase = GamePhase::GameOver;
        self.menu.open(vec![
            MenuItem::new("NEW GAME", MenuAction::NewGame),
            MenuItem::new("CREDITS", MenuAction::Credits),
        ]);
        self.emit(GameEvent::GameOver { score });
    }

    /// Fresh player with full lives, empty field, first enemy due immediately
    pub fn start_game(&mut self, input: &mut impl InputQuery) {
        input.reset();
        self.player = Some(Player::new(&self.tuning));
        self.respawn();
        self.spawner.arm();
        log::info!("Game started (seed {})", self.seed);
        self.emit(GameEvent::GameStarted);
    }

    /// Player back to the center, field cleared. Lives are untouched.
    pub fn respawn(&mut self) {
        if let Some(player) = self.player.as_mut() {
            player.respawn(&self.field);
        }
        self.projectiles.clear();
        self.enemies.clear();
        self.explosions.clear();
        self.phase = GamePhase::Playing;
    }

    pub fn pause(&mut self) {
        self.paused_from = self.phase;
        self.phase = GamePhase::Paused;
        self.menu.open(vec![
            MenuItem::new("RESUME", MenuAction::Resume),
            MenuItem::new("RESTART", MenuAction::Restart),
        ]);
        log::debug!("Paused from {:?}", self.paused_from);
        self.emit(GameEvent::Paused);
    }

    pub fn resume(&mut self) {
        if self.phase != GamePhase::Paused {
            return;
        }
        self.phase = self.paused_from;
        log::debug!("Resumed to {:?}", self.phase);
        self.emit(GameEvent::Resumed);
    }

    /// Apply a chosen menu entry. Credits is left to the caller.
    pub fn apply_menu_action(&mut self, action: MenuAction, input: &mut impl InputQuery) {
        self.emit(GameEvent::MenuActivated(action));
        match action {
            MenuAction::Start | MenuAction::Restart | MenuAction::NewGame => {
                self.start_game(input)
            }
            MenuAction::Resume => self.resume(),
            MenuAction::Credits => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Action, KeyboardState};

    fn playing_state() -> GameState {
        let mut state = GameState::new(1, Tuning::default());
        state.start_game(&mut KeyboardState::new());
        state.drain_events();
        state
    }

    fn enemy_at(pos: Vec2) -> Enemy {
        Enemy::new(pos, Vec2::splat(25.0), 0.0, 1.0, 0)
    }

    #[test]
    fn test_new_state_is_on_menu() {
        let state = GameState::new(1, Tuning::default());
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(state.player.is_none());
        assert_eq!(state.menu.labels(), vec!["START", "CREDITS"]);
        assert_eq!(state.score(), 0);
        assert_eq!(state.lives(), 0);
    }

    #[test]
    fn test_start_game_resets_input_and_centers_player() {
        let mut state = GameState::new(1, Tuning::default());
        let mut keys = KeyboardState::new();
        keys.press(Action::Fire);
        state.start_game(&mut keys);

        assert!(!keys.is_pressed(Action::Fire));
        assert_eq!(state.phase, GamePhase::Playing);
        let player = state.player.as_ref().unwrap();
        assert_eq!(player.pos, Vec2::new(320.0, 240.0));
        assert_eq!(player.lives, 3);
        assert!(state.spawner.timer.is_infinite());
        assert_eq!(state.drain_events(), vec![GameEvent::GameStarted]);
    }

    #[test]
    fn test_remove_enemy_resets_spawn_timer() {
        let mut state = playing_state();
        state.add_enemy(enemy_at(Vec2::new(100.0, 100.0)));
        state.spawner.timer = 700.0;
        state.remove_enemy(0);
        assert!(state.enemies.is_empty());
        assert_eq!(state.spawner.timer, 0.0);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut state = playing_state();
        state.spawner.timer = 700.0;
        state.remove_enemy(3);
        state.remove_projectile(3);
        state.remove_explosion(3);
        assert_eq!(state.spawner.timer, 700.0);
    }

    #[test]
    fn test_enemy_killed_scores_and_explodes() {
        let mut state = playing_state();
        state.add_enemy(enemy_at(Vec2::new(100.0, 100.0)));
        state.add_projectile(Projectile::new(Vec2::new(100.0, 100.0), 0.0, &state.tuning));
        state.drain_events();

        state.enemy_killed(0, 0);
        assert!(state.enemies.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.explosions.len(), 1);
        assert_eq!(state.explosions[0].pos, Vec2::new(100.0, 100.0));
        assert_eq!(state.score(), 1);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::EnemyDestroyed {
                pos: Vec2::new(100.0, 100.0),
                score: 1
            }]
        );
    }

    #[test]
    fn test_spawned_enemies_follow_tuning() {
        let mut state = playing_state();
        for _ in 0..200 {
            state.spawn_enemy();
        }
        for enemy in &state.enemies {
            assert!(enemy.speed >= 1.0 && enemy.speed < 5.0);
            assert_eq!(enemy.speed, enemy.speed.floor());
            assert!(enemy.variant < 35);
            assert_eq!(enemy.size, Vec2::splat(25.0));
        }
    }

    #[test]
    fn test_pause_and_resume_return_to_previous_phase() {
        let mut state = playing_state();
        state.phase = GamePhase::PlayerKilled;
        state.pause();
        assert_eq!(state.phase, GamePhase::Paused);
        assert_eq!(state.menu.labels(), vec!["RESUME", "RESTART"]);
        assert!(state.player_down());

        state.resume();
        assert_eq!(state.phase, GamePhase::PlayerKilled);
    }

    #[test]
    fn test_credits_is_only_reported() {
        let mut state = GameState::new(1, Tuning::default());
        state.apply_menu_action(MenuAction::Credits, &mut KeyboardState::new());
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::MenuActivated(MenuAction::Credits)]
        );
    }
}
