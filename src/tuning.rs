//! Data-driven game balance
//!
//! Every gameplay constant lives here so a run can be re-tuned from a JSON
//! file without recompiling. Missing keys fall back to the defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Errors raised while loading a tuning file
#[derive(Debug)]
pub enum TuningError {
    /// The JSON could not be parsed
    Parse(serde_json::Error),
    /// The values parsed but describe an unplayable configuration
    Invalid(String),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "failed to parse tuning: {}", e),
            TuningError::Invalid(msg) => write!(f, "invalid tuning: {}", msg),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    /// Distance moved per tick for each held direction
    pub player_speed: f32,
    /// Degrees turned per tick while a rotate input is held
    pub player_rotation_deg: f32,
    pub player_lives: u32,
    /// Minimum milliseconds of held fire between shots
    pub fire_delay_ms: f32,

    // === Projectile ===
    pub projectile_width: f32,
    pub projectile_height: f32,
    pub projectile_speed: f32,

    // === Enemy ===
    pub enemy_width: f32,
    pub enemy_height: f32,
    /// Speed is drawn as an integer from `[min, max)`
    pub enemy_speed_min: u32,
    pub enemy_speed_max: u32,
    /// Number of cosmetic sprite variants
    pub enemy_variants: u32,

    // === Spawning ===
    pub spawn_frequency_ms: f32,
    pub max_enemies: usize,
    /// Distance from the field edge at which enemies appear
    pub spawn_margin: f32,

    // === Explosion ===
    /// Ticks shown per animation frame (advance once the counter exceeds this)
    pub explosion_ticks_per_frame: u32,
    pub explosion_max_frame: u32,

    // === Menu ===
    pub menu_input_delay_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: 640.0,
            field_height: 480.0,

            player_width: 32.0,
            player_height: 32.0,
            player_speed: 5.0,
            player_rotation_deg: 6.0,
            player_lives: 3,
            fire_delay_ms: 250.0,

            projectile_width: 6.0,
            projectile_height: 24.0,
            projectile_speed: 10.0,

            enemy_width: 25.0,
            enemy_height: 25.0,
            enemy_speed_min: 1,
            enemy_speed_max: 5,
            enemy_variants: 35,

            spawn_frequency_ms: 1000.0,
            max_enemies: 5,
            spawn_margin: 25.0,

            explosion_ticks_per_frame: 12,
            explosion_max_frame: 3,

            menu_input_delay_ms: 250.0,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!(
            "Loaded tuning: field {}x{}, {} lives, max {} enemies",
            tuning.field_width,
            tuning.field_height,
            tuning.player_lives,
            tuning.max_enemies
        );
        Ok(tuning)
    }

    /// Serialize to pretty JSON (for writing a starter tuning file)
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the values describe a playable field
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |msg: &str| Err(TuningError::Invalid(msg.to_string()));

        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return invalid("field dimensions must be positive");
        }
        if self.spawn_margin * 2.0 >= self.field_width
            || self.spawn_margin * 2.0 >= self.field_height
        {
            return invalid("field too small for the spawn margin");
        }
        if self.player_width > self.field_width || self.player_height > self.field_height {
            return invalid("player does not fit in the field");
        }
        if self.enemy_speed_min >= self.enemy_speed_max {
            return invalid("enemy speed range is empty");
        }
        if self.enemy_variants == 0 {
            return invalid("at least one enemy variant is required");
        }
        if self.max_enemies == 0 {
            return invalid("enemy cap must be at least 1");
        }
        if self.player_lives == 0 {
            return invalid("player needs at least one life");
        }
        if self.spawn_frequency_ms < 0.0 || self.fire_delay_ms < 0.0 || self.menu_input_delay_ms < 0.0
        {
            return invalid("delays must not be negative");
        }
        Ok(())
    }

    /// Player rotation per tick in radians
    pub fn player_rotation_rad(&self) -> f32 {
        self.player_rotation_deg.to_radians()
    }
}
