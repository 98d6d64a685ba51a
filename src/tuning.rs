//! Data-driven game balance
//!
//! Every field defaults to the matching constant in [`crate::consts`], so a
//! tuning file only needs to list the values it overrides.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance values consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Vehicles ===
    pub tank_width: f32,
    pub tank_height: f32,
    pub tank_health: i32,
    /// Movement per tick
    pub tank_speed: f32,
    /// Multiplier applied to enemy speed while chasing
    pub enemy_speed_factor: f32,
    /// Milliseconds between shots
    pub fire_cooldown_ms: f64,
    /// Radians per tick while a turn key is held
    pub turn_rate: f32,

    // === Projectiles ===
    pub projectile_speed: f32,
    pub projectile_radius: f32,

    // === Combat ===
    pub player_hit_damage: i32,
    pub enemy_hit_damage: i32,
    pub kill_score: u64,

    // === Enemy population ===
    pub max_enemies: usize,
    pub spawn_margin: f32,
    /// Per-tick fire probability for each enemy (0.0 - 1.0)
    pub ai_fire_chance: f32,

    // === Starting layout ===
    pub player_start: (f32, f32),
    /// One enemy is placed at each position
    pub enemy_starts: Vec<(f32, f32)>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            tank_width: TANK_WIDTH,
            tank_height: TANK_HEIGHT,
            tank_health: TANK_HEALTH,
            tank_speed: TANK_SPEED,
            enemy_speed_factor: ENEMY_SPEED_FACTOR,
            fire_cooldown_ms: FIRE_COOLDOWN_MS,
            turn_rate: TURN_RATE,

            projectile_speed: PROJECTILE_SPEED,
            projectile_radius: PROJECTILE_RADIUS,

            player_hit_damage: PLAYER_HIT_DAMAGE,
            enemy_hit_damage: ENEMY_HIT_DAMAGE,
            kill_score: KILL_SCORE,

            max_enemies: MAX_ENEMIES,
            spawn_margin: SPAWN_MARGIN,
            ai_fire_chance: AI_FIRE_CHANCE,

            player_start: PLAYER_START,
            enemy_starts: vec![ENEMY_START],
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Arena size as a vector
    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }

    /// Vehicle box size as a vector
    pub fn tank_size(&self) -> Vec2 {
        Vec2::new(self.tank_width, self.tank_height)
    }

    /// Upper corner of the enemy spawn area
    pub fn spawn_extent(&self) -> Vec2 {
        Vec2::new(
            (self.arena_width - self.spawn_margin).max(0.0),
            (self.arena_height - self.spawn_margin).max(0.0),
        )
    }

    /// Load tuning from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    return tuning;
                }
                Err(e) => log::warn!("Invalid tuning file {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read tuning file {}: {}", path.display(), e),
        }

        log::info!("Using default tuning");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.arena(), Vec2::new(800.0, 600.0));
        assert_eq!(tuning.tank_size(), Vec2::new(30.0, 30.0));
        assert_eq!(tuning.fire_cooldown_ms, 500.0);
        assert_eq!(tuning.max_enemies, 3);
        assert_eq!(tuning.enemy_starts, vec![(600.0, 300.0)]);
        assert_eq!(tuning.spawn_extent(), Vec2::new(700.0, 500.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "tank_speed": 5.0, "max_enemies": 2 }"#)
            .expect("valid tuning");
        assert_eq!(tuning.tank_speed, 5.0);
        assert_eq!(tuning.max_enemies, 2);
        assert_eq!(tuning.arena_width, ARENA_WIDTH);
        assert_eq!(tuning.kill_score, KILL_SCORE);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Tuning::from_json("{ not json").is_err());
        assert!(Tuning::from_json(r#"{ "tank_speed": "fast" }"#).is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let tuning = Tuning::load("/nonexistent/tank-arena/tuning.json");
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_json_roundtrip_preserves_overrides() {
        let mut tuning = Tuning::default();
        tuning.enemy_starts = vec![(10.0, 20.0), (30.0, 40.0)];
        let json = serde_json::to_string(&tuning).expect("serialize");
        assert_eq!(Tuning::from_json(&json).expect("parse"), tuning);
    }
}
