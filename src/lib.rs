//! Tank Arena - A top-down tank arena shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vehicles, AI, collisions, game state)
//! - `game`: Frame orchestrator wiring the simulation to its collaborators
//! - `platform`: Input, clock and random source abstractions
//! - `renderer`: Render sinks (headless log sink, canvas on web)
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Tank box (top-left anchored)
    pub const TANK_WIDTH: f32 = 30.0;
    pub const TANK_HEIGHT: f32 = 30.0;
    pub const TANK_HEALTH: i32 = 100;
    /// Movement per tick
    pub const TANK_SPEED: f32 = 3.0;
    /// Enemies chase at a fraction of their base speed
    pub const ENEMY_SPEED_FACTOR: f32 = 0.5;
    /// Minimum wall time between shots (ms)
    pub const FIRE_COOLDOWN_MS: f64 = 500.0;
    /// Player turret rotation per tick (radians)
    pub const TURN_RATE: f32 = 0.1;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 7.0;
    pub const PROJECTILE_RADIUS: f32 = 3.0;

    /// Damage per landed hit
    pub const PLAYER_HIT_DAMAGE: i32 = 20;
    pub const ENEMY_HIT_DAMAGE: i32 = 10;
    /// Score per destroyed enemy
    pub const KILL_SCORE: u64 = 100;

    /// Enemy population cap (refilled on kills only)
    pub const MAX_ENEMIES: usize = 3;
    /// Spawn area is the arena shrunk by this margin on the right/bottom
    pub const SPAWN_MARGIN: f32 = 100.0;
    /// Per-tick chance that an enemy pulls the trigger
    pub const AI_FIRE_CHANCE: f32 = 0.02;

    /// Colors (0xRRGGBB)
    pub const PLAYER_COLOR: u32 = 0x00ff00;
    pub const ENEMY_COLOR: u32 = 0xff0000;

    /// Starting positions
    pub const PLAYER_START: (f32, f32) = (100.0, 300.0);
    pub const ENEMY_START: (f32, f32) = (600.0, 300.0);

    /// Nominal frame duration for hosts that drive a fixed clock (60 Hz)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}

/// Unit vector pointing along `heading` (radians, +x = 0, +y = down)
#[inline]
pub fn heading_vector(heading: f32) -> Vec2 {
    Vec2::new(heading.cos(), heading.sin())
}

/// Heading (radians) of the vector from `from` to `to`
#[inline]
pub fn heading_to(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}
