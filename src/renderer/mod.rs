//! Rendering collaborators
//!
//! The simulation never draws. Each frame the orchestrator hands a read-only
//! [`ArenaSnapshot`] to a [`RenderSink`]; nothing flows back.

pub mod log_sink;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use log_sink::LogSink;
pub use shapes::{Shape, build_scene};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use glam::Vec2;
use serde::Serialize;

use crate::sim::{GameEvent, GameState, Vehicle};

/// Score/health readout published after every running tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HudStatus {
    pub score: u64,
    pub health: i32,
    pub game_over: bool,
}

impl HudStatus {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score,
            health: state.player_health(),
            game_over: state.is_game_over(),
        }
    }
}

/// Borrowed view of everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ArenaSnapshot<'a> {
    pub tick: u64,
    pub arena: Vec2,
    pub player: &'a Vehicle,
    pub enemies: &'a [Vehicle],
    pub events: &'a [GameEvent],
    pub score: u64,
    pub health: i32,
    pub game_over: bool,
}

impl<'a> ArenaSnapshot<'a> {
    pub fn from_state(state: &'a GameState) -> Self {
        Self {
            tick: state.time_ticks,
            arena: state.tuning.arena(),
            player: &state.player,
            enemies: &state.enemies,
            events: &state.events,
            score: state.score,
            health: state.player_health(),
            game_over: state.is_game_over(),
        }
    }

    pub fn hud(&self) -> HudStatus {
        HudStatus {
            score: self.score,
            health: self.health,
            game_over: self.game_over,
        }
    }
}

/// Presentation target
pub trait RenderSink {
    /// Update the score/health readout
    fn publish_status(&mut self, status: &HudStatus);
    /// Present one frame
    fn draw(&mut self, snapshot: &ArenaSnapshot<'_>);
}

/// Sink that drops everything (tests, benchmarks)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn publish_status(&mut self, _status: &HudStatus) {}

    fn draw(&mut self, _snapshot: &ArenaSnapshot<'_>) {}
}
