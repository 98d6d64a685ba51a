//! Per-frame simulation tick
//!
//! One call advances the arena by exactly one step. Step order:
//! input, player projectiles, enemy AI + projectiles, collisions, player
//! clamp, kill replacement, game-over check.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ai;
use super::collision;
use super::rng::RandomSource;
use super::state::{GameEvent, GamePhase, GameState};
use super::vehicle::Faction;

/// Logical controls held during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub fire: bool,
}

impl TickInput {
    /// Movement for this tick; diagonals are additive, not normalized
    pub fn movement(&self, speed: f32) -> Vec2 {
        let mut delta = Vec2::ZERO;
        if self.up {
            delta.y -= speed;
        }
        if self.down {
            delta.y += speed;
        }
        if self.left {
            delta.x -= speed;
        }
        if self.right {
            delta.x += speed;
        }
        delta
    }

    /// Heading change for this tick
    pub fn rotation(&self, turn_rate: f32) -> f32 {
        let mut d = 0.0;
        if self.rotate_left {
            d -= turn_rate;
        }
        if self.rotate_right {
            d += turn_rate;
        }
        d
    }
}

/// Advance the game state by one step
///
/// `now_ms` feeds the fire cooldowns; `rng` supplies AI fire rolls and spawn
/// positions. Does nothing once the game is over.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64, rng: &mut impl RandomSource) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.events.clear();
    state.time_ticks += 1;

    let arena = state.tuning.arena();

    // Player input
    let player = &mut state.player;
    player.move_by(input.movement(player.speed));
    player.rotate(input.rotation(state.tuning.turn_rate));
    if input.fire && player.fire(now_ms) {
        state.events.push(GameEvent::Fired {
            faction: Faction::Player,
        });
    }
    player.advance_projectiles(arena);

    // Enemy AI, one roll per enemy
    for enemy in state.enemies.iter_mut() {
        let decision = ai::decide(
            enemy,
            &state.player,
            state.tuning.enemy_speed_factor,
            state.tuning.ai_fire_chance,
            rng.next_unit(),
        );
        if ai::apply(enemy, &decision, now_ms) {
            state.events.push(GameEvent::Fired {
                faction: Faction::Enemy,
            });
        }
        enemy.advance_projectiles(arena);
    }

    let report = collision::resolve(state);

    // Enemies are never clamped
    state.player.clamp_to_arena(arena);

    state.replace_kills(report.kills, rng);

    if state.player.is_destroyed() {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!(
            "Game over after {} ticks, final score {}",
            state.time_ticks,
            state.score
        );
    }
}
