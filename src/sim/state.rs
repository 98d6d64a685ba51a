//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use super::vehicle::{Faction, Vehicle};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Player destroyed; terminal
    GameOver,
}

/// Things that happened during the last tick (for sinks, audio, logging)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Fired { faction: Faction },
    /// `index` is the enemy's roster position at the time of the hit
    EnemyHit { index: usize, health: i32 },
    EnemyDestroyed { x: f32, y: f32 },
    EnemySpawned { x: f32, y: f32 },
    PlayerHit { health: i32 },
    GameOver { score: u64 },
}

/// Complete arena state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub player: Vehicle,
    /// Enemy roster (iteration order is roster order)
    pub enemies: Vec<Vehicle>,
    pub score: u64,
    pub phase: GamePhase,
    /// Simulation tick counter (running ticks only)
    pub time_ticks: u64,
    /// Events from the most recent running tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh game using the tuning's starting layout
    pub fn new(tuning: Tuning) -> Self {
        let (px, py) = tuning.player_start;
        let player = Vehicle::player(Vec2::new(px, py), &tuning);
        let enemies = tuning
            .enemy_starts
            .iter()
            .map(|&(x, y)| Vehicle::enemy(Vec2::new(x, y), &tuning))
            .collect();

        Self {
            tuning,
            player,
            enemies,
            score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Player health as shown on the HUD
    #[inline]
    pub fn player_health(&self) -> i32 {
        self.player.health
    }

    /// Spawn one enemy at a uniformly random spot in the spawn area
    ///
    /// Draws x then y from `rng`.
    pub fn spawn_enemy(&mut self, rng: &mut impl RandomSource) {
        let extent = self.tuning.spawn_extent();
        let pos = Vec2::new(rng.next_unit() * extent.x, rng.next_unit() * extent.y);
        log::debug!("Enemy spawned at ({:.1}, {:.1})", pos.x, pos.y);
        self.enemies.push(Vehicle::enemy(pos, &self.tuning));
        self.events.push(GameEvent::EnemySpawned { x: pos.x, y: pos.y });
    }

    /// Refill the roster after kills: one replacement per kill, up to the cap
    pub fn replace_kills(&mut self, kills: usize, rng: &mut impl RandomSource) {
        for _ in 0..kills {
            if self.enemies.len() < self.tuning.max_enemies {
                self.spawn_enemy(rng);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::SeededRandom;

    struct Fixed(f32);

    impl RandomSource for Fixed {
        fn next_unit(&mut self) -> f32 {
            self.0
        }
    }

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(Tuning::default());
        assert_eq!(state.player.pos, Vec2::new(100.0, 300.0));
        assert!(state.player.is_player());
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].pos, Vec2::new(600.0, 300.0));
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.player_health(), 100);
    }

    #[test]
    fn test_spawn_within_area() {
        let mut state = GameState::new(Tuning::default());
        let mut rng = SeededRandom::new(3);
        for _ in 0..50 {
            state.spawn_enemy(&mut rng);
        }
        for enemy in &state.enemies[1..] {
            assert!(enemy.pos.x >= 0.0 && enemy.pos.x < 700.0);
            assert!(enemy.pos.y >= 0.0 && enemy.pos.y < 500.0);
            assert_eq!(enemy.health, 100);
            assert_eq!(enemy.last_shot_ms, None);
        }
    }

    #[test]
    fn test_spawn_draw_order() {
        let mut state = GameState::new(Tuning::default());
        state.spawn_enemy(&mut Fixed(0.5));
        assert_eq!(state.enemies[1].pos, Vec2::new(350.0, 250.0));
        assert_eq!(state.events, vec![GameEvent::EnemySpawned { x: 350.0, y: 250.0 }]);
    }

    #[test]
    fn test_replace_kills_respects_cap() {
        let mut state = GameState::new(Tuning::default());
        state.replace_kills(1, &mut Fixed(0.1));
        assert_eq!(state.enemies.len(), 2);

        state.replace_kills(5, &mut Fixed(0.1));
        assert_eq!(state.enemies.len(), 3);
    }
}
