//! Enemy steering
//!
//! Direct pursuit: every enemy turns to face the player and rolls forward at
//! half speed. There is no pathfinding, no stopping distance and no
//! avoidance, so enemies happily drive through the player.

use glam::Vec2;

use super::vehicle::Vehicle;
use crate::{heading_to, heading_vector};

/// What an enemy does this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiDecision {
    pub heading: f32,
    /// Translation for this tick
    pub step: Vec2,
    pub fire: bool,
}

/// Decide an enemy's move from the player's position and one uniform roll
pub fn decide(
    enemy: &Vehicle,
    player: &Vehicle,
    speed_factor: f32,
    fire_chance: f32,
    roll: f32,
) -> AiDecision {
    let heading = heading_to(enemy.pos, player.pos);
    AiDecision {
        heading,
        step: heading_vector(heading) * (enemy.speed * speed_factor),
        fire: roll < fire_chance,
    }
}

/// Apply a decision; firing still honors the vehicle's cooldown
pub fn apply(enemy: &mut Vehicle, decision: &AiDecision, now_ms: f64) -> bool {
    enemy.heading = decision.heading;
    enemy.move_by(decision.step);
    decision.fire && enemy.fire(now_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use std::f32::consts::PI;

    fn pair(enemy_at: Vec2) -> (Vehicle, Vehicle) {
        let tuning = Tuning::default();
        (
            Vehicle::enemy(enemy_at, &tuning),
            Vehicle::player(Vec2::new(100.0, 300.0), &tuning),
        )
    }

    #[test]
    fn test_pursues_player_at_half_speed() {
        let (enemy, player) = pair(Vec2::new(600.0, 300.0));
        let d = decide(&enemy, &player, 0.5, 0.02, 0.5);
        assert!((d.heading - PI).abs() < 1e-6);
        assert!((d.step - Vec2::new(-1.5, 0.0)).length() < 1e-5);
        assert!(!d.fire);
    }

    #[test]
    fn test_fire_roll_threshold() {
        let (enemy, player) = pair(Vec2::new(600.0, 300.0));
        assert!(decide(&enemy, &player, 0.5, 0.02, 0.0199).fire);
        assert!(!decide(&enemy, &player, 0.5, 0.02, 0.02).fire);
    }

    #[test]
    fn test_apply_moves_and_respects_cooldown() {
        let (mut enemy, player) = pair(Vec2::new(100.0, 100.0));
        let d = decide(&enemy, &player, 0.5, 0.02, 0.0);
        assert!((d.heading - PI / 2.0).abs() < 1e-6);

        assert!(apply(&mut enemy, &d, 0.0));
        assert!((enemy.pos - Vec2::new(100.0, 101.5)).length() < 1e-4);
        assert_eq!(enemy.projectiles.len(), 1);

        // Still cooling down
        assert!(!apply(&mut enemy, &d, 100.0));
        assert_eq!(enemy.projectiles.len(), 1);
    }

    #[test]
    fn test_overlapping_player_does_not_stop() {
        let (enemy, player) = pair(Vec2::new(100.0, 300.0));
        let d = decide(&enemy, &player, 0.5, 0.02, 1.0);
        // atan2(0, 0) == 0: keeps rolling along +x
        assert_eq!(d.heading, 0.0);
        assert!(d.step.length() > 0.0);
    }
}
