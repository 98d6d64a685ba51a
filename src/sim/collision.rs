//! Projectile vs vehicle collision resolution
//!
//! Projectiles are points and vehicles are axis-aligned boxes. A projectile
//! lands at most one hit per tick: it is consumed by the first vehicle (in
//! roster order) whose box contains it. Survivor lists are rebuilt instead of
//! spliced mid-iteration, so removals never skip pending pairs.

use super::state::{GameEvent, GameState};
use super::vehicle::Vehicle;

/// Outcome of one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Enemies destroyed this tick
    pub kills: usize,
    pub player_hits: usize,
    pub player_destroyed: bool,
}

/// Player projectiles against the enemy roster
///
/// Destroyed enemies are removed immediately, so later projectiles only test
/// against the survivors. Returns the number of kills.
pub fn player_fire_vs_enemies(
    player: &mut Vehicle,
    enemies: &mut Vec<Vehicle>,
    damage: i32,
    events: &mut Vec<GameEvent>,
) -> usize {
    let mut kills = 0;
    let in_flight = std::mem::take(&mut player.projectiles);

    for projectile in in_flight {
        let Some(index) = enemies.iter().position(|e| e.contains_point(projectile.pos)) else {
            player.projectiles.push(projectile);
            continue;
        };

        let enemy = &mut enemies[index];
        enemy.apply_damage(damage);
        events.push(GameEvent::EnemyHit {
            index,
            health: enemy.health,
        });

        if enemy.is_destroyed() {
            let wreck = enemies.remove(index);
            log::debug!("Enemy destroyed at ({:.1}, {:.1})", wreck.pos.x, wreck.pos.y);
            events.push(GameEvent::EnemyDestroyed {
                x: wreck.pos.x,
                y: wreck.pos.y,
            });
            kills += 1;
        }
    }

    kills
}

/// Every enemy's projectiles against the player, enemies in roster order
///
/// Returns the number of hits landed on the player.
pub fn enemy_fire_vs_player(
    enemies: &mut [Vehicle],
    player: &mut Vehicle,
    damage: i32,
    events: &mut Vec<GameEvent>,
) -> usize {
    let mut hits = 0;

    for enemy in enemies.iter_mut() {
        enemy.projectiles.retain(|projectile| {
            if !player.contains_point(projectile.pos) {
                return true;
            }
            player.apply_damage(damage);
            events.push(GameEvent::PlayerHit {
                health: player.health,
            });
            hits += 1;
            false
        });
    }

    hits
}

/// Run both passes over the game state, awarding score for kills
pub fn resolve(state: &mut GameState) -> CollisionReport {
    let kills = player_fire_vs_enemies(
        &mut state.player,
        &mut state.enemies,
        state.tuning.player_hit_damage,
        &mut state.events,
    );
    state.score += kills as u64 * state.tuning.kill_score;

    let player_hits = enemy_fire_vs_player(
        &mut state.enemies,
        &mut state.player,
        state.tuning.enemy_hit_damage,
        &mut state.events,
    );

    CollisionReport {
        kills,
        player_hits,
        player_destroyed: state.player.is_destroyed(),
    }
}
