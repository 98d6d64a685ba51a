//! Vehicles (player and enemy tanks)

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::projectile::Projectile;
use crate::consts::*;
use crate::heading_vector;
use crate::tuning::Tuning;

/// Which side a vehicle fights for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Faction {
    Player,
    Enemy,
}

/// A tank: a fixed-size box with a heading, health and its own projectiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub faction: Faction,
    /// Top-left corner of the box
    pub pos: Vec2,
    pub size: Vec2,
    /// Radians, never normalized
    pub heading: f32,
    /// Destroyed at <= 0; may go negative
    pub health: i32,
    /// Movement per tick
    pub speed: f32,
    /// Display color (0xRRGGBB)
    pub color: u32,
    pub fire_cooldown_ms: f64,
    /// Timestamp of the last successful shot, `None` if never fired
    pub last_shot_ms: Option<f64>,
    /// Projectiles in flight, in firing order
    pub projectiles: Vec<Projectile>,
    projectile_speed: f32,
    projectile_radius: f32,
}

impl Vehicle {
    /// Create a vehicle with default stats for its faction
    pub fn new(faction: Faction, pos: Vec2, tuning: &Tuning) -> Self {
        let color = match faction {
            Faction::Player => PLAYER_COLOR,
            Faction::Enemy => ENEMY_COLOR,
        };
        Self {
            faction,
            pos,
            size: tuning.tank_size(),
            heading: 0.0,
            health: tuning.tank_health,
            speed: tuning.tank_speed,
            color,
            fire_cooldown_ms: tuning.fire_cooldown_ms,
            last_shot_ms: None,
            projectiles: Vec::new(),
            projectile_speed: tuning.projectile_speed,
            projectile_radius: tuning.projectile_radius,
        }
    }

    pub fn player(pos: Vec2, tuning: &Tuning) -> Self {
        Self::new(Faction::Player, pos, tuning)
    }

    pub fn enemy(pos: Vec2, tuning: &Tuning) -> Self {
        Self::new(Faction::Enemy, pos, tuning)
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        self.faction == Faction::Player
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.health <= 0
    }

    /// Center of the box
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Point where new projectiles appear: half a box width ahead of center
    pub fn muzzle(&self) -> Vec2 {
        self.center() + heading_vector(self.heading) * (self.size.x * 0.5)
    }

    /// Translate without any bounds enforcement
    #[inline]
    pub fn move_by(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    #[inline]
    pub fn rotate(&mut self, d_angle: f32) {
        self.heading += d_angle;
    }

    /// Fire a projectile if the cooldown has elapsed
    ///
    /// Returns true when a projectile was added.
    pub fn fire(&mut self, now_ms: f64) -> bool {
        let ready = match self.last_shot_ms {
            Some(last) => now_ms - last >= self.fire_cooldown_ms,
            None => true,
        };
        if !ready {
            return false;
        }

        self.projectiles.push(Projectile::new(
            self.muzzle(),
            self.heading,
            self.projectile_speed,
            self.projectile_radius,
        ));
        self.last_shot_ms = Some(now_ms);
        true
    }

    /// Move every projectile one tick and drop those that left the arena
    pub fn advance_projectiles(&mut self, arena: Vec2) {
        self.projectiles.retain_mut(|p| {
            p.advance();
            p.in_arena(arena)
        });
    }

    /// Subtract health; callers check `is_destroyed` afterwards
    #[inline]
    pub fn apply_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Inclusive box test against a point
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.pos.x
            && p.x <= self.pos.x + self.size.x
            && p.y >= self.pos.y
            && p.y <= self.pos.y + self.size.y
    }

    /// Keep the whole box inside the arena
    pub fn clamp_to_arena(&mut self, arena: Vec2) {
        let max = (arena - self.size).max(Vec2::ZERO);
        self.pos = self.pos.clamp(Vec2::ZERO, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tank() -> Vehicle {
        Vehicle::player(Vec2::new(100.0, 300.0), &Tuning::default())
    }

    #[test]
    fn test_first_shot_is_never_on_cooldown() {
        let mut t = tank();
        assert!(t.fire(0.0));
        assert_eq!(t.projectiles.len(), 1);
        assert_eq!(t.last_shot_ms, Some(0.0));
    }

    #[test]
    fn test_cooldown_gates_fire() {
        let mut t = tank();
        assert!(t.fire(1000.0));
        assert!(!t.fire(1499.0));
        assert_eq!(t.projectiles.len(), 1);
        assert!(t.fire(1500.0));
        assert_eq!(t.projectiles.len(), 2);
    }

    #[test]
    fn test_muzzle_position() {
        let mut t = tank();
        t.fire(0.0);
        // center (115, 315) + half width along +x
        assert!((t.projectiles[0].pos - Vec2::new(130.0, 315.0)).length() < 1e-4);
        assert_eq!(t.projectiles[0].heading, 0.0);
        assert_eq!(t.projectiles[0].speed, 7.0);
        assert_eq!(t.projectiles[0].radius, 3.0);
    }

    #[test]
    fn test_projectiles_leave_arena() {
        let mut t = Vehicle::player(Vec2::new(760.0, 300.0), &Tuning::default());
        t.fire(0.0);
        let arena = Vec2::new(800.0, 600.0);
        // muzzle at x=790; 7 per tick
        t.advance_projectiles(arena);
        assert_eq!(t.projectiles.len(), 1);
        t.advance_projectiles(arena);
        assert!(t.projectiles.is_empty());
    }

    #[test]
    fn test_advance_keeps_firing_order() {
        let mut t = tank();
        t.fire(0.0);
        t.rotate(std::f32::consts::PI);
        t.fire(500.0);
        t.rotate(std::f32::consts::PI);
        t.fire(1000.0);
        t.advance_projectiles(Vec2::new(800.0, 600.0));
        let headings: Vec<f32> = t.projectiles.iter().map(|p| p.heading).collect();
        assert_eq!(headings.len(), 3);
        assert!(headings.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_damage_can_go_negative() {
        let mut t = tank();
        t.health = 5;
        t.apply_damage(10);
        assert_eq!(t.health, -5);
        assert!(t.is_destroyed());
    }

    #[test]
    fn test_contains_point_inclusive() {
        let t = tank();
        assert!(t.contains_point(Vec2::new(100.0, 300.0)));
        assert!(t.contains_point(Vec2::new(130.0, 330.0)));
        assert!(!t.contains_point(Vec2::new(130.01, 315.0)));
        assert!(!t.contains_point(Vec2::new(99.9, 315.0)));
    }

    #[test]
    fn test_clamp_to_arena() {
        let arena = Vec2::new(800.0, 600.0);
        let mut t = tank();
        t.pos = Vec2::new(-5.0, 590.0);
        t.clamp_to_arena(arena);
        assert_eq!(t.pos, Vec2::new(0.0, 570.0));

        t.pos = Vec2::new(400.0, 200.0);
        t.clamp_to_arena(arena);
        assert_eq!(t.pos, Vec2::new(400.0, 200.0));
    }

    proptest! {
        #[test]
        fn prop_fire_rate_never_exceeds_cooldown(
            start in 0.0f64..10_000.0,
            gaps in proptest::collection::vec(0.0f64..1_000.0, 1..40),
        ) {
            let mut t = tank();
            let mut now = start;
            let mut shots: Vec<f64> = Vec::new();
            for gap in gaps {
                now += gap;
                if t.fire(now) {
                    shots.push(now);
                }
            }
            prop_assert_eq!(shots.len(), t.projectiles.len());
            for w in shots.windows(2) {
                prop_assert!(w[1] - w[0] >= 500.0);
            }
        }

        #[test]
        fn prop_projectiles_never_reappear(heading in -10.0f32..10.0, ticks in 1usize..400) {
            let arena = Vec2::new(800.0, 600.0);
            let mut t = tank();
            t.heading = heading;
            t.fire(0.0);
            let mut gone = false;
            for _ in 0..ticks {
                t.advance_projectiles(arena);
                if gone {
                    prop_assert!(t.projectiles.is_empty());
                }
                gone = t.projectiles.is_empty();
                for p in &t.projectiles {
                    prop_assert!(p.in_arena(arena));
                }
            }
        }
    }
}
