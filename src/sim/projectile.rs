//! Projectiles fired by vehicles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::heading_vector;

/// A projectile in flight, owned by the vehicle that fired it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Fixed at creation from the firer's heading
    pub heading: f32,
    /// Distance per tick
    pub speed: f32,
    /// Drawing radius only; collisions treat the projectile as a point
    pub radius: f32,
}

impl Projectile {
    pub fn new(pos: Vec2, heading: f32, speed: f32, radius: f32) -> Self {
        Self {
            pos,
            heading,
            speed,
            radius,
        }
    }

    /// Move one tick along the heading
    #[inline]
    pub fn advance(&mut self) {
        self.pos += heading_vector(self.heading) * self.speed;
    }

    /// Whether the projectile lies inside the closed rectangle [0,w]x[0,h]
    #[inline]
    pub fn in_arena(&self, arena: Vec2) -> bool {
        self.pos.x >= 0.0 && self.pos.x <= arena.x && self.pos.y >= 0.0 && self.pos.y <= arena.y
    }
}
