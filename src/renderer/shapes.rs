//! Scene generation for 2D primitives
//!
//! Turns a snapshot into a flat, backend-agnostic draw list. Backends only
//! need to know how to fill a rotated rectangle, a circle and centered text.

use glam::Vec2;

use super::ArenaSnapshot;
use crate::sim::Vehicle;

/// Background fill
pub const BACKGROUND_COLOR: u32 = 0x000000;
/// Projectiles and overlay text
pub const FOREGROUND_COLOR: u32 = 0xffffff;
/// Cannon barrel thickness
pub const CANNON_WIDTH: f32 = 8.0;

/// A single draw primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Rectangle in a frame centered at `origin` and rotated by `rotation`;
    /// `offset` is the rectangle's top-left corner in that local frame
    Rect {
        origin: Vec2,
        rotation: f32,
        offset: Vec2,
        size: Vec2,
        color: u32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: u32,
    },
    /// Text centered horizontally on `pos`
    Text {
        pos: Vec2,
        size_px: f32,
        text: String,
        color: u32,
    },
}

/// Body and cannon for one vehicle, followed by its projectiles
fn vehicle_shapes(vehicle: &Vehicle, out: &mut Vec<Shape>) {
    let origin = vehicle.center();
    out.push(Shape::Rect {
        origin,
        rotation: vehicle.heading,
        offset: -vehicle.size * 0.5,
        size: vehicle.size,
        color: vehicle.color,
    });
    // Barrel sticks out half a body length along the heading
    out.push(Shape::Rect {
        origin,
        rotation: vehicle.heading,
        offset: Vec2::new(0.0, -CANNON_WIDTH / 2.0),
        size: Vec2::new(vehicle.size.x / 2.0, CANNON_WIDTH),
        color: vehicle.color,
    });
    for p in &vehicle.projectiles {
        out.push(Shape::Circle {
            center: p.pos,
            radius: p.radius,
            color: FOREGROUND_COLOR,
        });
    }
}

/// Build the full draw list for a frame
pub fn build_scene(snapshot: &ArenaSnapshot<'_>) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(4 + 2 * (snapshot.enemies.len() + 1));

    shapes.push(Shape::Rect {
        origin: Vec2::ZERO,
        rotation: 0.0,
        offset: Vec2::ZERO,
        size: snapshot.arena,
        color: BACKGROUND_COLOR,
    });

    vehicle_shapes(snapshot.player, &mut shapes);
    for enemy in snapshot.enemies {
        vehicle_shapes(enemy, &mut shapes);
    }

    if snapshot.game_over {
        let center = snapshot.arena * 0.5;
        shapes.push(Shape::Text {
            pos: center,
            size_px: 48.0,
            text: "GAME OVER".to_string(),
            color: FOREGROUND_COLOR,
        });
        shapes.push(Shape::Text {
            pos: center + Vec2::new(0.0, 40.0),
            size_px: 24.0,
            text: format!("Final Score: {}", snapshot.score),
            color: FOREGROUND_COLOR,
        });
    }

    shapes
}

/// CSS color string for a 0xRRGGBB value
pub fn css_color(color: u32) -> String {
    format!("#{:06x}", color & 0x00ff_ffff)
}
