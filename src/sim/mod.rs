//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Time and randomness are injected by the caller
//! - Stable iteration order (firing order, roster order)
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod projectile;
pub mod rng;
pub mod state;
pub mod tick;
pub mod vehicle;

pub use ai::AiDecision;
pub use collision::CollisionReport;
pub use projectile::Projectile;
pub use rng::{RandomSource, SeededRandom};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
pub use vehicle::{Faction, Vehicle};
