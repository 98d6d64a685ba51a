//! Platform abstraction layer
//!
//! Collaborators the frame orchestrator pulls from each tick:
//! - Input: a snapshot of held logical keys
//! - Time: a monotonic millisecond clock for fire cooldowns
//!
//! Randomness lives with the simulation (`sim::rng`) since it is part of
//! the deterministic state contract.

pub mod input;
pub mod time;

pub use input::{Key, KeyState};
pub use time::FrameClock;
#[cfg(target_arch = "wasm32")]
pub use time::PerformanceClock;
#[cfg(not(target_arch = "wasm32"))]
pub use time::SystemClock;

use crate::sim::TickInput;

/// Source of per-tick control intent
pub trait InputSource {
    /// Current held controls, refreshed before every tick
    fn poll(&mut self) -> TickInput;
}

/// Monotonic millisecond timestamps
pub trait Clock {
    fn now_ms(&self) -> f64;
}

impl InputSource for TickInput {
    fn poll(&mut self) -> TickInput {
        *self
    }
}
