//! Clocks for fire-cooldown gating

use super::Clock;
use crate::consts::FRAME_MS;

/// Wall-clock milliseconds since creation (native)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Browser `performance.now()` clock
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct PerformanceClock {
    performance: web_sys::Performance,
}

#[cfg(target_arch = "wasm32")]
impl PerformanceClock {
    pub fn new() -> Option<Self> {
        let performance = web_sys::window()?.performance()?;
        Some(Self { performance })
    }
}

#[cfg(target_arch = "wasm32")]
impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        self.performance.now()
    }
}

/// Simulated clock that only moves when told to
///
/// Used by the headless runner and tests so cooldowns follow frame count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    now_ms: f64,
    frame_ms: f64,
}

impl FrameClock {
    pub fn new(frame_ms: f64) -> Self {
        Self {
            now_ms: 0.0,
            frame_ms,
        }
    }

    /// Step forward one frame
    pub fn advance(&mut self) {
        self.now_ms += self.frame_ms;
    }

    /// Jump forward by an arbitrary amount
    pub fn advance_by(&mut self, ms: f64) {
        self.now_ms += ms;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(FRAME_MS)
    }
}

impl Clock for FrameClock {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock_advances() {
        let mut clock = FrameClock::new(20.0);
        assert_eq!(clock.now_ms(), 0.0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.now_ms(), 40.0);
        clock.advance_by(500.0);
        assert_eq!(clock.now_ms(), 540.0);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
