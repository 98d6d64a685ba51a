//! Frame orchestrator
//!
//! Owns the game state and every collaborator the simulation needs. The host
//! drives it with an explicit loop:
//!
//! ```no_run
//! # use tank_arena::{Game, Tuning};
//! # use tank_arena::platform::{FrameClock, KeyState};
//! # use tank_arena::renderer::NullSink;
//! # use tank_arena::sim::SeededRandom;
//! let mut game = Game::new(
//!     Tuning::default(),
//!     KeyState::new(),
//!     FrameClock::default(),
//!     SeededRandom::new(1),
//!     NullSink,
//! );
//! while !game.is_game_over() {
//!     game.tick();
//!     game.render();
//!     game.clock_mut().advance();
//! }
//! ```

use crate::platform::{Clock, InputSource};
use crate::renderer::{ArenaSnapshot, HudStatus, RenderSink};
use crate::sim::{GameState, RandomSource, tick};
use crate::tuning::Tuning;

/// A running game wired to its input, clock, randomness and render sink
pub struct Game<I, C, R, S> {
    state: GameState,
    input: I,
    clock: C,
    rng: R,
    sink: S,
}

impl<I, C, R, S> Game<I, C, R, S>
where
    I: InputSource,
    C: Clock,
    R: RandomSource,
    S: RenderSink,
{
    pub fn new(tuning: Tuning, input: I, clock: C, rng: R, sink: S) -> Self {
        Self::from_state(GameState::new(tuning), input, clock, rng, sink)
    }

    /// Resume from an existing state (tests, scripted scenarios)
    pub fn from_state(state: GameState, input: I, clock: C, rng: R, sink: S) -> Self {
        Self {
            state,
            input,
            clock,
            rng,
            sink,
        }
    }

    /// Advance one frame and publish the HUD
    ///
    /// A no-op once the game is over.
    pub fn tick(&mut self) {
        if self.state.is_game_over() {
            return;
        }

        let input = self.input.poll();
        let now_ms = self.clock.now_ms();
        tick(&mut self.state, &input, now_ms, &mut self.rng);

        self.sink.publish_status(&HudStatus::from_state(&self.state));
    }

    /// Present the current state
    pub fn render(&mut self) {
        let snapshot = ArenaSnapshot::from_state(&self.state);
        self.sink.draw(&snapshot);
    }

    pub fn snapshot(&self) -> ArenaSnapshot<'_> {
        ArenaSnapshot::from_state(&self.state)
    }

    pub fn hud(&self) -> HudStatus {
        HudStatus::from_state(&self.state)
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for scenario setup
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Start over with a fresh state, keeping the collaborators
    pub fn restart(&mut self) {
        let tuning = self.state.tuning.clone();
        self.state = GameState::new(tuning);
        log::info!("Game restarted");
    }
}
