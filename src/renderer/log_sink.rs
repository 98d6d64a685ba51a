//! Headless render sink
//!
//! Logs HUD changes and notable events through `log`, and optionally
//! streams one JSON snapshot per frame to a writer.

use std::io::{self, Write};

use super::{ArenaSnapshot, HudStatus, RenderSink};
use crate::sim::GameEvent;

/// Render sink for terminals and pipelines
#[derive(Debug)]
pub struct LogSink<W: Write = io::Sink> {
    last_status: Option<HudStatus>,
    frames: Option<W>,
    frames_written: u64,
}

impl LogSink<io::Sink> {
    /// Log-only sink
    pub fn new() -> Self {
        Self {
            last_status: None,
            frames: None,
            frames_written: 0,
        }
    }
}

impl Default for LogSink<io::Sink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> LogSink<W> {
    /// Also write each frame as a JSON line to `out`
    pub fn with_json(out: W) -> Self {
        Self {
            last_status: None,
            frames: Some(out),
            frames_written: 0,
        }
    }

    pub fn last_status(&self) -> Option<HudStatus> {
        self.last_status
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    pub fn writer(&self) -> Option<&W> {
        self.frames.as_ref()
    }

    fn write_frame(out: &mut W, snapshot: &ArenaSnapshot<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut *out, snapshot)?;
        out.write_all(b"\n")
    }
}

impl<W: Write> RenderSink for LogSink<W> {
    fn publish_status(&mut self, status: &HudStatus) {
        if self.last_status.as_ref() == Some(status) {
            return;
        }
        if status.game_over {
            log::info!("GAME OVER - final score {}", status.score);
        } else {
            log::info!("Score: {}  Health: {}", status.score, status.health);
        }
        self.last_status = Some(*status);
    }

    fn draw(&mut self, snapshot: &ArenaSnapshot<'_>) {
        for event in snapshot.events {
            match event {
                GameEvent::EnemyDestroyed { x, y } => {
                    log::debug!("tick {}: enemy destroyed at ({x:.0}, {y:.0})", snapshot.tick)
                }
                GameEvent::EnemySpawned { x, y } => {
                    log::debug!("tick {}: enemy spawned at ({x:.0}, {y:.0})", snapshot.tick)
                }
                GameEvent::PlayerHit { health } => {
                    log::debug!("tick {}: player hit, health {health}", snapshot.tick)
                }
                _ => {}
            }
        }

        if let Some(out) = self.frames.as_mut() {
            match Self::write_frame(out, snapshot) {
                Ok(()) => self.frames_written += 1,
                Err(e) => log::warn!("Failed to write frame {}: {}", snapshot.tick, e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;
    use crate::tuning::Tuning;

    #[test]
    fn test_status_only_recorded_on_change() {
        let mut sink = LogSink::new();
        let status = HudStatus {
            score: 0,
            health: 100,
            game_over: false,
        };
        sink.publish_status(&status);
        sink.publish_status(&status);
        assert_eq!(sink.last_status(), Some(status));
    }

    #[test]
    fn test_json_frames() {
        let state = GameState::new(Tuning::default());
        let mut sink = LogSink::with_json(Vec::new());
        sink.draw(&ArenaSnapshot::from_state(&state));
        sink.draw(&ArenaSnapshot::from_state(&state));
        assert_eq!(sink.frames_written(), 2);

        let out = String::from_utf8(sink.writer().cloned().unwrap_or_default())
            .expect("utf8 output");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let frame: serde_json::Value = serde_json::from_str(lines[0]).expect("json frame");
        assert_eq!(frame["score"], 0);
        assert_eq!(frame["health"], 100);
        assert_eq!(frame["game_over"], false);
        assert_eq!(frame["enemies"].as_array().map(|e| e.len()), Some(1));
    }
}
