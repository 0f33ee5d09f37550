//! Recorded input sessions.
//!
//! A session is JSON lines, one [`Step`] per line:
//!
//! ```text
//! {"op":"tick","pointer":{"x":200,"y":240},"events":[{"down":{"x":200,"y":240}}]}
//! {"op":"tick","pointer":{"x":230,"y":250}}
//! {"op":"capture"}
//! ```
//!
//! Blank lines are skipped.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::io::{self, BufRead};

use rig::engine::Engine;
use rig::geom::Point;
use rig::input::PointerEvent;
use rig::render::{self, DrawCmd};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to read session input: {0}")]
    Io(#[from] io::Error),
    #[error("invalid session line {line}: {source}")]
    Parse { line: usize, source: serde_json::Error },
}

/// One recorded host action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Drain `events`, then advance one tick with the pointer at `pointer`.
    Tick {
        pointer: Point,
        #[serde(default)]
        events: Vec<PointerEvent>,
    },
    /// Capture the current pose as a frame.
    Capture,
}

/// What a replay did.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub ticks: usize,
    pub captures: usize,
    /// Draw list of the last tick, or of the starting pose if there were none.
    pub last_draw: Vec<DrawCmd>,
}

/// Parse one session line. Blank lines yield `None`.
///
/// # Errors
///
/// Returns the `serde_json` error for malformed or unknown steps.
pub fn parse_step_line(line: &str) -> Result<Option<Step>, serde_json::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(trimmed).map(Some)
}

/// Read every step from `reader`. Line numbers in errors are 1-based.
///
/// # Errors
///
/// Fails on the first unreadable or unparseable line.
pub fn read_steps(reader: impl BufRead) -> Result<Vec<Step>, SessionError> {
    let mut steps = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let step = parse_step_line(&line).map_err(|source| SessionError::Parse { line: index + 1, source })?;
        steps.extend(step);
    }
    Ok(steps)
}

/// Feed `steps` through the engine in order.
pub fn replay(engine: &mut Engine, steps: &[Step]) -> Summary {
    let mut summary = Summary {
        ticks: 0,
        captures: 0,
        last_draw: render::draw(engine.figure(), engine.active_handle()),
    };
    for step in steps {
        match step {
            Step::Tick { pointer, events } => {
                summary.last_draw = engine.tick(events, *pointer);
                summary.ticks += 1;
            }
            Step::Capture => {
                engine.add_frame();
                summary.captures += 1;
            }
        }
    }
    summary
}
