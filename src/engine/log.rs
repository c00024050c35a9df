//! Replay log.
//!
//! The engine records every top-level event it processes and a snapshot
//! after every state change. The log is write-only for the engine: callers
//! drain it for replay or animation, and draining clears it.

use serde::{Deserialize, Serialize};

use crate::core::{Competitor, EngineState, PlayerId};
use crate::triggers::GameEvent;

/// Observable part of the engine state after a change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub player_one: Competitor,
    pub player_two: Competitor,
    pub listener_count: usize,
    pub turn_number: u32,
    pub game_over: bool,
    pub winner_id: Option<PlayerId>,
}

impl From<&EngineState> for EngineSnapshot {
    fn from(state: &EngineState) -> Self {
        Self {
            player_one: state.player_one.clone(),
            player_two: state.player_two.clone(),
            listener_count: state.listeners.len(),
            turn_number: state.turn_number,
            game_over: state.game_over,
            winner_id: state.winner_id.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum LogEntry {
    Event(GameEvent),
    StateChange(EngineSnapshot),
    /// Propagation stopped at the depth limit.
    Truncated { depth: usize },
}

/// Ordered, drain-once log.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Take every entry, leaving the log empty.
    pub fn drain(&mut self) -> Vec<LogEntry> {
        std::mem::take(&mut self.entries)
    }

    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
