//! Engine and board configuration.
//!
//! Callers configure a match at construction time:
//! - `EngineConfig`: event propagation limits and built-in rule amounts
//! - `BoardConfig`: engine config plus turn-queue presentation and who opens
//!
//! Both are plain serde structs so they can be loaded from any format the
//! caller prefers.

use serde::{Deserialize, Serialize};

/// Event-processing configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum listener-chain depth before propagation is truncated.
    pub max_depth: usize,

    /// Damage dealt by the fatigue rule to a competitor ending their turn
    /// with an empty hand.
    pub fatigue_damage: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: 50,
            fatigue_damage: 1,
        }
    }
}

impl EngineConfig {
    /// Set the recursion guard depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the fatigue damage amount.
    #[must_use]
    pub fn with_fatigue_damage(mut self, damage: i64) -> Self {
        self.fatigue_damage = damage;
        self
    }
}

/// Who takes the first turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayer {
    /// Let the scheduler decide from the speed ratio.
    #[default]
    Auto,
    PlayerOne,
    PlayerTwo,
}

/// Board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub engine: EngineConfig,

    /// Number of upcoming turns exposed in `TurnInfo::turn_queue` (min 2).
    pub turn_window: usize,

    pub first_player: FirstPlayer,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            turn_window: 8,
            first_player: FirstPlayer::Auto,
        }
    }
}

impl BoardConfig {
    #[must_use]
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    #[must_use]
    pub fn with_turn_window(mut self, window: usize) -> Self {
        self.turn_window = window;
        self
    }

    #[must_use]
    pub fn with_first_player(mut self, first: FirstPlayer) -> Self {
        self.first_player = first;
        self
    }
}
