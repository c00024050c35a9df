//! # duel-engine
//!
//! A rules engine for two-competitor item duels.
//!
//! ## Design Principles
//!
//! 1. **Ordered Reactions**: Passive and status effects are listeners kept in
//!    one append-only list. The list order decides who sees an event first.
//!
//! 2. **Guaranteed Termination**: A listener only reacts to what listeners
//!    before it let through, and propagation depth is capped.
//!
//! 3. **Speed Is Turns**: Turn order is derived from relative speed with an
//!    error accumulator and re-derived whenever a speed changes.
//!
//! ## Architecture
//!
//! - **Copy-on-Write State**: Every transition takes the engine state by
//!   value and returns the next one. `im` persistent vectors make the copies
//!   O(1), which also makes board clones cheap for lookahead.
//!
//! - **Replay Log**: Every top-level event and every state change is logged
//!   for an external replay layer; the engine never reads it back.
//!
//! ## Modules
//!
//! - `core`: Ids, competitors, actions, state, configuration, RNG
//! - `items`: Item definitions, held copies, catalog
//! - `effects`: Effects and their terminal processors
//! - `triggers`: Events, conditions, durations, listeners
//! - `engine`: Event propagation and the replay log
//! - `schedule`: Speed-proportional turn queue
//! - `board`: Validated action surface of a match
//! - `strategy`: Decision-making strategies and the match driver

pub mod core;
pub mod items;
pub mod effects;
pub mod triggers;
pub mod engine;
pub mod schedule;
pub mod board;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    InstanceId, InstanceAllocator, PlayerId, Loadout, Competitor,
    GameRng, GameRngState,
    EngineConfig, BoardConfig, FirstPlayer,
    ActionKind, GameAction,
    EngineState, GameState, TurnInfo,
};

pub use crate::items::{CatalogError, Genre, Item, ItemCatalog, ItemDefinition, ItemId};

pub use crate::effects::{Effect, EffectKind, EffectProcessor, EffectValue, Target};

pub use crate::triggers::{
    Condition, ConditionContext, ConditionEvaluator,
    Duration, DurationTracker,
    GameEvent, LifecyclePhase,
    Listener, ListenerKey, Reaction,
    StatusEffect, StatusKind,
};

pub use crate::engine::{Engine, EngineError, EngineSnapshot, LogEntry};

pub use crate::schedule::{TurnEntry, TurnGenerator, TurnId, TurnScheduler};

pub use crate::board::{Board, BoardError};

pub use crate::strategy::{
    run_match, MatchOutcome, Strategies, Strategy,
    ChannelStrategy, GreedyLookahead, LeftmostItem, RandomStrategy, Scripted,
};
