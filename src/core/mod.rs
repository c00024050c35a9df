//! Core types: identifiers, competitors, actions, state, configuration, RNG.
//!
//! Everything here is plain data. Behaviour lives in `engine`, `schedule`
//! and `board`.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use entity::{InstanceAllocator, InstanceId};
pub use player::{Competitor, Loadout, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use config::{BoardConfig, EngineConfig, FirstPlayer};
pub use action::{ActionKind, GameAction};
pub use state::{EngineState, GameState, TurnInfo};
