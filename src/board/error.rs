//! Board errors.
//!
//! Every rejection leaves the board exactly as it was.

use thiserror::Error;

use crate::core::{InstanceId, PlayerId};
use crate::engine::EngineError;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("the game is already over")]
    GameOver,

    #[error("unknown competitor {player}")]
    UnknownPlayer { player: PlayerId },

    #[error("it is {current}'s turn, not {player}'s")]
    NotYourTurn { player: PlayerId, current: PlayerId },

    #[error("{player} does not hold item {instance}")]
    ItemNotHeld { player: PlayerId, instance: InstanceId },

    #[error("play action from {player} names no item")]
    MissingItem { player: PlayerId },

    #[error("no strategy registered for {player}")]
    MissingStrategy { player: PlayerId },

    #[error(transparent)]
    Engine(#[from] EngineError),
}
