//! Engine errors.

use thiserror::Error;

use crate::core::{InstanceId, PlayerId};
use crate::items::CatalogError;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("unknown competitor {player}")]
    UnknownPlayer { player: PlayerId },

    #[error("both competitors are called {player}")]
    DuplicatePlayer { player: PlayerId },

    #[error("{player} does not hold item {instance}")]
    ItemNotHeld { player: PlayerId, instance: InstanceId },

    #[error("item instance {instance} is held more than once")]
    DuplicateInstance { instance: InstanceId },
}
