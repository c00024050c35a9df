//! Board: the validated action surface of one match.

mod error;
mod game;

pub use error::BoardError;
pub use game::Board;
