//! Turn scheduling.
//!
//! - [`TurnGenerator`]: endless speed-proportional turn sequence
//! - [`TurnScheduler`]: window of upcoming turns, re-derived on speed change

mod generator;
mod scheduler;

pub use generator::{Seat, TurnEntry, TurnGenerator, TurnId};
pub use scheduler::{TurnScheduler, MIN_WINDOW};
