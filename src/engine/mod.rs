//! Effect-resolution engine.
//!
//! The [`Engine`] owns the rules state for one match: both competitors and
//! the ordered listener list. It exposes lifecycle operations and `play`;
//! all of them log the events they emit and resolve them through the
//! listener chain.
//!
//! ## Termination
//!
//! Each listener only sees events from listeners before it, so propagation
//! always finishes. The depth limit in [`EngineConfig`](crate::core::EngineConfig)
//! additionally caps how deep a chain may go. Hitting it drops the event,
//! logs [`LogEntry::Truncated`] and counts in [`Engine::truncations`].

mod error;
mod log;
mod processing;

pub use error::EngineError;
pub use log::{EngineSnapshot, EventLog, LogEntry};
pub use processing::Engine;
