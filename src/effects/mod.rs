//! Effect system.
//!
//! Effects are the atoms of every state change:
//! - `Effect`: what should happen, to whom, by how much
//! - `EffectProcessor`: applies an effect once no listener intercepted it
//!
//! Targets are relative. `self` is the competitor that owns the event
//! carrying the effect, `enemy` is the other one.

mod effect;
mod processor;

pub use effect::{Effect, EffectKind, EffectValue, Target};
pub use processor::EffectProcessor;
