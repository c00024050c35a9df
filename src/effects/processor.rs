//! Terminal effect processors.
//!
//! An effect that made it past every listener lands here and mutates the
//! engine state. Processors take the state by value and hand back the next
//! one; they never fail. An effect whose target does not resolve, or whose
//! payload does not fit its kind, leaves the state as it was. Health and
//! speed arithmetic saturates at the `i64` bounds.

use crate::core::{EngineState, PlayerId};
use crate::triggers::Listener;

use super::effect::{Effect, EffectKind, EffectValue};

/// Applies effects to engine state.
pub struct EffectProcessor;

impl EffectProcessor {
    /// Apply `effect`, owned by `owner`, and return the next state.
    #[must_use]
    pub fn process(mut state: EngineState, effect: &Effect, owner: &PlayerId) -> EngineState {
        let Some(target) = state.resolve_target(owner, effect.target) else {
            tracing::debug!(%owner, kind = %effect.kind, "effect owner unknown, skipping");
            return state;
        };

        match (effect.kind, &effect.value) {
            (EffectKind::Damage, EffectValue::Amount(amount)) => {
                if let Some(c) = state.competitor_mut(&target) {
                    c.loadout.health = c.loadout.health.saturating_sub(*amount);
                }
            }

            (EffectKind::Heal, EffectValue::Amount(amount)) => {
                if let Some(c) = state.competitor_mut(&target) {
                    c.loadout.health = c.loadout.health.saturating_add(*amount);
                }
            }

            (EffectKind::SpeedModify, EffectValue::Amount(delta)) => {
                if let Some(c) = state.competitor_mut(&target) {
                    c.loadout.speed = c.loadout.speed.saturating_add(*delta).max(0);
                }
            }

            (EffectKind::RemoveItem, EffectValue::Instance(instance)) => {
                if let Some(c) = state.competitor_mut(&target) {
                    c.loadout.remove_item(*instance);
                }
            }

            (EffectKind::RemoveListener, EffectValue::Instance(instance)) => {
                let removed = state.remove_listeners(*instance);
                tracing::trace!(%instance, removed, "listeners removed");
            }

            (EffectKind::AdvanceTurn, _) => {
                state.turn_number += 1;
            }

            (EffectKind::AddStatusEffect, EffectValue::Status(status)) => {
                let key = state.alloc_listener_key();
                let instance = state.alloc_instance();
                state.push_listener(Listener::status(key, instance, target, (**status).clone()));
            }

            (kind, value) => {
                tracing::debug!(%kind, ?value, "effect payload does not match kind, skipping");
            }
        }

        state
    }
}
