//! Live listeners and the reaction contract.
//!
//! A listener is a standing rule built from a `StatusEffect`. The engine
//! hands it each event in precedence order; `handle` returns the events that
//! continue down the chain in its place.

use smallvec::{smallvec, SmallVec};

use crate::core::{EngineState, InstanceId, PlayerId};
use crate::effects::Effect;
use crate::items::Item;

use super::condition::{Condition, ConditionContext, ConditionEvaluator};
use super::duration::DurationTracker;
use super::event::GameEvent;
use super::status::{StatusEffect, StatusKind};

/// Events emitted by one `handle` call.
pub type Reactions = SmallVec<[GameEvent; 4]>;

/// Unique handle of a listener within one engine.
///
/// Several listeners may share an instance id (an item with two passives);
/// the key tells them apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerKey(pub u64);

/// Fixed reaction behaviour, chosen when the listener is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reaction {
    Default,
    Negate,
    Invert,
    ReactiveRemoval,
    /// Built-in damage for ending a turn empty-handed.
    Fatigue,
    /// Built-in turn counter.
    AdvanceTurn,
}

impl From<StatusKind> for Reaction {
    fn from(kind: StatusKind) -> Self {
        match kind {
            StatusKind::Default => Reaction::Default,
            StatusKind::Negate => Reaction::Negate,
            StatusKind::Invert => Reaction::Invert,
            StatusKind::ReactiveRemoval => Reaction::ReactiveRemoval,
        }
    }
}

/// A standing reactive rule owned by one competitor.
#[derive(Clone, Debug, PartialEq)]
pub struct Listener {
    pub key: ListenerKey,
    pub instance_id: InstanceId,
    pub owner_id: PlayerId,
    pub effect: StatusEffect,
    pub reaction: Reaction,
    pub tracker: DurationTracker,
}

impl Listener {
    // === Construction ===

    /// Passive effect of a held item. Lives until the item is removed.
    #[must_use]
    pub fn passive(key: ListenerKey, item: &Item, owner_id: PlayerId, effect: StatusEffect) -> Self {
        Self {
            key,
            instance_id: item.instance_id,
            owner_id,
            reaction: effect.kind.into(),
            effect,
            tracker: DurationTracker::item_bound(item.instance_id),
        }
    }

    /// Status added by an effect. Lives as long as its declared duration.
    #[must_use]
    pub fn status(key: ListenerKey, instance_id: InstanceId, owner_id: PlayerId, effect: StatusEffect) -> Self {
        Self {
            key,
            instance_id,
            owner_id,
            reaction: effect.kind.into(),
            tracker: effect.duration.unwrap_or_default().into(),
            effect,
        }
    }

    /// Damages the owner when they end a turn holding nothing.
    #[must_use]
    pub fn fatigue(key: ListenerKey, instance_id: InstanceId, owner_id: PlayerId, damage: i64) -> Self {
        let effect = StatusEffect::new(
            Condition::OnTurnEnd.and(Condition::HasNoItems),
            vec![Effect::damage(damage).to_self()],
        );
        Self::internal(key, instance_id, owner_id, effect, Reaction::Fatigue)
    }

    /// Counts the owner's completed turns.
    #[must_use]
    pub fn advance_turn(key: ListenerKey, instance_id: InstanceId, owner_id: PlayerId) -> Self {
        let effect = StatusEffect::new(Condition::OnTurnEnd, vec![Effect::advance_turn()]);
        Self::internal(key, instance_id, owner_id, effect, Reaction::AdvanceTurn)
    }

    fn internal(
        key: ListenerKey,
        instance_id: InstanceId,
        owner_id: PlayerId,
        effect: StatusEffect,
        reaction: Reaction,
    ) -> Self {
        Self {
            key,
            instance_id,
            owner_id,
            effect,
            reaction,
            tracker: DurationTracker::Permanent,
        }
    }

    // === Reaction ===

    /// Does this listener react to `event` right now?
    #[must_use]
    pub fn should_react(&self, event: &GameEvent, state: &EngineState) -> bool {
        if self.tracker.is_expired() {
            return false;
        }
        let ctx = ConditionContext::new(event, &self.owner_id, state);
        ConditionEvaluator::evaluate(&self.effect.condition, &ctx)
    }

    /// Observe `event` and return what continues down the chain.
    ///
    /// A listener that does not react passes the event through unchanged.
    /// Either way the duration sees the event, and a `remove_listener` for
    /// this listener's instance is appended (once) when its item is being
    /// removed or its duration has run out.
    pub fn handle(&mut self, event: &GameEvent, state: &EngineState) -> Reactions {
        let mut out = if self.should_react(event, state) {
            let reacted = self.react(event);
            self.tracker.on_handle();
            reacted
        } else {
            smallvec![event.clone()]
        };

        self.tracker.update(event, &self.owner_id);
        self.append_own_removal(&mut out);
        out
    }

    fn react(&self, event: &GameEvent) -> Reactions {
        match self.reaction {
            Reaction::Negate => SmallVec::new(),

            Reaction::Invert => match event.as_effect().and_then(Effect::inverted) {
                Some(inverted) => smallvec![GameEvent::effect(inverted, event.player_id().clone())],
                None => smallvec![event.clone()],
            },

            Reaction::ReactiveRemoval => smallvec![
                event.clone(),
                GameEvent::effect(Effect::remove_item(self.instance_id), self.owner_id.clone()),
            ],

            Reaction::Default | Reaction::Fatigue | Reaction::AdvanceTurn => {
                if self.effect.condition.is_intercept() && event.as_effect().is_some() {
                    // Intercepted: the action stands in for the event
                    let owner = event.player_id();
                    self.effect
                        .action
                        .iter()
                        .map(|e| GameEvent::effect(e.clone(), owner.clone()))
                        .collect()
                } else {
                    let mut out: Reactions = smallvec![event.clone()];
                    out.extend(
                        self.effect
                            .action
                            .iter()
                            .map(|e| GameEvent::effect(e.clone(), self.owner_id.clone())),
                    );
                    out
                }
            }
        }
    }

    fn append_own_removal(&self, out: &mut Reactions) {
        let instance = self.instance_id;
        let already_removed = |out: &Reactions| {
            out.iter()
                .any(|e| e.as_effect().is_some_and(|f| f.removes_listener(instance)))
        };

        let item_leaving = out
            .iter()
            .any(|e| e.as_effect().is_some_and(|f| f.removes_item(instance)));
        let ran_out = self.tracker.is_expired() && !self.tracker.is_item_bound();

        if (item_leaving || ran_out) && !already_removed(out) {
            out.push(GameEvent::effect(
                Effect::remove_listener(instance),
                self.owner_id.clone(),
            ));
        }
    }
}
