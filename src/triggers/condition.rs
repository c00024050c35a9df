//! Listener conditions.
//!
//! A condition decides whether a listener reacts to an event. It is
//! evaluated from the point of view of the *reacting* competitor (the
//! listener's owner) against the live engine state.

use serde::{Deserialize, Serialize};

use crate::core::{EngineState, PlayerId};
use crate::effects::{EffectKind, Target};

use super::event::{GameEvent, LifecyclePhase};

/// Declarative listener condition.
///
/// Serialized as `{ "type": ..., "value"?: ..., "sub_conditions"?: [...] }`.
/// Unrecognized types deserialize to `Unknown`, which never matches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    // === Interception ===

    /// An effect aimed at the reacting competitor, before it resolves.
    BeforeEffect {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<EffectKind>,
    },

    /// An effect aimed at the reacting competitor, after it resolves.
    AfterEffect {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<EffectKind>,
    },

    // === Triggers ===

    /// The *other* competitor played an item.
    OnPlay,

    /// The reacting competitor's turn ended.
    OnTurnEnd,

    /// The reacting competitor holds no items (live state, not the event).
    HasNoItems,

    // === Combinators ===

    And {
        #[serde(default)]
        sub_conditions: Vec<Condition>,
    },

    Or {
        #[serde(default)]
        sub_conditions: Vec<Condition>,
    },

    /// Negates the conjunction of its sub-conditions. With none, negates
    /// "never", so it always matches.
    Not {
        #[serde(default)]
        sub_conditions: Vec<Condition>,
    },

    #[serde(other)]
    Unknown,
}

impl Condition {
    /// Intercept any effect kind aimed at the reacting competitor.
    pub fn before_effect(kind: Option<EffectKind>) -> Self {
        Self::BeforeEffect { value: kind }
    }

    pub fn after_effect(kind: Option<EffectKind>) -> Self {
        Self::AfterEffect { value: kind }
    }

    pub fn all(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::And {
            sub_conditions: conditions.into_iter().collect(),
        }
    }

    pub fn any(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::Or {
            sub_conditions: conditions.into_iter().collect(),
        }
    }

    pub fn negate(self) -> Self {
        Self::Not {
            sub_conditions: vec![self],
        }
    }

    /// Add another condition with AND.
    pub fn and(self, other: Condition) -> Self {
        match self {
            Self::And { mut sub_conditions } => {
                sub_conditions.push(other);
                Self::And { sub_conditions }
            }
            _ => Self::all([self, other]),
        }
    }

    /// Add another condition with OR.
    pub fn or(self, other: Condition) -> Self {
        match self {
            Self::Or { mut sub_conditions } => {
                sub_conditions.push(other);
                Self::Or { sub_conditions }
            }
            _ => Self::any([self, other]),
        }
    }

    /// Root is `BeforeEffect` or `AfterEffect`.
    ///
    /// Default reactions replace the event instead of appending to it when
    /// this holds.
    #[must_use]
    pub fn is_intercept(&self) -> bool {
        matches!(self, Self::BeforeEffect { .. } | Self::AfterEffect { .. })
    }
}

/// Context for evaluating a condition.
pub struct ConditionContext<'a> {
    pub event: &'a GameEvent,
    /// Owner of the listener being consulted.
    pub reacting_id: &'a PlayerId,
    pub state: &'a EngineState,
}

impl<'a> ConditionContext<'a> {
    pub fn new(event: &'a GameEvent, reacting_id: &'a PlayerId, state: &'a EngineState) -> Self {
        Self {
            event,
            reacting_id,
            state,
        }
    }
}

/// Evaluator for listener conditions.
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// Check if a condition is satisfied.
    pub fn evaluate(condition: &Condition, ctx: &ConditionContext) -> bool {
        match condition {
            Condition::BeforeEffect { value } | Condition::AfterEffect { value } => {
                Self::effect_aimed_at_reacting(*value, ctx)
            }

            Condition::OnPlay => matches!(
                ctx.event,
                GameEvent::OnPlay { player_id, .. } if player_id != ctx.reacting_id
            ),

            Condition::OnTurnEnd => ctx
                .event
                .is_phase_for(LifecyclePhase::OnTurnEnd, ctx.reacting_id),

            Condition::HasNoItems => ctx
                .state
                .competitor(ctx.reacting_id)
                .is_some_and(|c| c.loadout.items.is_empty()),

            Condition::And { sub_conditions } => {
                sub_conditions.iter().all(|c| Self::evaluate(c, ctx))
            }

            Condition::Or { sub_conditions } => {
                sub_conditions.iter().any(|c| Self::evaluate(c, ctx))
            }

            Condition::Not { sub_conditions } => {
                let inner = !sub_conditions.is_empty()
                    && sub_conditions.iter().all(|c| Self::evaluate(c, ctx));
                !inner
            }

            Condition::Unknown => false,
        }
    }

    fn effect_aimed_at_reacting(filter: Option<EffectKind>, ctx: &ConditionContext) -> bool {
        let GameEvent::Effect { effect, player_id } = ctx.event else {
            return false;
        };

        if filter.is_some_and(|kind| kind != effect.kind) {
            return false;
        }

        match effect.target.unwrap_or(Target::SelfTarget) {
            Target::SelfTarget => player_id == ctx.reacting_id,
            Target::Enemy => player_id != ctx.reacting_id,
        }
    }
}
