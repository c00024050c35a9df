//! Effect definitions.
//!
//! An `Effect` is an atomic state mutation request. It travels through the
//! listener chain inside a `GameEvent::Effect` and, if nothing cancels it,
//! reaches a terminal processor.

use serde::{Deserialize, Serialize};

use crate::core::InstanceId;
use crate::triggers::StatusEffect;

/// The primitive mutation an effect requests.
///
/// ## Competitor Stats
///
/// - `Damage`: subtract from health (negative damage heals)
/// - `Heal`: add to health
/// - `SpeedModify`: add to speed (clamped at zero)
///
/// ## Bookkeeping
///
/// - `RemoveItem`: drop a held instance
/// - `RemoveListener`: drop every listener with an instance id
/// - `AdvanceTurn`: count a completed turn
/// - `AddStatusEffect`: attach a new listener to a competitor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    Damage,
    Heal,
    SpeedModify,
    RemoveItem,
    RemoveListener,
    AdvanceTurn,
    AddStatusEffect,
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EffectKind::Damage => "damage",
            EffectKind::Heal => "heal",
            EffectKind::SpeedModify => "speed_modify",
            EffectKind::RemoveItem => "remove_item",
            EffectKind::RemoveListener => "remove_listener",
            EffectKind::AdvanceTurn => "advance_turn",
            EffectKind::AddStatusEffect => "add_status_effect",
        };
        f.write_str(name)
    }
}

/// Who an effect lands on, relative to the competitor that owns the event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    #[serde(rename = "self")]
    SelfTarget,
    Enemy,
}

/// Payload of an effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectValue {
    Amount(i64),
    Instance(InstanceId),
    Status(Box<StatusEffect>),
}

/// An atomic effect.
///
/// ## Example
///
/// ```
/// use duel_engine::effects::{Effect, EffectKind, Target};
///
/// let punch = Effect::damage(5).to_enemy();
/// assert_eq!(punch.kind, EffectKind::Damage);
/// assert_eq!(punch.amount(), Some(5));
/// assert_eq!(punch.target, Some(Target::Enemy));
///
/// // Inverting flips the sign, so damage becomes healing.
/// assert_eq!(punch.inverted().map(|e| e.amount()), Some(Some(-5)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    pub value: EffectValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
}

impl Effect {
    /// Create an effect with no explicit target.
    #[must_use]
    pub fn new(kind: EffectKind, value: EffectValue) -> Self {
        Self {
            kind,
            value,
            target: None,
        }
    }

    pub fn damage(amount: i64) -> Self {
        Self::new(EffectKind::Damage, EffectValue::Amount(amount))
    }

    pub fn heal(amount: i64) -> Self {
        Self::new(EffectKind::Heal, EffectValue::Amount(amount))
    }

    pub fn speed(delta: i64) -> Self {
        Self::new(EffectKind::SpeedModify, EffectValue::Amount(delta))
    }

    /// Remove a held item. Always aimed at the owner.
    pub fn remove_item(instance: InstanceId) -> Self {
        Self::new(EffectKind::RemoveItem, EffectValue::Instance(instance)).to_self()
    }

    pub fn remove_listener(instance: InstanceId) -> Self {
        Self::new(EffectKind::RemoveListener, EffectValue::Instance(instance))
    }

    /// Zero-value turn bookkeeping.
    pub fn advance_turn() -> Self {
        Self::new(EffectKind::AdvanceTurn, EffectValue::Amount(0))
    }

    pub fn add_status(status: StatusEffect) -> Self {
        Self::new(EffectKind::AddStatusEffect, EffectValue::Status(Box::new(status)))
    }

    /// Aim at the owner (builder pattern).
    #[must_use]
    pub fn to_self(mut self) -> Self {
        self.target = Some(Target::SelfTarget);
        self
    }

    /// Aim at the owner's opponent (builder pattern).
    #[must_use]
    pub fn to_enemy(mut self) -> Self {
        self.target = Some(Target::Enemy);
        self
    }

    /// Numeric payload, if any.
    #[must_use]
    pub fn amount(&self) -> Option<i64> {
        match self.value {
            EffectValue::Amount(amount) => Some(amount),
            _ => None,
        }
    }

    /// Instance payload, if any.
    #[must_use]
    pub fn instance(&self) -> Option<InstanceId> {
        match self.value {
            EffectValue::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    /// Is this a `remove_item` for `instance`?
    #[must_use]
    pub fn removes_item(&self, instance: InstanceId) -> bool {
        self.kind == EffectKind::RemoveItem && self.instance() == Some(instance)
    }

    /// Is this a `remove_listener` for `instance`?
    #[must_use]
    pub fn removes_listener(&self, instance: InstanceId) -> bool {
        self.kind == EffectKind::RemoveListener && self.instance() == Some(instance)
    }

    /// Same effect with its numeric value negated.
    ///
    /// Returns None for non-numeric payloads.
    #[must_use]
    pub fn inverted(&self) -> Option<Self> {
        let amount = self.amount()?;
        Some(Self {
            kind: self.kind,
            value: EffectValue::Amount(amount.saturating_neg()),
            target: self.target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triggers::{Condition, Duration};

    #[test]
    fn test_constructors() {
        assert_eq!(Effect::damage(3).amount(), Some(3));
        assert_eq!(Effect::heal(2).kind, EffectKind::Heal);
        assert_eq!(Effect::speed(-1).amount(), Some(-1));
        assert_eq!(Effect::advance_turn().amount(), Some(0));
        assert_eq!(Effect::damage(1).target, None);
    }

    #[test]
    fn test_instance_predicates() {
        let remove = Effect::remove_item(InstanceId(4));
        assert!(remove.removes_item(InstanceId(4)));
        assert!(!remove.removes_item(InstanceId(5)));
        assert!(!remove.removes_listener(InstanceId(4)));
        assert_eq!(remove.target, Some(Target::SelfTarget));

        let drop = Effect::remove_listener(InstanceId(4));
        assert!(drop.removes_listener(InstanceId(4)));
        assert_eq!(drop.amount(), None);
    }

    #[test]
    fn test_inverted() {
        let heal = Effect::heal(4).to_self();
        let inverted = heal.inverted().unwrap();
        assert_eq!(inverted.amount(), Some(-4));
        assert_eq!(inverted.kind, EffectKind::Heal);
        assert_eq!(inverted.target, Some(Target::SelfTarget));

        assert!(Effect::remove_item(InstanceId(1)).inverted().is_none());

        let extreme = Effect::damage(i64::MIN).inverted().unwrap();
        assert_eq!(extreme.amount(), Some(i64::MAX));
    }

    #[test]
    fn test_effect_serialization() {
        let effect = Effect::add_status(
            StatusEffect::new(Condition::OnTurnEnd, vec![Effect::damage(2).to_self()])
                .with_duration(Duration::Turns(3)),
        )
        .to_enemy();

        let json = serde_json::to_string(&effect).unwrap();
        assert!(json.contains("\"enemy\""));
        let deserialized: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, deserialized);
    }

    #[test]
    fn test_self_target_serializes_as_self() {
        let json = serde_json::to_string(&Target::SelfTarget).unwrap();
        assert_eq!(json, "\"self\"");
    }
}
