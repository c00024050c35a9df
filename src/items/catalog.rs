//! Item catalog for behaviour lookup.
//!
//! The `ItemCatalog` maps item ids to their definitions. Every item a
//! competitor holds must resolve here; a miss is a content bug and is
//! reported as [`CatalogError::UnknownItem`].

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::definition::{Genre, ItemDefinition, ItemId};
use super::instance::Item;
use crate::core::InstanceAllocator;
use crate::effects::{Effect, EffectKind};
use crate::triggers::{Condition, Duration, StatusEffect, StatusKind};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("item {item} is not in the catalog")]
    UnknownItem { item: ItemId },

    #[error("item {item} is already registered")]
    DuplicateItem { item: ItemId },
}

/// Registry of item definitions.
///
/// ## Example
///
/// ```
/// use duel_engine::core::InstanceAllocator;
/// use duel_engine::items::{ItemCatalog, ItemId};
///
/// let catalog = ItemCatalog::standard();
/// let mut alloc = InstanceAllocator::new();
///
/// let punch = catalog.instantiate(&ItemId::new("punch"), &mut alloc).unwrap();
/// assert_eq!(punch.instance_id.raw(), 0);
/// assert!(catalog.get(&ItemId::new("nonsense")).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    items: FxHashMap<ItemId, ItemDefinition>,
}

impl ItemCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate ids.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ItemDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for def in definitions {
            catalog.register(def)?;
        }
        Ok(catalog)
    }

    /// Register a definition.
    pub fn register(&mut self, definition: ItemDefinition) -> Result<(), CatalogError> {
        if self.items.contains_key(&definition.id) {
            return Err(CatalogError::DuplicateItem {
                item: definition.id,
            });
        }
        self.items.insert(definition.id.clone(), definition);
        Ok(())
    }

    /// Look up a definition.
    pub fn get(&self, id: &ItemId) -> Result<&ItemDefinition, CatalogError> {
        self.items
            .get(id)
            .ok_or_else(|| CatalogError::UnknownItem { item: id.clone() })
    }

    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item ids, sorted for deterministic iteration.
    #[must_use]
    pub fn ids(&self) -> Vec<&ItemId> {
        let mut ids: Vec<_> = self.items.keys().collect();
        ids.sort();
        ids
    }

    /// Create a held copy of `id` with a fresh instance id.
    pub fn instantiate(
        &self,
        id: &ItemId,
        instances: &mut InstanceAllocator,
    ) -> Result<Item, CatalogError> {
        let def = self.get(id)?;
        Ok(Item::new(def.id.clone(), instances.alloc(), def.genre))
    }

    /// Instantiate a hand of items, in order.
    pub fn hand<I>(&self, ids: I, instances: &mut InstanceAllocator) -> Result<Vec<Item>, CatalogError>
    where
        I: IntoIterator,
        I::Item: Into<ItemId>,
    {
        ids.into_iter()
            .map(|id| self.instantiate(&id.into(), instances))
            .collect()
    }

    /// Built-in content.
    ///
    /// | Item | Behaviour |
    /// |---|---|
    /// | `punch` | 5 damage to the enemy |
    /// | `pass` | nothing |
    /// | `bandage` | heal self 4 |
    /// | `adrenaline` | speed +3 to self |
    /// | `caltrops` | speed -2 to the enemy |
    /// | `shield` | negate the next damage aimed at self |
    /// | `mirror` | invert the next damage aimed at self |
    /// | `poison` | enemy takes 2 at each of their next 3 turn ends |
    /// | `buckler` | held: breaks when its holder is hit |
    /// | `thorns` | held: 1 damage back whenever the enemy plays |
    #[must_use]
    pub fn standard() -> Self {
        let on_damage = || Condition::before_effect(Some(EffectKind::Damage));

        let definitions = [
            ItemDefinition::new("punch", "Punch", Genre::Weapon)
                .with_effect(Effect::damage(5).to_enemy()),
            ItemDefinition::new("pass", "Pass", Genre::Utility),
            ItemDefinition::new("bandage", "Bandage", Genre::Consumable)
                .with_effect(Effect::heal(4).to_self()),
            ItemDefinition::new("adrenaline", "Adrenaline", Genre::Consumable)
                .with_effect(Effect::speed(3).to_self()),
            ItemDefinition::new("caltrops", "Caltrops", Genre::Utility)
                .with_effect(Effect::speed(-2).to_enemy()),
            ItemDefinition::new("shield", "Shield", Genre::Armor).with_effect(
                Effect::add_status(
                    StatusEffect::negate(on_damage()).with_duration(Duration::Charges(1)),
                )
                .to_self(),
            ),
            ItemDefinition::new("mirror", "Mirror", Genre::Trinket).with_effect(
                Effect::add_status(
                    StatusEffect::invert(on_damage()).with_duration(Duration::Charges(1)),
                )
                .to_self(),
            ),
            ItemDefinition::new("poison", "Poison", Genre::Consumable).with_effect(
                Effect::add_status(
                    StatusEffect::new(Condition::OnTurnEnd, vec![Effect::damage(2).to_self()])
                        .with_duration(Duration::Turns(3)),
                )
                .to_enemy(),
            ),
            ItemDefinition::new("buckler", "Buckler", Genre::Armor).with_passive(
                StatusEffect::new(Condition::after_effect(Some(EffectKind::Damage)), Vec::new())
                    .with_kind(StatusKind::ReactiveRemoval),
            ),
            ItemDefinition::new("thorns", "Thorns", Genre::Trinket).with_passive(
                StatusEffect::new(Condition::OnPlay, vec![Effect::damage(1).to_enemy()]),
            ),
        ];

        let mut catalog = Self::new();
        for def in definitions {
            catalog.items.insert(def.id.clone(), def);
        }
        catalog
    }
}
