//! Engine and board state.
//!
//! ## EngineState
//!
//! Authoritative rules state owned by the engine:
//! - Both competitor records
//! - The ordered listener list (order is the reaction precedence)
//! - Terminal flag and winner
//!
//! Every transition takes an `EngineState` by value and returns the next
//! one. `im` persistent vectors keep those copies O(1).
//!
//! ## GameState
//!
//! The UI-facing view assembled by the board: loadouts from one
//! competitor's perspective, turn information and action history.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::GameAction;
use super::entity::{InstanceAllocator, InstanceId};
use super::player::{Competitor, PlayerId};
use crate::effects::Target;
use crate::schedule::TurnEntry;
use crate::triggers::{Listener, ListenerKey};

/// Authoritative engine state.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineState {
    pub player_one: Competitor,
    pub player_two: Competitor,

    /// Active listeners in precedence order. Append-only except for removal.
    pub listeners: Vector<Listener>,

    pub game_over: bool,
    pub winner_id: Option<PlayerId>,

    /// Incremented by every processed `advance_turn` effect.
    pub turn_number: u32,

    instances: InstanceAllocator,
    next_listener_key: u64,
}

impl EngineState {
    /// Create a state with no listeners.
    ///
    /// New instance ids are allocated past every item either competitor holds.
    #[must_use]
    pub fn new(player_one: Competitor, player_two: Competitor) -> Self {
        let held = player_one
            .loadout
            .items
            .iter()
            .chain(player_two.loadout.items.iter())
            .map(|item| item.instance_id);
        let instances = InstanceAllocator::after(held);

        Self {
            player_one,
            player_two,
            listeners: Vector::new(),
            game_over: false,
            winner_id: None,
            turn_number: 0,
            instances,
            next_listener_key: 0,
        }
    }

    // === Competitors ===

    #[must_use]
    pub fn competitor(&self, id: &PlayerId) -> Option<&Competitor> {
        if self.player_one.id == *id {
            Some(&self.player_one)
        } else if self.player_two.id == *id {
            Some(&self.player_two)
        } else {
            None
        }
    }

    pub fn competitor_mut(&mut self, id: &PlayerId) -> Option<&mut Competitor> {
        if self.player_one.id == *id {
            Some(&mut self.player_one)
        } else if self.player_two.id == *id {
            Some(&mut self.player_two)
        } else {
            None
        }
    }

    /// The competitor facing `id`.
    #[must_use]
    pub fn opponent(&self, id: &PlayerId) -> Option<&Competitor> {
        if self.player_one.id == *id {
            Some(&self.player_two)
        } else if self.player_two.id == *id {
            Some(&self.player_one)
        } else {
            None
        }
    }

    /// Resolve an effect target relative to the effect's owner.
    ///
    /// A missing target means the owner.
    #[must_use]
    pub fn resolve_target(&self, owner: &PlayerId, target: Option<Target>) -> Option<PlayerId> {
        match target.unwrap_or(Target::SelfTarget) {
            Target::SelfTarget => self.competitor(owner).map(|c| c.id.clone()),
            Target::Enemy => self.opponent(owner).map(|c| c.id.clone()),
        }
    }

    // === Listeners ===

    /// Allocate an instance id nobody holds yet.
    pub fn alloc_instance(&mut self) -> InstanceId {
        self.instances.alloc()
    }

    /// Allocate a unique listener key.
    pub fn alloc_listener_key(&mut self) -> ListenerKey {
        let key = ListenerKey(self.next_listener_key);
        self.next_listener_key += 1;
        key
    }

    /// Append a listener at the end of the precedence order.
    ///
    /// Keys ascend along the list. A listener whose key does not sort after
    /// the current last one gets a fresh key. Returns the key it was stored
    /// under.
    pub fn push_listener(&mut self, mut listener: Listener) -> ListenerKey {
        if self.listeners.last().is_some_and(|last| last.key >= listener.key) {
            listener.key = self.alloc_listener_key();
        }
        self.next_listener_key = self.next_listener_key.max(listener.key.0.saturating_add(1));

        let key = listener.key;
        self.listeners.push_back(listener);
        key
    }

    /// Position of a listener in precedence order.
    ///
    /// Keys ascend along the list, so this is a binary search.
    #[must_use]
    pub fn listener_position(&self, key: ListenerKey) -> Option<usize> {
        self.listeners.binary_search_by(|l| l.key.cmp(&key)).ok()
    }

    /// Look up a listener by key.
    #[must_use]
    pub fn listener(&self, key: ListenerKey) -> Option<&Listener> {
        self.listener_position(key).map(|pos| &self.listeners[pos])
    }

    /// Replace a listener in place, keeping its position.
    ///
    /// Returns false if no listener has that key any more.
    pub fn replace_listener(&mut self, listener: Listener) -> bool {
        match self.listener_position(listener.key) {
            Some(pos) => {
                self.listeners.set(pos, listener);
                true
            }
            None => false,
        }
    }

    /// Remove every listener with the given instance id. Idempotent.
    ///
    /// Returns how many were removed.
    pub fn remove_listeners(&mut self, instance: InstanceId) -> usize {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.instance_id != instance);
        before - self.listeners.len()
    }

    /// Snapshot of listener keys in precedence order.
    #[must_use]
    pub fn listener_keys(&self) -> Vec<ListenerKey> {
        self.listeners.iter().map(|l| l.key).collect()
    }

    // === Game Over ===

    /// Flip `game_over` if either competitor is out of health.
    ///
    /// Returns true only on the transition into game over.
    pub fn settle_game_over(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let one_down = self.player_one.is_defeated();
        let two_down = self.player_two.is_defeated();

        self.winner_id = match (one_down, two_down) {
            (false, false) => return false,
            (true, false) => Some(self.player_two.id.clone()),
            (false, true) => Some(self.player_one.id.clone()),
            (true, true) => None,
        };
        self.game_over = true;
        true
    }

    /// End the game with `loser` conceding. No-op once the game is over.
    pub fn concede(&mut self, loser: &PlayerId) -> bool {
        if self.game_over {
            return false;
        }
        let Some(winner) = self.opponent(loser).map(|c| c.id.clone()) else {
            return false;
        };
        self.winner_id = Some(winner);
        self.game_over = true;
        true
    }
}

/// Turn information exposed to callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnInfo {
    pub current_player_id: PlayerId,
    pub next_player_id: PlayerId,
    /// Upcoming turns, current first.
    pub turn_queue: Vec<TurnEntry>,
}

/// UI-facing game state from one competitor's perspective.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Competitor,
    pub opponent: Competitor,
    pub turn_info: TurnInfo,
    pub is_game_over: bool,
    pub winner_id: Option<PlayerId>,
    pub action_history: Vec<GameAction>,
}
