//! Event processing.
//!
//! Every top-level operation turns into one or more `GameEvent`s. Each event
//! is offered to the listeners in precedence order; whatever a listener
//! emits is resolved, one event at a time, against the listeners after it.
//! An effect that outlives the whole chain reaches its processor.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::core::{Competitor, EngineConfig, EngineState, InstanceId, PlayerId};
use crate::effects::{Effect, EffectProcessor};
use crate::items::ItemCatalog;
use crate::triggers::{GameEvent, LifecyclePhase, Listener, ListenerKey};

use super::error::EngineError;
use super::log::{EngineSnapshot, EventLog, LogEntry};

/// Effect-resolution engine for one match.
///
/// Cloning is cheap: state is persistent and the catalog is shared.
#[derive(Clone, Debug)]
pub struct Engine {
    state: EngineState,
    catalog: Arc<ItemCatalog>,
    config: EngineConfig,
    log: EventLog,
    truncations: u64,
}

impl Engine {
    /// Build an engine for two competitors.
    ///
    /// Listener order: player one's passives, player two's passives,
    /// fatigue for each, then the turn counter for each.
    pub fn new(
        player_one: Competitor,
        player_two: Competitor,
        catalog: Arc<ItemCatalog>,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        if player_one.id == player_two.id {
            return Err(EngineError::DuplicatePlayer {
                player: player_one.id,
            });
        }

        let mut seen = FxHashSet::default();
        for item in player_one.loadout.items.iter().chain(player_two.loadout.items.iter()) {
            if !seen.insert(item.instance_id) {
                return Err(EngineError::DuplicateInstance {
                    instance: item.instance_id,
                });
            }
        }

        let mut state = EngineState::new(player_one, player_two);

        for competitor in [state.player_one.clone(), state.player_two.clone()] {
            for item in competitor.loadout.items.iter() {
                let def = catalog.get(&item.id)?;
                for passive in &def.passive_effects {
                    let key = state.alloc_listener_key();
                    state.push_listener(Listener::passive(
                        key,
                        item,
                        competitor.id.clone(),
                        passive.clone(),
                    ));
                }
            }
        }

        let ids = [state.player_one.id.clone(), state.player_two.id.clone()];
        for id in &ids {
            let (key, instance) = (state.alloc_listener_key(), state.alloc_instance());
            state.push_listener(Listener::fatigue(key, instance, id.clone(), config.fatigue_damage));
        }
        for id in &ids {
            let (key, instance) = (state.alloc_listener_key(), state.alloc_instance());
            state.push_listener(Listener::advance_turn(key, instance, id.clone()));
        }

        tracing::debug!(
            player_one = %ids[0],
            player_two = %ids[1],
            listeners = state.listeners.len(),
            "engine created"
        );

        Ok(Self {
            state,
            catalog,
            config,
            log: EventLog::new(),
            truncations: 0,
        })
    }

    // === Top-level operations ===

    /// The match begins with `first` to act.
    pub fn process_game_start(&mut self, first: &PlayerId) -> Result<(), EngineError> {
        self.lifecycle(first, LifecyclePhase::GameStart)
    }

    pub fn process_turn_start(&mut self, player: &PlayerId) -> Result<(), EngineError> {
        self.lifecycle(player, LifecyclePhase::OnTurnStart)
    }

    pub fn process_end_of_turn(&mut self, player: &PlayerId) -> Result<(), EngineError> {
        self.lifecycle(player, LifecyclePhase::OnTurnEnd)
    }

    /// Play a held item.
    ///
    /// Emits `on_play`, then the item's removal (the item is consumed no
    /// matter how listeners reacted to the play), then each when-played
    /// effect in order.
    pub fn play(&mut self, player: &PlayerId, instance: InstanceId) -> Result<(), EngineError> {
        let competitor = self.known(player)?;
        let item = competitor
            .loadout
            .item(instance)
            .cloned()
            .ok_or_else(|| EngineError::ItemNotHeld {
                player: player.clone(),
                instance,
            })?;

        let catalog = Arc::clone(&self.catalog);
        let def = catalog.get(&item.id)?;

        tracing::debug!(%player, item = %item, "play");

        self.emit(GameEvent::on_play(player.clone(), item));
        self.emit(GameEvent::effect(Effect::remove_item(instance), player.clone()));
        for effect in &def.when_played {
            self.emit(GameEvent::effect(effect.clone(), player.clone()));
        }
        Ok(())
    }

    /// `loser` gives up. The other competitor wins.
    ///
    /// Returns false if the game was already over.
    pub fn concede(&mut self, loser: &PlayerId) -> Result<bool, EngineError> {
        self.known(loser)?;
        if !self.state.concede(loser) {
            return Ok(false);
        }

        tracing::info!(%loser, "conceded");
        self.log.push(LogEntry::StateChange(EngineSnapshot::from(&self.state)));
        self.log.push(LogEntry::Event(GameEvent::lifecycle(
            loser.clone(),
            LifecyclePhase::GameOver,
        )));
        Ok(true)
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<ItemCatalog> {
        &self.catalog
    }

    #[must_use]
    pub fn competitor(&self, id: &PlayerId) -> Option<&Competitor> {
        self.state.competitor(id)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    #[must_use]
    pub fn winner(&self) -> Option<&PlayerId> {
        self.state.winner_id.as_ref()
    }

    /// How many times propagation hit the depth limit.
    #[must_use]
    pub fn truncations(&self) -> u64 {
        self.truncations
    }

    /// Take the replay log, leaving it empty.
    pub fn drain_log(&mut self) -> Vec<LogEntry> {
        self.log.drain()
    }

    // === Propagation ===

    fn known(&self, player: &PlayerId) -> Result<&Competitor, EngineError> {
        self.state
            .competitor(player)
            .ok_or_else(|| EngineError::UnknownPlayer {
                player: player.clone(),
            })
    }

    fn lifecycle(&mut self, player: &PlayerId, phase: LifecyclePhase) -> Result<(), EngineError> {
        self.known(player)?;
        tracing::debug!(%player, ?phase, "lifecycle");
        self.emit(GameEvent::lifecycle(player.clone(), phase));
        Ok(())
    }

    /// Log a top-level event and resolve it against the current listeners.
    fn emit(&mut self, event: GameEvent) {
        self.log.push(LogEntry::Event(event.clone()));
        let keys = self.state.listener_keys();
        let state = self.state.clone();
        self.state = self.process_event(state, event, &keys, 0);
    }

    fn process_event(
        &mut self,
        mut state: EngineState,
        event: GameEvent,
        keys: &[ListenerKey],
        depth: usize,
    ) -> EngineState {
        if state.game_over {
            return state;
        }

        if depth > self.config.max_depth {
            tracing::warn!(depth, ?event, "listener chain too deep, dropping event");
            self.truncations += 1;
            self.log.push(LogEntry::Truncated { depth });
            return state;
        }

        let mut rest = keys;
        while let Some((&key, tail)) = rest.split_first() {
            rest = tail;

            // Removed since the snapshot was taken
            let Some(listener) = state.listener(key) else {
                continue;
            };
            let mut listener = listener.clone();

            let outputs = listener.handle(&event, &state);
            tracing::trace!(
                listener = ?listener.key,
                owner = %listener.owner_id,
                outputs = outputs.len(),
                "listener consulted"
            );
            state.replace_listener(listener);

            for output in outputs {
                state = self.process_event(state, output, rest, depth + 1);
            }
            return state;
        }

        if let GameEvent::Effect { effect, player_id } = &event {
            tracing::debug!(owner = %player_id, kind = %effect.kind, "effect processed");
            state = EffectProcessor::process(state, effect, player_id);
            self.log.push(LogEntry::StateChange(EngineSnapshot::from(&state)));

            if state.settle_game_over() {
                tracing::info!(winner = ?state.winner_id, "game over");
                self.log.push(LogEntry::Event(GameEvent::lifecycle(
                    player_id.clone(),
                    LifecyclePhase::GameOver,
                )));
            }
        }

        state
    }
}
