//! The board: validated actions over one match.
//!
//! The board composes the engine and the turn scheduler. It is the only
//! surface a caller needs: actions go in, `GameState` comes out.
//!
//! ## States
//!
//! In progress until a competitor drops to zero health or surrenders, then
//! game over for good. Every action on a finished board is rejected.
//!
//! ## Lookahead
//!
//! `Board` is `Clone`. Engine state, history and catalog are persistent or
//! shared, so a clone is cheap and nothing done to it reaches the original.

use std::sync::Arc;

use im::Vector;

use crate::core::{
    ActionKind, BoardConfig, Competitor, GameAction, GameState, InstanceId, Loadout, PlayerId,
    TurnInfo,
};
use crate::engine::{Engine, LogEntry};
use crate::items::ItemCatalog;
use crate::schedule::TurnScheduler;

use super::error::BoardError;

#[derive(Clone, Debug)]
pub struct Board {
    engine: Engine,
    scheduler: TurnScheduler,
    history: Vector<GameAction>,
    config: BoardConfig,
}

impl Board {
    /// Set up a match and start the first turn.
    pub fn new(
        player_one: PlayerId,
        loadout_one: Loadout,
        player_two: PlayerId,
        loadout_two: Loadout,
        catalog: Arc<ItemCatalog>,
        config: BoardConfig,
    ) -> Result<Self, BoardError> {
        let speeds = [loadout_one.speed, loadout_two.speed];
        let mut engine = Engine::new(
            Competitor::new(player_one.clone(), loadout_one),
            Competitor::new(player_two.clone(), loadout_two),
            catalog,
            config.engine.clone(),
        )?;

        let scheduler = TurnScheduler::new(
            [player_one, player_two],
            speeds,
            config.first_player,
            config.turn_window,
        );

        let first = scheduler.current().player_id.clone();
        engine.process_game_start(&first)?;
        engine.process_turn_start(&first)?;
        tracing::info!(%first, "match started");

        Ok(Self {
            engine,
            scheduler,
            history: Vector::new(),
            config,
        })
    }

    // === Actions ===

    /// Play a held item and end the turn.
    pub fn play_item(&mut self, player: &PlayerId, item: InstanceId) -> Result<GameState, BoardError> {
        self.check_turn(player)?;
        let holds = self
            .engine
            .competitor(player)
            .is_some_and(|c| c.loadout.holds(item));
        if !holds {
            return Err(BoardError::ItemNotHeld {
                player: player.clone(),
                instance: item,
            });
        }

        tracing::info!(%player, %item, "play item");
        self.engine.play(player, item)?;
        self.finish_turn(player)?;
        self.history.push_back(GameAction::play_item(player.clone(), item));
        self.game_state_for(player)
    }

    /// End the turn without playing.
    pub fn pass(&mut self, player: &PlayerId) -> Result<GameState, BoardError> {
        self.check_turn(player)?;

        tracing::info!(%player, "pass");
        self.finish_turn(player)?;
        self.history.push_back(GameAction::pass(player.clone()));
        self.game_state_for(player)
    }

    /// Give up. The other competitor wins.
    pub fn surrender(&mut self, player: &PlayerId) -> Result<GameState, BoardError> {
        self.check_turn(player)?;

        tracing::info!(%player, "surrender");
        self.engine.concede(player)?;
        self.history.push_back(GameAction::surrender(player.clone()));
        self.game_state_for(player)
    }

    /// Dispatch a `GameAction`.
    pub fn apply(&mut self, action: &GameAction) -> Result<GameState, BoardError> {
        match action.kind {
            ActionKind::PlayItem => {
                let item = action.item.ok_or_else(|| BoardError::MissingItem {
                    player: action.player_id.clone(),
                })?;
                self.play_item(&action.player_id, item)
            }
            ActionKind::Pass => self.pass(&action.player_id),
            ActionKind::Surrender => self.surrender(&action.player_id),
        }
    }

    /// Every action `player` may take now. Empty when it is not their turn.
    #[must_use]
    pub fn legal_actions(&self, player: &PlayerId) -> Vec<GameAction> {
        if self.check_turn(player).is_err() {
            return Vec::new();
        }

        let mut actions: Vec<GameAction> = self
            .engine
            .competitor(player)
            .map(|c| {
                c.loadout
                    .items
                    .iter()
                    .map(|item| GameAction::play_item(player.clone(), item.instance_id))
                    .collect()
            })
            .unwrap_or_default();
        actions.push(GameAction::pass(player.clone()));
        actions.push(GameAction::surrender(player.clone()));
        actions
    }

    fn check_turn(&self, player: &PlayerId) -> Result<(), BoardError> {
        if self.engine.is_game_over() {
            return Err(BoardError::GameOver);
        }
        if self.engine.competitor(player).is_none() {
            return Err(BoardError::UnknownPlayer {
                player: player.clone(),
            });
        }
        let current = self.current_player();
        if current != player {
            return Err(BoardError::NotYourTurn {
                player: player.clone(),
                current: current.clone(),
            });
        }
        Ok(())
    }

    fn finish_turn(&mut self, player: &PlayerId) -> Result<(), BoardError> {
        self.engine.process_end_of_turn(player)?;

        let speeds = self.speeds();
        if speeds != self.scheduler.speeds() {
            self.scheduler.recalculate(speeds);
        }

        if self.engine.is_game_over() {
            tracing::info!(winner = ?self.engine.winner(), "match over");
            return Ok(());
        }

        self.scheduler.advance();
        let next = self.current_player().clone();
        self.engine.process_turn_start(&next)?;
        Ok(())
    }

    // === Views ===

    /// Game state from player one's perspective.
    #[must_use]
    pub fn game_state(&self) -> GameState {
        let state = self.engine.state();
        self.view(&state.player_one, &state.player_two)
    }

    /// Game state from `player`'s perspective.
    pub fn game_state_for(&self, player: &PlayerId) -> Result<GameState, BoardError> {
        let state = self.engine.state();
        match (state.competitor(player), state.opponent(player)) {
            (Some(me), Some(them)) => Ok(self.view(me, them)),
            _ => Err(BoardError::UnknownPlayer {
                player: player.clone(),
            }),
        }
    }

    fn view(&self, player: &Competitor, opponent: &Competitor) -> GameState {
        GameState {
            player: player.clone(),
            opponent: opponent.clone(),
            turn_info: self.turn_info(),
            is_game_over: self.engine.is_game_over(),
            winner_id: self.engine.winner().cloned(),
            action_history: self.history.iter().cloned().collect(),
        }
    }

    #[must_use]
    pub fn turn_info(&self) -> TurnInfo {
        TurnInfo {
            current_player_id: self.scheduler.current().player_id.clone(),
            next_player_id: self.scheduler.upcoming().player_id.clone(),
            turn_queue: self.scheduler.queue().cloned().collect(),
        }
    }

    #[must_use]
    pub fn current_player(&self) -> &PlayerId {
        &self.scheduler.current().player_id
    }

    #[must_use]
    pub fn competitor(&self, player: &PlayerId) -> Option<&Competitor> {
        self.engine.competitor(player)
    }

    /// The other competitor's id.
    #[must_use]
    pub fn opponent_of(&self, player: &PlayerId) -> Option<&PlayerId> {
        self.engine.state().opponent(player).map(|c| &c.id)
    }

    #[must_use]
    pub fn players(&self) -> &[PlayerId; 2] {
        self.scheduler.players()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    #[must_use]
    pub fn winner(&self) -> Option<&PlayerId> {
        self.engine.winner()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<GameAction> {
        &self.history
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Take the engine's replay log.
    pub fn drain_log(&mut self) -> Vec<LogEntry> {
        self.engine.drain_log()
    }

    fn speeds(&self) -> [i64; 2] {
        let state = self.engine.state();
        [state.player_one.loadout.speed, state.player_two.loadout.speed]
    }
}
