//! Board integration tests.
//!
//! Full matches through the public board surface: turn order, validation,
//! game over, and cheap cloning for lookahead.

use std::sync::Arc;

use duel_engine::board::{Board, BoardError};
use duel_engine::core::{
    ActionKind, BoardConfig, FirstPlayer, InstanceAllocator, InstanceId, Loadout, PlayerId,
};
use duel_engine::engine::LogEntry;
use duel_engine::effects::Effect;
use duel_engine::items::{Genre, ItemCatalog, ItemDefinition};
use duel_engine::triggers::{GameEvent, LifecyclePhase};
use proptest::prelude::*;

fn alice() -> PlayerId {
    PlayerId::new("alice")
}

fn bob() -> PlayerId {
    PlayerId::new("bob")
}

/// Alice's items get instances first, then Bob's.
fn board(
    alice_loadout: (i64, i64, &[&str]),
    bob_loadout: (i64, i64, &[&str]),
    first: FirstPlayer,
) -> Board {
    let catalog = Arc::new(ItemCatalog::standard());
    let mut alloc = InstanceAllocator::new();
    let (ah, aspeed, aitems) = alice_loadout;
    let (bh, bspeed, bitems) = bob_loadout;
    let a = catalog.hand(aitems.iter().copied(), &mut alloc).unwrap();
    let b = catalog.hand(bitems.iter().copied(), &mut alloc).unwrap();

    Board::new(
        alice(),
        Loadout::new(ah, aspeed).with_items(a),
        bob(),
        Loadout::new(bh, bspeed).with_items(b),
        catalog,
        BoardConfig::default().with_first_player(first),
    )
    .unwrap()
}

// =============================================================================
// Turn Flow
// =============================================================================

/// Speed 10 against speed 1: play, consume the item, advance the queue.
///
/// The error accumulator gives the faster competitor ten of every eleven
/// turns, so after this play the turn advances to Alice's next entry
/// (`alice-2`) rather than handing over to Bob. Bob only gets the turn in
/// the equal-speed case below.
#[test]
fn test_speed_ten_against_one_play_scenario() {
    let mut board = board((100, 10, &["punch"]), (100, 1, &[]), FirstPlayer::Auto);
    assert_eq!(board.current_player(), &alice());

    let state = board.play_item(&alice(), InstanceId(0)).unwrap();

    assert_eq!(state.opponent.loadout.health, 95);
    assert!(state.player.loadout.items.is_empty(), "the played item is consumed");
    assert_eq!(state.player.loadout.health, 99, "fatigue for ending the turn empty-handed");
    assert_eq!(state.turn_info.current_player_id, alice(), "speed 10 keeps the turn against speed 1");
    assert_eq!(state.turn_info.turn_queue[0].turn_id.as_str(), "alice-2");
    assert_eq!(state.action_history.len(), 1);
}

/// Equal speeds alternate once the opener is fixed.
#[test]
fn test_equal_speeds_alternate() {
    let mut board = board((100, 1, &["punch"]), (100, 1, &["punch"]), FirstPlayer::PlayerOne);

    board.play_item(&alice(), InstanceId(0)).unwrap();
    assert_eq!(board.current_player(), &bob(), "equal speeds hand the turn over");

    let state = board.play_item(&bob(), InstanceId(1)).unwrap();
    assert_eq!(state.player.loadout.health, 95 - 1, "punched once, then fatigued");
    assert_eq!(board.current_player(), &alice());
}

/// Auto with equal speeds lets player two open.
#[test]
fn test_auto_equal_speeds_opener() {
    let board = board((20, 3, &[]), (20, 3, &[]), FirstPlayer::Auto);
    assert_eq!(board.current_player(), &bob(), "half the combined speed minus an equal share stays non-negative");
}

/// A speed change re-derives the queue but keeps existing turn ids.
#[test]
fn test_speed_change_keeps_turn_ids() {
    let mut board = board((20, 1, &["adrenaline", "punch"]), (20, 1, &["punch"]), FirstPlayer::PlayerOne);
    let before = board.turn_info().turn_queue;
    assert_eq!(before[1].turn_id.as_str(), "bob-1");

    board.play_item(&alice(), InstanceId(0)).unwrap();
    let after = board.turn_info().turn_queue;

    assert_eq!(after[0].turn_id.as_str(), "alice-2", "faster Alice keeps the turn");
    let bob_turn = after.iter().find(|t| t.player_id == bob()).unwrap();
    assert_eq!(bob_turn.turn_id.as_str(), "bob-1", "Bob's pending turn keeps its id");
}

// =============================================================================
// Validation
// =============================================================================

/// Rejected actions leave the board exactly as it was.
#[test]
fn test_rejections_leave_board_untouched() {
    let mut board = board((20, 1, &["punch"]), (20, 1, &["punch"]), FirstPlayer::PlayerOne);
    let before = board.game_state();
    let engine_before = board.engine().state().clone();

    assert!(matches!(board.pass(&bob()), Err(BoardError::NotYourTurn { .. })));
    assert!(matches!(
        board.play_item(&alice(), InstanceId(9)),
        Err(BoardError::ItemNotHeld { .. })
    ));
    assert!(matches!(
        board.surrender(&PlayerId::new("carol")),
        Err(BoardError::UnknownPlayer { .. })
    ));

    assert_eq!(board.game_state(), before, "rejected actions must not touch the view");
    assert_eq!(board.engine().state(), &engine_before, "rejected actions must not touch the engine");
}

/// Surrender ends the game; nothing is accepted afterwards.
#[test]
fn test_surrender() {
    let mut board = board((20, 1, &["punch"]), (20, 1, &["punch"]), FirstPlayer::PlayerOne);
    board.drain_log();

    let state = board.surrender(&alice()).unwrap();
    assert!(state.is_game_over);
    assert_eq!(state.winner_id, Some(bob()));

    assert_eq!(board.pass(&alice()), Err(BoardError::GameOver));
    assert_eq!(board.play_item(&bob(), InstanceId(1)), Err(BoardError::GameOver));
    assert!(board.legal_actions(&alice()).is_empty());
    assert!(board.legal_actions(&bob()).is_empty());

    let log = board.drain_log();
    assert!(matches!(
        log.last(),
        Some(LogEntry::Event(GameEvent::Lifecycle { phase: LifecyclePhase::GameOver, .. }))
    ));
}

/// Dropping to zero health ends the match mid-sequence.
#[test]
fn test_knockout() {
    let mut board = board(
        (20, 10, &["punch", "punch", "punch", "punch", "punch"]),
        (20, 0, &[]),
        FirstPlayer::Auto,
    );

    for i in 0..4 {
        board.play_item(&alice(), InstanceId(i)).unwrap();
    }

    assert!(board.is_game_over());
    assert_eq!(board.winner(), Some(&alice()));
    assert_eq!(board.game_state_for(&bob()).unwrap().player.loadout.health, 0);
    assert_eq!(board.play_item(&alice(), InstanceId(4)), Err(BoardError::GameOver));
}

/// Catalog data with extreme amounts saturates instead of overflowing.
#[test]
fn test_extreme_catalog_amounts() {
    let mut catalog = ItemCatalog::standard();
    for def in [
        ItemDefinition::new("elixir", "Elixir", Genre::Consumable).with_effect(Effect::heal(i64::MAX)),
        ItemDefinition::new("void", "Void", Genre::Weapon).with_effect(Effect::damage(i64::MIN).to_enemy()),
        ItemDefinition::new("haste", "Haste", Genre::Consumable).with_effect(Effect::speed(i64::MAX)),
    ] {
        catalog.register(def).unwrap();
    }
    let catalog = Arc::new(catalog);
    let mut alloc = InstanceAllocator::new();
    let a = catalog.hand(["elixir", "haste", "punch"], &mut alloc).unwrap();
    let b = catalog.hand(["void", "mirror", "punch"], &mut alloc).unwrap();

    let mut board = Board::new(
        alice(),
        Loadout::new(20, 1).with_items(a),
        bob(),
        Loadout::new(20, 1).with_items(b),
        catalog,
        BoardConfig::default().with_first_player(FirstPlayer::PlayerOne),
    )
    .unwrap();

    let state = board.play_item(&alice(), InstanceId(0)).unwrap();
    assert_eq!(state.player.loadout.health, i64::MAX, "heal should stop at the i64 ceiling");

    // Bob's void heals Alice by i64::MAX and stays at the ceiling
    board.play_item(&bob(), InstanceId(3)).unwrap();
    assert_eq!(board.game_state().player.loadout.health, i64::MAX);

    let state = board.play_item(&alice(), InstanceId(1)).unwrap();
    assert_eq!(state.player.loadout.speed, i64::MAX);
    assert!(!board.is_game_over(), "saturated values must not wrap into a knockout");
    assert_eq!(board.current_player(), &alice(), "the much faster competitor keeps the turn");
}

// =============================================================================
// Cloning
// =============================================================================

/// Work done on a clone never reaches the original.
#[test]
fn test_clone_independence() {
    let board = board((20, 1, &["punch", "poison"]), (20, 1, &["shield"]), FirstPlayer::PlayerOne);
    let before = board.game_state();

    let mut trial = board.clone();
    trial.play_item(&alice(), InstanceId(1)).unwrap();
    trial.play_item(&bob(), InstanceId(2)).unwrap();
    trial.surrender(&alice()).unwrap();

    assert_eq!(board.game_state(), before, "the original board should be untouched");
    assert!(!board.is_game_over());
    assert!(trial.is_game_over());
}

/// Walk a match, picking the `choice`-th legal non-surrender action each turn.
fn walk(board: &mut Board, choices: &[usize]) {
    for &choice in choices {
        if board.is_game_over() {
            break;
        }
        let me = board.current_player().clone();
        let actions: Vec<_> = board
            .legal_actions(&me)
            .into_iter()
            .filter(|a| a.kind != ActionKind::Surrender)
            .collect();
        let action = &actions[choice % actions.len()];
        board.apply(action).unwrap();
    }
}

proptest! {
    /// Two clones fed the same actions stay identical.
    #[test]
    fn test_clone_determinism(
        prefix in prop::collection::vec(0_usize..8, 0..4),
        choices in prop::collection::vec(0_usize..8, 0..30),
    ) {
        let mut board = board(
            (20, 2, &["punch", "shield", "poison", "mirror", "caltrops"]),
            (20, 3, &["punch", "thorns", "buckler", "adrenaline", "bandage"]),
            FirstPlayer::Auto,
        );
        walk(&mut board, &prefix);

        let mut left = board.clone();
        let mut right = board.clone();
        walk(&mut left, &choices);
        walk(&mut right, &choices);

        prop_assert_eq!(left.game_state(), right.game_state());
        prop_assert_eq!(left.engine().state(), right.engine().state());
        prop_assert_eq!(left.drain_log(), right.drain_log());
    }

    /// Random legal play keeps the board consistent.
    #[test]
    fn test_random_play_invariants(choices in prop::collection::vec(0_usize..8, 0..40)) {
        let mut board = board(
            (15, 1, &["punch", "punch", "bandage", "thorns"]),
            (15, 2, &["punch", "shield", "caltrops", "buckler"]),
            FirstPlayer::Auto,
        );
        walk(&mut board, &choices);

        let state = board.game_state();
        prop_assert!(state.player.loadout.items.len() <= 4);
        prop_assert!(state.opponent.loadout.items.len() <= 4);
        prop_assert!(state.player.loadout.speed >= 0 && state.opponent.loadout.speed >= 0);
        prop_assert_eq!(state.turn_info.turn_queue.len(), board.config().turn_window);

        if state.is_game_over {
            prop_assert!(state.player.loadout.health <= 0 || state.opponent.loadout.health <= 0);
        } else {
            prop_assert!(state.player.loadout.health > 0 && state.opponent.loadout.health > 0);
            prop_assert!(state.winner_id.is_none());
        }
    }
}
