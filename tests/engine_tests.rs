//! Engine integration tests.
//!
//! These tests drive the engine directly (no board, no turn checks) to
//! verify effect processing, durations and the replay log.

use std::sync::Arc;

use duel_engine::core::{Competitor, EngineConfig, InstanceAllocator, InstanceId, Loadout, PlayerId};
use duel_engine::effects::{Effect, EffectKind};
use duel_engine::engine::{Engine, EngineError, LogEntry};
use duel_engine::items::{Genre, Item, ItemCatalog, ItemDefinition, ItemId};
use duel_engine::triggers::{Condition, Duration, GameEvent, LifecyclePhase, StatusEffect};

fn alice() -> PlayerId {
    PlayerId::new("alice")
}

fn bob() -> PlayerId {
    PlayerId::new("bob")
}

/// Standard catalog plus a two-turn curse for duration tests.
fn catalog() -> Arc<ItemCatalog> {
    let mut catalog = ItemCatalog::standard();
    catalog
        .register(
            ItemDefinition::new("curse", "Curse", Genre::Trinket).with_effect(
                Effect::add_status(
                    StatusEffect::new(Condition::OnTurnEnd, vec![Effect::damage(3).to_self()])
                        .with_duration(Duration::Turns(2)),
                )
                .to_enemy(),
            ),
        )
        .unwrap();
    Arc::new(catalog)
}

fn engine(alice_items: &[&str], bob_items: &[&str]) -> Engine {
    let catalog = catalog();
    let mut alloc = InstanceAllocator::new();
    let a = catalog.hand(alice_items.iter().copied(), &mut alloc).unwrap();
    let b = catalog.hand(bob_items.iter().copied(), &mut alloc).unwrap();

    Engine::new(
        Competitor::new(alice(), Loadout::new(20, 1).with_items(a)),
        Competitor::new(bob(), Loadout::new(20, 1).with_items(b)),
        catalog,
        EngineConfig::default(),
    )
    .unwrap()
}

fn health(engine: &Engine, id: &PlayerId) -> i64 {
    engine.competitor(id).map(|c| c.loadout.health).unwrap()
}

fn item_count(engine: &Engine, id: &PlayerId) -> usize {
    engine.competitor(id).map(|c| c.loadout.items.len()).unwrap()
}

// =============================================================================
// Playing Items
// =============================================================================

/// An item with no effects is consumed and changes nothing else.
#[test]
fn test_pass_item_only_consumes_itself() {
    let mut engine = engine(&["pass", "punch"], &["punch"]);
    engine.play(&alice(), InstanceId(0)).unwrap();

    assert_eq!(health(&engine, &alice()), 20);
    assert_eq!(health(&engine, &bob()), 20);
    assert_eq!(item_count(&engine, &alice()), 1);
    assert_eq!(item_count(&engine, &bob()), 1);
}

/// When-played effects resolve in order after the item is removed.
#[test]
fn test_when_played_effects() {
    let mut engine = engine(&["bandage", "caltrops", "adrenaline"], &[]);

    engine.play(&alice(), InstanceId(0)).unwrap();
    assert_eq!(health(&engine, &alice()), 24);

    engine.play(&alice(), InstanceId(1)).unwrap();
    assert_eq!(engine.competitor(&bob()).unwrap().loadout.speed, 0);

    engine.play(&alice(), InstanceId(2)).unwrap();
    assert_eq!(engine.competitor(&alice()).unwrap().loadout.speed, 4);
    assert_eq!(item_count(&engine, &alice()), 0);
}

/// Playing the same instance twice fails the second time.
#[test]
fn test_item_consumed_on_play() {
    let mut engine = engine(&["punch"], &[]);
    engine.play(&alice(), InstanceId(0)).unwrap();

    assert_eq!(
        engine.play(&alice(), InstanceId(0)),
        Err(EngineError::ItemNotHeld { player: alice(), instance: InstanceId(0) })
    );
    assert_eq!(health(&engine, &bob()), 15);
}

/// A hand naming an item the catalog lacks is rejected up front.
#[test]
fn test_unknown_item_is_configuration_error() {
    let catalog = Arc::new(ItemCatalog::standard());
    let result = Engine::new(
        Competitor::new(alice(), Loadout::new(20, 1)),
        Competitor::new(
            bob(),
            Loadout::new(20, 1).with_item(Item::new(ItemId::new("curse"), InstanceId(0), Genre::Trinket)),
        ),
        catalog,
        EngineConfig::default(),
    );

    assert!(matches!(result, Err(EngineError::Catalog(_))));
}

// =============================================================================
// Durations
// =============================================================================

/// A one-charge negate cancels exactly one hit and is then removed.
#[test]
fn test_charges_negate_once() {
    let mut engine = engine(&["punch", "punch"], &["shield"]);
    let base_listeners = engine.state().listeners.len();

    engine.play(&bob(), InstanceId(2)).unwrap();
    assert_eq!(engine.state().listeners.len(), base_listeners + 1);

    engine.play(&alice(), InstanceId(0)).unwrap();
    assert_eq!(health(&engine, &bob()), 20, "the shield should cancel the first hit");
    assert_eq!(engine.state().listeners.len(), base_listeners, "a spent shield removes itself");

    engine.play(&alice(), InstanceId(1)).unwrap();
    assert_eq!(health(&engine, &bob()), 15, "the second hit lands");
}

/// A two-turn status acts on two of its owner's turn ends, not the third.
#[test]
fn test_turns_status_lifetime() {
    let mut engine = engine(&["curse"], &["punch", "punch", "punch"]);
    engine.play(&alice(), InstanceId(0)).unwrap();

    // Alice's turn ends don't count for Bob's curse
    engine.process_end_of_turn(&alice()).unwrap();
    assert_eq!(health(&engine, &bob()), 20);

    engine.process_end_of_turn(&bob()).unwrap();
    assert_eq!(health(&engine, &bob()), 17);

    engine.process_end_of_turn(&bob()).unwrap();
    assert_eq!(health(&engine, &bob()), 14);

    engine.process_end_of_turn(&bob()).unwrap();
    assert_eq!(health(&engine, &bob()), 14, "the curse should be gone by the third turn end");
}

/// Poison lasts three turns of the victim.
#[test]
fn test_poison_from_catalog() {
    let mut engine = engine(&["poison"], &["punch"]);
    engine.play(&alice(), InstanceId(0)).unwrap();

    for _ in 0..5 {
        engine.process_end_of_turn(&bob()).unwrap();
    }
    assert_eq!(health(&engine, &bob()), 14);
}

/// Fatigue hits only an empty hand, once per turn end.
#[test]
fn test_fatigue() {
    let mut engine = engine(&[], &["punch"]);

    engine.process_end_of_turn(&alice()).unwrap();
    engine.process_end_of_turn(&alice()).unwrap();
    engine.process_end_of_turn(&bob()).unwrap();

    assert_eq!(health(&engine, &alice()), 18);
    assert_eq!(health(&engine, &bob()), 20);
    assert_eq!(engine.state().turn_number, 3);
}

/// Fatigue damage comes from configuration.
#[test]
fn test_fatigue_configurable() {
    let mut engine = Engine::new(
        Competitor::new(alice(), Loadout::new(20, 1)),
        Competitor::new(bob(), Loadout::new(20, 1)),
        catalog(),
        EngineConfig::default().with_fatigue_damage(4),
    )
    .unwrap();

    engine.process_end_of_turn(&bob()).unwrap();
    assert_eq!(health(&engine, &bob()), 16);
}

// =============================================================================
// Game Over
// =============================================================================

/// Crossing zero health ends the game and freezes the state.
#[test]
fn test_game_over_is_terminal() {
    let mut engine = engine(&["punch", "punch", "punch", "punch", "bandage"], &[]);
    for i in 0..4 {
        engine.play(&alice(), InstanceId(i)).unwrap();
    }

    assert!(engine.is_game_over());
    assert_eq!(engine.winner(), Some(&alice()));

    let frozen = engine.state().clone();
    engine.play(&alice(), InstanceId(4)).unwrap();
    engine.process_end_of_turn(&bob()).unwrap();
    assert_eq!(engine.state(), &frozen, "a finished game ignores further events");
}

/// The first lethal effect ends the game; later effects are dropped.
#[test]
fn test_first_lethal_effect_ends_game() {
    let catalog = {
        let mut catalog = ItemCatalog::standard();
        catalog
            .register(
                ItemDefinition::new("bomb", "Bomb", Genre::Weapon)
                    .with_effect(Effect::damage(20).to_self())
                    .with_effect(Effect::damage(20).to_enemy()),
            )
            .unwrap();
        Arc::new(catalog)
    };
    let mut alloc = InstanceAllocator::new();
    let hand = catalog.hand(["bomb"], &mut alloc).unwrap();

    let mut engine = Engine::new(
        Competitor::new(alice(), Loadout::new(20, 1).with_items(hand)),
        Competitor::new(bob(), Loadout::new(20, 1)),
        catalog,
        EngineConfig::default(),
    )
    .unwrap();

    engine.play(&alice(), InstanceId(0)).unwrap();
    assert!(engine.is_game_over());
    assert_eq!(engine.winner(), Some(&bob()));
    assert_eq!(health(&engine, &bob()), 20);
}

// =============================================================================
// Replay Log
// =============================================================================

/// The log holds every top-level event followed by the changes it caused.
#[test]
fn test_log_order() {
    let mut engine = engine(&["punch"], &[]);
    engine.process_game_start(&alice()).unwrap();
    engine.process_turn_start(&alice()).unwrap();
    engine.play(&alice(), InstanceId(0)).unwrap();

    let log = engine.drain_log();
    let kinds: Vec<&str> = log
        .iter()
        .map(|entry| match entry {
            LogEntry::Event(GameEvent::Lifecycle { .. }) => "lifecycle",
            LogEntry::Event(GameEvent::OnPlay { .. }) => "on_play",
            LogEntry::Event(GameEvent::Effect { .. }) => "effect",
            LogEntry::StateChange(_) => "change",
            LogEntry::Truncated { .. } => "truncated",
        })
        .collect();

    assert_eq!(
        kinds,
        ["lifecycle", "lifecycle", "on_play", "effect", "change", "effect", "change"]
    );

    match &log[6] {
        LogEntry::StateChange(snapshot) => assert_eq!(snapshot.player_two.loadout.health, 15),
        other => panic!("expected a state change, got {:?}", other),
    }
}

/// A game ending records a synthesized game_over event after the change.
#[test]
fn test_log_game_over_event() {
    let mut engine = engine(&["punch", "punch", "punch", "punch"], &[]);
    for i in 0..4 {
        engine.play(&alice(), InstanceId(i)).unwrap();
    }

    let log = engine.drain_log();
    let game_overs: Vec<_> = log
        .iter()
        .filter(|e| {
            matches!(
                e,
                LogEntry::Event(GameEvent::Lifecycle { phase: LifecyclePhase::GameOver, .. })
            )
        })
        .collect();
    assert_eq!(game_overs.len(), 1);
    assert!(matches!(log.last(), Some(LogEntry::Event(_))));
}

/// Truncation is reported instead of passing silently.
#[test]
fn test_truncation_is_diagnosable() {
    let catalog = catalog();
    let mut alloc = InstanceAllocator::new();
    let hand = catalog.hand(["thorns", "thorns", "thorns", "punch"], &mut alloc).unwrap();
    let mut engine = Engine::new(
        Competitor::new(alice(), Loadout::new(20, 1)),
        Competitor::new(bob(), Loadout::new(20, 1).with_items(hand)),
        catalog,
        EngineConfig::default().with_max_depth(3),
    )
    .unwrap();

    assert_eq!(engine.truncations(), 0);
    engine.process_end_of_turn(&alice()).unwrap();

    assert!(engine.truncations() > 0, "a chain deeper than max_depth should be counted");
    assert!(engine
        .drain_log()
        .iter()
        .any(|e| matches!(e, LogEntry::Truncated { .. })));
}

/// Effect kinds survive in the log for replay.
#[test]
fn test_logged_effects_carry_kind() {
    let mut engine = engine(&["bandage"], &[]);
    engine.play(&alice(), InstanceId(0)).unwrap();

    let kinds: Vec<EffectKind> = engine
        .drain_log()
        .iter()
        .filter_map(|e| match e {
            LogEntry::Event(event) => event.effect_kind(),
            _ => None,
        })
        .collect();
    assert_eq!(kinds, [EffectKind::RemoveItem, EffectKind::Heal]);
}
