//! Demo: greedy lookahead against random play with the standard catalog.
//!
//! Usage: `duel [seed]`. Set `RUST_LOG=duel_engine=debug` to watch the
//! engine work.

use std::sync::Arc;

use duel_engine::{
    run_match, BoardConfig, Board, GameRng, GreedyLookahead, InstanceAllocator, ItemCatalog, LogEntry,
    Loadout, MatchOutcome, PlayerId, RandomStrategy, Strategies,
};
use tracing_subscriber::EnvFilter;

const HAND: [&str; 6] = ["punch", "shield", "poison", "bandage", "adrenaline", "thorns"];
const MAX_ACTIONS: usize = 200;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse::<u64>())
        .transpose()?
        .unwrap_or(42);

    let catalog = Arc::new(ItemCatalog::standard());
    let mut instances = InstanceAllocator::new();
    let greedy = PlayerId::new("greedy");
    let random = PlayerId::new("random");

    let mut board = Board::new(
        greedy.clone(),
        Loadout::new(30, 3).with_items(catalog.hand(HAND, &mut instances)?),
        random.clone(),
        Loadout::new(30, 3).with_items(catalog.hand(HAND, &mut instances)?),
        catalog,
        BoardConfig::default(),
    )?;

    let mut strategies = Strategies::default();
    strategies.insert(greedy.clone(), Box::new(GreedyLookahead));
    let mut match_rng = GameRng::new(seed);
    strategies.insert(random.clone(), Box::new(RandomStrategy::from_rng(match_rng.fork())));

    let outcome = run_match(&mut board, &mut strategies, MAX_ACTIONS).await?;

    let log = board.drain_log();
    let changes = log.iter().filter(|e| matches!(e, LogEntry::StateChange(_))).count();
    let state = board.game_state();

    println!("seed {seed}: {} actions, {changes} state changes", state.action_history.len());
    println!(
        "{} {} hp / {} {} hp",
        state.player.id, state.player.loadout.health, state.opponent.id, state.opponent.loadout.health
    );
    match outcome {
        MatchOutcome::Winner(winner) => println!("winner: {winner}"),
        MatchOutcome::Draw => println!("draw"),
    }
    Ok(())
}
