//! Turn queue with stable identities.
//!
//! The scheduler keeps a window of upcoming turns. When a speed changes the
//! window is re-derived, but turns that still belong to the same competitor
//! in the same relative order keep their ids, so a UI does not see the
//! whole queue reshuffle.

use std::collections::VecDeque;

use crate::core::{FirstPlayer, PlayerId};

use super::generator::{Seat, TurnEntry, TurnGenerator};

/// Smallest window: the current turn and the next one.
pub const MIN_WINDOW: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnScheduler {
    generator: TurnGenerator,
    queue: VecDeque<TurnEntry>,
    window: usize,
    first: FirstPlayer,
}

impl TurnScheduler {
    #[must_use]
    pub fn new(players: [PlayerId; 2], speeds: [i64; 2], first: FirstPlayer, window: usize) -> Self {
        let mut scheduler = Self {
            generator: TurnGenerator::new(players, speeds, first),
            queue: VecDeque::new(),
            window: window.max(MIN_WINDOW),
            first,
        };
        scheduler.fill();
        scheduler
    }

    fn fill(&mut self) {
        while self.queue.len() < self.window {
            let entry = self.generator.next_entry();
            self.queue.push_back(entry);
        }
    }

    // === Accessors ===

    /// The turn being played.
    #[must_use]
    pub fn current(&self) -> &TurnEntry {
        &self.queue[0]
    }

    /// The turn after the current one.
    #[must_use]
    pub fn upcoming(&self) -> &TurnEntry {
        &self.queue[1]
    }

    /// Upcoming turns, current first.
    pub fn queue(&self) -> impl Iterator<Item = &TurnEntry> {
        self.queue.iter()
    }

    #[must_use]
    pub fn window(&self) -> usize {
        self.window
    }

    #[must_use]
    pub fn speeds(&self) -> [i64; 2] {
        self.generator.speeds()
    }

    #[must_use]
    pub fn players(&self) -> &[PlayerId; 2] {
        self.generator.players()
    }

    // === Transitions ===

    /// Consume the current turn and return it.
    pub fn advance(&mut self) -> TurnEntry {
        let done = self.queue.pop_front();
        self.fill();
        done.unwrap_or_else(|| self.queue[0].clone())
    }

    /// Restart the sequence from the current speeds.
    ///
    /// Turn numbers keep counting so ids are never reused.
    pub fn reset(&mut self) {
        let next_sequence = self.generator.next_sequence();
        self.generator = TurnGenerator::new(self.generator.players().clone(), self.speeds(), self.first);
        self.generator.set_next_sequence(next_sequence);
        self.queue.clear();
        self.fill();
    }

    /// Re-derive the queue after a speed change.
    ///
    /// The current turn is kept as is. Later positions are regenerated from
    /// its error with the new speeds; the k-th new turn of a competitor takes
    /// the id of that competitor's k-th old turn when there is one, and a
    /// fresh id otherwise.
    pub fn recalculate(&mut self, speeds: [i64; 2]) {
        let old: Vec<TurnEntry> = self.queue.drain(..).collect();
        let Some(current) = old.first().cloned() else {
            self.generator = TurnGenerator::new(self.generator.players().clone(), speeds, self.first);
            self.fill();
            return;
        };

        let mut generator = TurnGenerator::resume(
            self.generator.players().clone(),
            speeds,
            current.accumulated_error,
            self.generator.next_sequence(),
        );

        let mut cursors = [1usize; 2];
        let mut queue = VecDeque::with_capacity(self.window);
        queue.push_back(current);

        while queue.len() < self.window {
            let (seat, error) = generator.step();
            let player = generator.player(seat).clone();
            let cursor = &mut cursors[seat.index()];

            let reused = old
                .iter()
                .enumerate()
                .skip(*cursor)
                .find(|(_, e)| e.player_id == player)
                .map(|(j, e)| (j, e.sequence));

            let entry = match reused {
                Some((j, sequence)) => {
                    *cursor = j + 1;
                    TurnEntry::new(player, sequence, error)
                }
                None => {
                    *cursor = old.len();
                    let sequence = generator.take_sequence(seat);
                    TurnEntry::new(player, sequence, error)
                }
            };
            queue.push_back(entry);
        }

        tracing::debug!(
            speeds = ?speeds,
            queue = ?queue.iter().map(|e| e.turn_id.as_str()).collect::<Vec<_>>(),
            "turn queue recalculated"
        );

        self.generator = generator;
        self.queue = queue;
    }

    /// Whose turn `seat` would be.
    #[must_use]
    pub fn player(&self, seat: Seat) -> &PlayerId {
        self.generator.player(seat)
    }
}
