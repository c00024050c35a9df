//! Speed-proportional turn generation.
//!
//! Two competitors share turns in proportion to their speeds using an
//! error accumulator, the same way a line-drawing algorithm spreads steps
//! over pixels. Over any prefix of `n` turns each competitor is within one
//! turn of its exact share.

use serde::{Deserialize, Serialize};

use crate::core::{FirstPlayer, PlayerId};

/// Stable identity of a scheduled turn, `"{player}-{n}"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TurnId(pub String);

impl TurnId {
    #[must_use]
    pub fn new(player: &PlayerId, sequence: u32) -> Self {
        Self(format!("{player}-{sequence}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TurnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One scheduled turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEntry {
    pub player_id: PlayerId,
    pub turn_id: TurnId,
    /// Per-player turn number behind `turn_id`, starting at 1.
    pub sequence: u32,
    /// Running error after the step that produced this turn.
    pub accumulated_error: i64,
}

impl TurnEntry {
    #[must_use]
    pub fn new(player_id: PlayerId, sequence: u32, accumulated_error: i64) -> Self {
        Self {
            turn_id: TurnId::new(&player_id, sequence),
            player_id,
            sequence,
            accumulated_error,
        }
    }
}

/// Which of the two competitors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

/// Unbounded, deterministic turn sequence.
///
/// ## Example
///
/// ```
/// use duel_engine::core::{FirstPlayer, PlayerId};
/// use duel_engine::schedule::TurnGenerator;
///
/// let fast = PlayerId::new("fast");
/// let slow = PlayerId::new("slow");
/// let turns: Vec<_> = TurnGenerator::new([fast.clone(), slow.clone()], [2, 1], FirstPlayer::Auto)
///     .take(6)
///     .map(|t| t.turn_id.to_string())
///     .collect();
///
/// assert_eq!(turns, ["fast-1", "slow-1", "fast-2", "fast-3", "slow-2", "fast-4"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnGenerator {
    players: [PlayerId; 2],
    speeds: [i64; 2],
    error: i64,
    next_sequence: [u32; 2],
}

impl TurnGenerator {
    /// Start a fresh sequence.
    ///
    /// `Auto` starts the error at half the combined speed; a forced first
    /// player starts it where that player wins the first step.
    #[must_use]
    pub fn new(players: [PlayerId; 2], speeds: [i64; 2], first: FirstPlayer) -> Self {
        let error = match first {
            FirstPlayer::Auto => speeds[0].saturating_add(speeds[1]) / 2,
            FirstPlayer::PlayerOne => 0,
            FirstPlayer::PlayerTwo => speeds[0],
        };
        Self::resume(players, speeds, error, [1, 1])
    }

    /// Continue from a known error and per-player turn counters.
    #[must_use]
    pub fn resume(players: [PlayerId; 2], speeds: [i64; 2], error: i64, next_sequence: [u32; 2]) -> Self {
        Self {
            players,
            speeds,
            error,
            next_sequence,
        }
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &PlayerId {
        &self.players[seat.index()]
    }

    #[must_use]
    pub fn players(&self) -> &[PlayerId; 2] {
        &self.players
    }

    #[must_use]
    pub fn speeds(&self) -> [i64; 2] {
        self.speeds
    }

    #[must_use]
    pub fn error(&self) -> i64 {
        self.error
    }

    /// Next unused turn number per player.
    #[must_use]
    pub fn next_sequence(&self) -> [u32; 2] {
        self.next_sequence
    }

    pub fn set_next_sequence(&mut self, next_sequence: [u32; 2]) {
        self.next_sequence = next_sequence;
    }

    /// Decide the next turn's owner without numbering it.
    ///
    /// With zero combined speed player one takes every turn.
    pub fn step(&mut self) -> (Seat, i64) {
        let total = self.speeds[0].saturating_add(self.speeds[1]);
        if total <= 0 {
            return (Seat::One, self.error);
        }

        self.error = self.error.saturating_sub(self.speeds[0]);
        if self.error < 0 {
            self.error = self.error.saturating_add(total);
            (Seat::One, self.error)
        } else {
            (Seat::Two, self.error)
        }
    }

    /// Take the next turn number for `seat`.
    pub fn take_sequence(&mut self, seat: Seat) -> u32 {
        let sequence = self.next_sequence[seat.index()];
        self.next_sequence[seat.index()] += 1;
        sequence
    }
}

impl TurnGenerator {
    /// Decide and number the next turn.
    pub fn next_entry(&mut self) -> TurnEntry {
        let (seat, error) = self.step();
        let sequence = self.take_sequence(seat);
        TurnEntry::new(self.player(seat).clone(), sequence, error)
    }
}

impl Iterator for TurnGenerator {
    type Item = TurnEntry;

    fn next(&mut self) -> Option<TurnEntry> {
        Some(self.next_entry())
    }
}
