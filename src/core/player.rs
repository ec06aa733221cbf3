//! Player identification and roster entries.
//!
//! ## PlayerId
//!
//! Opaque identity supplied by the host (a chat user id, a session id).
//! The engine only compares ids for equality.
//!
//! ## Seat
//!
//! 0-based roster position. Join order fixes the seat, and seats drive
//! turn order and the first-declarer rotation.

use serde::{Deserialize, Serialize};

/// Opaque player identity, unique within a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// Channel or session a match is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChannelId(pub u64);

impl ChannelId {
    /// Create a new channel ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Channel({})", self.0)
    }
}

/// Roster position (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Seat(pub u8);

impl Seat {
    /// Create a new seat.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping at `player_count`.
    ///
    /// ```
    /// use bluff_number::core::Seat;
    ///
    /// assert_eq!(Seat::new(0).next(3), Seat::new(1));
    /// assert_eq!(Seat::new(2).next(3), Seat::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Seat that opens the given (1-based) round.
    ///
    /// Rotates one seat per round: round 1 opens at seat 0, round 2 at seat 1.
    #[must_use]
    pub fn opener(round_number: u32, player_count: usize) -> Self {
        let offset = (round_number.saturating_sub(1) as usize) % player_count;
        Self(offset as u8)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// A roster entry.
///
/// Created on join, never removed while the match exists. The secret is
/// `None` until the first round is dealt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Host-supplied identity.
    pub id: PlayerId,

    /// Display label, used verbatim in every rendered message.
    pub label: String,

    /// Running score. Starts at 0 and only ever goes down.
    pub score: i32,

    /// Secret value dealt for the current round.
    pub secret: Option<u32>,
}

impl Player {
    /// Create a player with a zero score and no secret.
    pub fn new(id: PlayerId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            score: 0,
            secret: None,
        }
    }
}
