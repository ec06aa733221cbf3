//! Match configuration.
//!
//! `MatchConfig::default()` is the reference Bluff Number game: three
//! players, three rounds, secrets in 1..=10, claims from 3 up to 30.
//! Hosts adjust it with the builder-style setters before creating a match.
//!
//! The timeouts are hints for the host's own scheduler. The engine never
//! reads a clock.

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Upper bound on a legal declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclarationCeiling {
    /// Constant ceiling regardless of roster size.
    Fixed(u32),
    /// `player_count * max secret`, the largest sum that can actually be dealt.
    ScaledToRoster,
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Exact roster size required to start.
    pub player_count: usize,

    /// Rounds played before the match ends.
    pub max_rounds: u32,

    /// Inclusive range each secret is dealt from.
    pub secret_range: RangeInclusive<u32>,

    /// Minimum opening claim of a round.
    pub declaration_floor: u32,

    /// Maximum claim.
    pub declaration_ceiling: DeclarationCeiling,

    /// How long a turn player has before the host should call `on_timeout`.
    pub turn_timeout: Duration,

    /// How long the host should keep an unfilled lobby open.
    pub lobby_timeout: Duration,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_count: 3,
            max_rounds: 3,
            secret_range: 1..=10,
            declaration_floor: 3,
            declaration_ceiling: DeclarationCeiling::Fixed(30),
            turn_timeout: Duration::from_secs(60),
            lobby_timeout: Duration::from_secs(120),
        }
    }
}

impl MatchConfig {
    /// Create the reference configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the required roster size.
    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        assert!((1..=255).contains(&count), "Player count must be 1-255");
        self.player_count = count;
        self
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn max_rounds(mut self, rounds: u32) -> Self {
        assert!(rounds > 0, "Must play at least 1 round");
        self.max_rounds = rounds;
        self
    }

    /// Set the range secrets are dealt from.
    #[must_use]
    pub fn secret_range(mut self, range: RangeInclusive<u32>) -> Self {
        assert!(!range.is_empty(), "Secret range must not be empty");
        self.secret_range = range;
        self
    }

    /// Set the minimum opening claim.
    #[must_use]
    pub fn declaration_floor(mut self, floor: u32) -> Self {
        assert!(floor > 0, "Declaration floor must be positive");
        self.declaration_floor = floor;
        self
    }

    /// Set the claim ceiling.
    #[must_use]
    pub fn declaration_ceiling(mut self, ceiling: DeclarationCeiling) -> Self {
        self.declaration_ceiling = ceiling;
        self
    }

    /// Set the per-turn timeout hint.
    #[must_use]
    pub fn turn_timeout(mut self, timeout: Duration) -> Self {
        self.turn_timeout = timeout;
        self
    }

    /// Set the lobby timeout hint.
    #[must_use]
    pub fn lobby_timeout(mut self, timeout: Duration) -> Self {
        self.lobby_timeout = timeout;
        self
    }

    /// Resolve the ceiling to a concrete value.
    ///
    /// # Panics
    ///
    /// If the ceiling overflows `u32` or falls below the floor.
    #[must_use]
    pub fn max_declaration(&self) -> u32 {
        match self.checked_max_declaration() {
            Ok(ceiling) => ceiling,
            Err(err) => panic!("{}", err),
        }
    }

    /// Resolve the ceiling, reporting overflow or a ceiling below the floor.
    pub fn checked_max_declaration(&self) -> Result<u32, ConfigError> {
        let ceiling = match self.declaration_ceiling {
            DeclarationCeiling::Fixed(value) => value,
            DeclarationCeiling::ScaledToRoster => u32::try_from(self.player_count)
                .ok()
                .and_then(|players| players.checked_mul(*self.secret_range.end()))
                .ok_or(ConfigError::CeilingOverflow {
                    players: self.player_count,
                    max_secret: *self.secret_range.end(),
                })?,
        };
        if ceiling < self.declaration_floor {
            return Err(ConfigError::CeilingBelowFloor {
                ceiling,
                floor: self.declaration_floor,
            });
        }
        Ok(ceiling)
    }

    /// Check every field without panicking.
    ///
    /// The builder setters assert the same conditions; this is for configs
    /// assembled from untrusted input (bindings, decoded snapshots).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=255).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if self.secret_range.is_empty() {
            return Err(ConfigError::EmptySecretRange);
        }
        if self.declaration_floor == 0 {
            return Err(ConfigError::ZeroFloor);
        }
        self.checked_max_declaration().map(|_| ())
    }
}
