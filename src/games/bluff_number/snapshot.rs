//! Binary snapshots of a whole match.
//!
//! A snapshot carries the dealer state too, so a restored match deals the
//! same future rounds as the live match would have.
//!
//! Restoring treats the bytes as untrusted: decoding is bounded by the
//! input length, and the decoded match must be one that some sequence of
//! commands could have produced.

use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::{Phase, SnapshotError};
use crate::rules::Dealer;

use super::game::Match;

impl<D> Match<D>
where
    D: Dealer + Serialize + DeserializeOwned,
{
    /// Encode the match with bincode.
    pub fn snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode a match previously produced by [`snapshot`](Self::snapshot).
    pub fn restore(bytes: &[u8]) -> Result<Self, SnapshotError> {
        // Same wire format as `bincode::serialize`, plus a size limit.
        let game: Self = bincode::options()
            .with_fixint_encoding()
            .allow_trailing_bytes()
            .with_limit(bytes.len() as u64)
            .deserialize(bytes)
            .map_err(SnapshotError::Decode)?;
        game.check_consistency().map_err(SnapshotError::Invalid)?;
        Ok(game)
    }
}

impl<D> Match<D> {
    fn check_consistency(&self) -> Result<(), String> {
        self.config.validate().map_err(|e| e.to_string())?;
        let max = self.config.max_declaration();
        let seats = self.roster.len();

        if seats > self.config.player_count {
            return Err(format!(
                "roster has {} players, capacity is {}",
                seats, self.config.player_count
            ));
        }
        if self.phase != Phase::Lobby && seats != self.config.player_count {
            return Err(format!("{} phase with an incomplete roster", self.phase));
        }
        for (i, player) in self.roster.iter().enumerate() {
            if self.roster[..i].iter().any(|p| p.id == player.id) {
                return Err(format!("{} is seated twice", player.id));
            }
        }

        if self.round.is_some() != (self.phase == Phase::Turn) {
            return Err(format!("{} phase with a live round mismatch", self.phase));
        }
        let resolved = self.ledger.len() as u32;
        let expected_resolved = match self.phase {
            Phase::Lobby => 0,
            Phase::Turn => self.round_number.saturating_sub(1),
            Phase::RoundEnd | Phase::GameOver => self.round_number,
        };
        if self.round_number > self.config.max_rounds
            || (self.phase == Phase::Lobby) != (self.round_number == 0)
            || resolved != expected_resolved
        {
            return Err(format!(
                "round {} with {} resolved rounds in the {} phase",
                self.round_number, resolved, self.phase
            ));
        }
        if self
            .ledger
            .iter()
            .zip(1..)
            .any(|(record, number)| record.round_number() != number)
        {
            return Err("ledger rounds out of order".to_string());
        }

        // Scores start at 0 and every resolved round docks exactly one point.
        let docked: i64 = self.roster.iter().map(|p| -i64::from(p.score)).sum();
        if self.roster.iter().any(|p| p.score > 0) || docked != i64::from(resolved) {
            return Err(format!(
                "{} points docked over {} resolved rounds",
                docked, resolved
            ));
        }

        if let Some(round) = &self.round {
            if round.round_number() != self.round_number {
                return Err("live round number disagrees with the match".to_string());
            }
            if round.turn_seat().index() >= seats {
                return Err(format!("turn seat {} is past the roster", round.turn_seat().0));
            }
            if let Some(declaration) = round.declaration() {
                if declaration.seat.index() >= seats {
                    return Err(format!(
                        "declarer seat {} is past the roster",
                        declaration.seat.0
                    ));
                }
                if declaration.value < self.config.declaration_floor || declaration.value > max {
                    return Err(format!("standing declaration {} out of range", declaration.value));
                }
            }
            if self.roster.iter().any(|p| p.secret.is_none()) {
                return Err("live round with an undealt secret".to_string());
            }
        }
        Ok(())
    }
}
