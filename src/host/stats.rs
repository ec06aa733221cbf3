//! Reporting finished matches to a stats backend.
//!
//! The engine persists nothing. After `GameOver` the host hands the match
//! to [`report_match`], which records one play for everyone on the roster
//! and one win for the top of the final ranking.

use std::convert::Infallible;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::core::{Phase, PlayerId};
use crate::games::bluff_number::Match;
use crate::rules::Dealer;

/// Aggregate counters store (an HTTP API, a database, a map).
pub trait StatsStore {
    type Error;

    /// Count one finished match for `player`.
    fn record_play(&mut self, player: PlayerId, label: &str) -> Result<(), Self::Error>;

    /// Count one win for `player`.
    fn record_win(&mut self, player: PlayerId, label: &str) -> Result<(), Self::Error>;
}

/// Per-player counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub play_count: u32,
    pub win_count: u32,
}

/// Stats store kept in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStats {
    table: FxHashMap<PlayerId, PlayerStats>,
}

impl InMemoryStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters for `player`, zero if never seen.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> PlayerStats {
        self.table.get(&player).copied().unwrap_or_default()
    }
}

impl StatsStore for InMemoryStats {
    type Error = Infallible;

    fn record_play(&mut self, player: PlayerId, _label: &str) -> Result<(), Self::Error> {
        self.table.entry(player).or_default().play_count += 1;
        Ok(())
    }

    fn record_win(&mut self, player: PlayerId, _label: &str) -> Result<(), Self::Error> {
        self.table.entry(player).or_default().win_count += 1;
        Ok(())
    }
}

/// What was reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsReport {
    pub played: Vec<PlayerId>,
    pub winner: PlayerId,
}

/// Reporting failures.
#[derive(Debug, Error)]
pub enum StatsError<E> {
    #[error("match has not finished (phase: {0})")]
    NotFinished(Phase),

    #[error("stats store failed: {0}")]
    Store(E),
}

/// Record plays and the win for a finished match.
///
/// Plays are recorded in seat order, then the win. The store calls are not
/// transactional: if one fails, the calls before it stay recorded and the
/// rest are skipped. Stores that need all-or-nothing reporting should stage
/// writes and commit them only once `report_match` returns `Ok`.
pub fn report_match<D, S>(
    game: &Match<D>,
    store: &mut S,
) -> Result<StatsReport, StatsError<S::Error>>
where
    D: Dealer,
    S: StatsStore,
{
    let winner = game
        .winner()
        .ok_or(StatsError::NotFinished(game.phase()))?;

    let mut played = Vec::with_capacity(game.players().len());
    for player in game.players() {
        store
            .record_play(player.id, &player.label)
            .map_err(StatsError::Store)?;
        played.push(player.id);
    }
    store
        .record_win(winner.player, &winner.label)
        .map_err(StatsError::Store)?;

    info!(channel = %game.channel(), winner = %winner.player, "match stats reported");
    Ok(StatsReport {
        played,
        winner: winner.player,
    })
}
