//! Channel → match routing.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::info;

use crate::core::{ChannelId, GameRng, MatchConfig, MatchError, PlayerId};
use crate::games::bluff_number::Match;
use crate::rules::SeededDealer;

/// Registry failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A match is already running in this channel.
    #[error("a match is already in progress in {0}")]
    ChannelBusy(ChannelId),

    /// No match is running in this channel.
    #[error("no match in {0}")]
    UnknownChannel(ChannelId),

    #[error(transparent)]
    Match(#[from] MatchError),
}

/// Active matches keyed by channel.
///
/// Each match gets its own RNG stream forked from the registry seed, so a
/// registry built from the same seed opens matches with the same deals.
#[derive(Debug)]
pub struct MatchRegistry {
    config: MatchConfig,
    seeds: GameRng,
    matches: FxHashMap<ChannelId, Match>,
}

impl MatchRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new(config: MatchConfig, seed: u64) -> Self {
        Self {
            config,
            seeds: GameRng::new(seed),
            matches: FxHashMap::default(),
        }
    }

    /// Configuration used for every new match.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Open a lobby in `channel` with its creator already joined.
    pub fn open(
        &mut self,
        channel: ChannelId,
        host: PlayerId,
        host_label: impl Into<String>,
    ) -> Result<&mut Match, RegistryError> {
        match self.matches.entry(channel) {
            Entry::Occupied(_) => Err(RegistryError::ChannelBusy(channel)),
            Entry::Vacant(slot) => {
                let dealer = SeededDealer::from_rng(self.seeds.fork());
                let mut game = Match::new(channel, host, self.config.clone(), dealer);
                game.add_player(host, host_label)?;
                info!(%channel, %host, "lobby opened");
                Ok(slot.insert(game))
            }
        }
    }

    #[must_use]
    pub fn get(&self, channel: ChannelId) -> Option<&Match> {
        self.matches.get(&channel)
    }

    pub fn get_mut(&mut self, channel: ChannelId) -> Option<&mut Match> {
        self.matches.get_mut(&channel)
    }

    /// Like [`get_mut`](Self::get_mut), but a missing match is an error.
    pub fn require_mut(&mut self, channel: ChannelId) -> Result<&mut Match, RegistryError> {
        self.matches
            .get_mut(&channel)
            .ok_or(RegistryError::UnknownChannel(channel))
    }

    /// Remove a match (finished, or an abandoned lobby).
    pub fn close(&mut self, channel: ChannelId) -> Option<Match> {
        let closed = self.matches.remove(&channel);
        if let Some(game) = &closed {
            info!(%channel, phase = %game.phase(), "match closed");
        }
        closed
    }

    /// Number of active matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Channels with an active match, in no particular order.
    pub fn channels(&self) -> impl Iterator<Item = ChannelId> + '_ {
        self.matches.keys().copied()
    }
}
