//! Match bindings for Python.

use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::core::{ChannelId, MatchConfig, PlayerId};
use crate::games::bluff_number::Match;

use super::py_core::{config_err, match_err, snapshot_err, PyStanding};

/// Python wrapper for a seeded [`Match`].
#[pyclass(name = "BluffMatch")]
pub struct PyBluffMatch {
    game: Match,
}

#[pymethods]
impl PyBluffMatch {
    /// Create a match with the reference configuration.
    ///
    /// # Arguments
    /// - channel_id: Channel or session the match belongs to
    /// - host_id: Creator of the match (not auto-joined)
    /// - seed: RNG seed for deterministic deals
    /// - player_count: Required roster size
    /// - max_rounds: Rounds per match
    #[new]
    #[pyo3(signature = (channel_id, host_id, seed = 42, player_count = 3, max_rounds = 3))]
    fn new(
        channel_id: u64,
        host_id: u64,
        seed: u64,
        player_count: usize,
        max_rounds: u32,
    ) -> PyResult<Self> {
        let config = MatchConfig {
            player_count,
            max_rounds,
            ..MatchConfig::default()
        };
        config.validate().map_err(config_err)?;
        Ok(Self {
            game: Match::seeded(ChannelId::new(channel_id), PlayerId::new(host_id), config, seed),
        })
    }

    /// Join the lobby. Returns the roster size.
    fn add_player(&mut self, player_id: u64, label: String) -> PyResult<usize> {
        self.game
            .add_player(PlayerId::new(player_id), label)
            .map(|joined| joined.roster_size)
            .map_err(match_err)
    }

    fn can_start(&self) -> bool {
        self.game.can_start()
    }

    /// Deal round 1. Returns the announcement.
    fn start_game(&mut self) -> PyResult<String> {
        self.game
            .start_game()
            .map(|started| started.to_string())
            .map_err(match_err)
    }

    /// Raise the claim. Returns the announcement.
    fn make_declaration(&mut self, player_id: u64, value: u32) -> PyResult<String> {
        self.game
            .make_declaration(PlayerId::new(player_id), value)
            .map(|declared| declared.to_string())
            .map_err(match_err)
    }

    fn can_challenge(&self) -> bool {
        self.game.can_challenge()
    }

    /// Challenge. Returns `(message, loser_id, winner_id)`.
    fn make_challenge(&mut self, player_id: u64) -> PyResult<(String, u64, u64)> {
        self.game
            .make_challenge(PlayerId::new(player_id))
            .map(|result| (result.to_string(), result.loser.raw(), result.winner.raw()))
            .map_err(match_err)
    }

    /// Forfeit the turn player. Returns the announcement.
    fn on_timeout(&mut self) -> PyResult<String> {
        self.game
            .on_timeout()
            .map(|timed_out| timed_out.to_string())
            .map_err(match_err)
    }

    /// Returns False once the match is over.
    fn advance_to_next_round_or_end(&mut self) -> PyResult<bool> {
        self.game.advance_to_next_round_or_end().map_err(match_err)
    }

    /// `(player_id, label)` of the turn player.
    fn current_turn_player(&self) -> Option<(u64, String)> {
        self.game
            .current_turn_player()
            .map(|p| (p.id.raw(), p.label.clone()))
    }

    fn min_declaration(&self) -> u32 {
        self.game.min_declaration()
    }

    fn max_declaration(&self) -> u32 {
        self.game.max_declaration()
    }

    /// The caller's own secret.
    fn secret_for(&self, player_id: u64) -> Option<u32> {
        self.game.secret_for(PlayerId::new(player_id))
    }

    fn scoreboard(&self) -> String {
        self.game.scoreboard().to_string()
    }

    fn final_results(&self) -> String {
        self.game.final_results().to_string()
    }

    fn match_summary(&self) -> String {
        self.game.match_summary().to_string()
    }

    fn standings(&self) -> Vec<PyStanding> {
        self.game
            .scoreboard()
            .0
            .into_iter()
            .map(PyStanding)
            .collect()
    }

    #[getter]
    fn phase(&self) -> String {
        self.game.phase().to_string()
    }

    #[getter]
    fn round_number(&self) -> u32 {
        self.game.round_number()
    }

    /// Encode the match as bytes.
    fn snapshot<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self.game.snapshot().map_err(snapshot_err)?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    /// Rebuild a match from `snapshot()` output.
    #[staticmethod]
    fn restore(bytes: &[u8]) -> PyResult<Self> {
        let game = Match::restore(bytes).map_err(snapshot_err)?;
        Ok(Self { game })
    }

    fn __repr__(&self) -> String {
        format!(
            "BluffMatch(channel={}, phase={}, round={})",
            self.game.channel().0,
            self.game.phase(),
            self.game.round_number()
        )
    }
}
