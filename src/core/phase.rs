//! Match phases.
//!
//! ```text
//! Lobby ──start──▶ Turn ──challenge/timeout──▶ RoundEnd ──advance──▶ Turn
//!                                                  │
//!                                                  └──advance (last round)──▶ GameOver
//! ```
//!
//! `Lobby` is the only phase in which the roster may change.

use serde::{Deserialize, Serialize};

/// Match phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the roster to fill.
    #[default]
    Lobby,
    /// A round is in progress and one seat is on turn.
    Turn,
    /// The round resolved; waiting for the host to advance.
    RoundEnd,
    /// Terminal. Only read-only queries are accepted.
    GameOver,
}

impl Phase {
    /// Whether the match has finished.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Phase::GameOver
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Lobby => "lobby",
            Phase::Turn => "turn",
            Phase::RoundEnd => "round end",
            Phase::GameOver => "game over",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lobby() {
        assert_eq!(Phase::default(), Phase::Lobby);
    }

    #[test]
    fn test_only_game_over_is_terminal() {
        assert!(!Phase::Lobby.is_terminal());
        assert!(!Phase::Turn.is_terminal());
        assert!(!Phase::RoundEnd.is_terminal());
        assert!(Phase::GameOver.is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(Phase::RoundEnd.to_string(), "round end");
    }
}
