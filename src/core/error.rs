//! Error types.
//!
//! Every rejection is local and recoverable: the command is refused and
//! the match is left exactly as it was.

use thiserror::Error;

use super::phase::Phase;
use super::player::PlayerId;

/// Rejection reasons for match commands.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Command is not legal in the current phase.
    #[error("command requires the {expected} phase, but the match is in the {actual} phase")]
    InvalidPhase { expected: Phase, actual: Phase },

    /// Player id is already on the roster.
    #[error("{0} has already joined")]
    AlreadyJoined(PlayerId),

    /// Roster is at capacity.
    #[error("the match is full ({capacity} players)")]
    RosterFull { capacity: usize },

    /// `start_game` before the roster is full.
    #[error("waiting for players ({joined}/{required})")]
    RosterIncomplete { joined: usize, required: usize },

    /// Someone other than the turn player tried to act.
    #[error("it is not your turn ({expected} is on turn, got {got})")]
    NotYourTurn { expected: PlayerId, got: PlayerId },

    /// Declaration does not exceed the standing claim or the floor.
    #[error("declaration must be at least {min}, got {got}")]
    BelowMinimum { min: u32, got: u32 },

    /// Declaration exceeds the ceiling.
    #[error("declaration must be at most {max}, got {got}")]
    AboveMaximum { max: u32, got: u32 },

    /// Challenge with nothing to challenge.
    #[error("no declaration has been made this round")]
    NoDeclarationYet,

    /// Host timer fired for a turn that already ended.
    #[error("the turn this timeout was scheduled for has already ended")]
    StaleTurn,
}

/// Fieldless discriminator for [`MatchError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidPhase,
    AlreadyJoined,
    RosterFull,
    RosterIncomplete,
    NotYourTurn,
    BelowMinimum,
    AboveMaximum,
    NoDeclarationYet,
    StaleTurn,
}

impl MatchError {
    /// Shorthand for a phase mismatch.
    pub(crate) fn phase(expected: Phase, actual: Phase) -> Self {
        Self::InvalidPhase { expected, actual }
    }

    /// Category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatchError::InvalidPhase { .. } => ErrorKind::InvalidPhase,
            MatchError::AlreadyJoined(_) => ErrorKind::AlreadyJoined,
            MatchError::RosterFull { .. } => ErrorKind::RosterFull,
            MatchError::RosterIncomplete { .. } => ErrorKind::RosterIncomplete,
            MatchError::NotYourTurn { .. } => ErrorKind::NotYourTurn,
            MatchError::BelowMinimum { .. } => ErrorKind::BelowMinimum,
            MatchError::AboveMaximum { .. } => ErrorKind::AboveMaximum,
            MatchError::NoDeclarationYet => ErrorKind::NoDeclarationYet,
            MatchError::StaleTurn => ErrorKind::StaleTurn,
        }
    }
}

/// Configuration that no match can be played under.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("player count must be 1-255, got {0}")]
    PlayerCount(usize),

    #[error("must play at least 1 round")]
    NoRounds,

    #[error("secret range must not be empty")]
    EmptySecretRange,

    #[error("declaration floor must be positive")]
    ZeroFloor,

    #[error("Declaration ceiling overflows ({players} players with secrets up to {max_secret})")]
    CeilingOverflow { players: usize, max_secret: u32 },

    #[error("Declaration ceiling {ceiling} is below floor {floor}")]
    CeilingBelowFloor { ceiling: u32, floor: u32 },
}

/// Snapshot encode/decode failure.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Encode(#[source] bincode::Error),

    #[error("snapshot decoding failed: {0}")]
    Decode(#[source] bincode::Error),

    /// Bytes decoded, but into a match no sequence of commands could reach.
    #[error("snapshot is inconsistent: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(
            MatchError::phase(Phase::Turn, Phase::Lobby).kind(),
            ErrorKind::InvalidPhase
        );
        assert_eq!(MatchError::NoDeclarationYet.kind(), ErrorKind::NoDeclarationYet);
        assert_eq!(
            MatchError::BelowMinimum { min: 13, got: 12 }.kind(),
            ErrorKind::BelowMinimum
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            MatchError::RosterFull { capacity: 3 }.to_string(),
            "the match is full (3 players)"
        );
        assert_eq!(
            MatchError::phase(Phase::Lobby, Phase::Turn).to_string(),
            "command requires the lobby phase, but the match is in the turn phase"
        );
        assert_eq!(
            MatchError::AboveMaximum { max: 30, got: 31 }.to_string(),
            "declaration must be at most 30, got 31"
        );
    }
}
