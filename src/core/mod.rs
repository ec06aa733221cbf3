//! Core engine types: players, seats, phases, RNG, configuration, errors.
//!
//! Nothing in here knows the rules of a round; the game module builds on
//! these types.

pub mod config;
pub mod error;
pub mod phase;
pub mod player;
pub mod rng;

pub use config::{DeclarationCeiling, MatchConfig};
pub use error::{ConfigError, ErrorKind, MatchError, SnapshotError};
pub use phase::Phase;
pub use player::{ChannelId, Player, PlayerId, Seat};
pub use rng::{GameRng, GameRngState};
