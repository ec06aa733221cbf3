//! # bluff-number
//!
//! A turn-based bluff/declaration game engine.
//!
//! ## Design Principles
//!
//! 1. **Pure state machine**: No I/O, no clock, no globals. Every command
//!    is a synchronous transition; hosts own timers and rendering.
//!
//! 2. **Atomic commands**: A command is validated before anything is
//!    touched. Rejections leave the match unchanged.
//!
//! 3. **Typed outcomes**: Each command returns its own success payload or a
//!    [`MatchError`]; nothing is stringly typed except the rendered text.
//!
//! ## Architecture
//!
//! - **Deterministic dealing**: Secrets come from a [`Dealer`]. The default
//!   [`SeededDealer`] draws from a ChaCha8 stream, so a seed plus a command
//!   log replays a match exactly.
//!
//! - **Append-only ledger**: Resolved rounds land in a [`RoundLedger`]
//!   backed by `im-rs`, which makes whole-match clones and snapshots cheap.
//!
//! ## Modules
//!
//! - `core`: Player ids, seats, phases, RNG, configuration, errors
//! - `rules`: Dealer trait and implementations
//! - `games`: The Bluff Number match engine and its projections
//! - `ledger`: Round records and the append-only ledger
//! - `host`: Channel registry and stats reporting for host applications
//!
//! ## Example
//!
//! ```
//! use bluff_number::{ChannelId, Match, MatchConfig, Phase, PlayerId, ScriptedDealer};
//!
//! let (a, b, c) = (PlayerId::new(1), PlayerId::new(2), PlayerId::new(3));
//! let dealer = ScriptedDealer::repeating(vec![7, 3, 5]);
//! let mut game = Match::new(ChannelId::new(1), a, MatchConfig::default(), dealer);
//!
//! game.add_player(a, "A").unwrap();
//! game.add_player(b, "B").unwrap();
//! game.add_player(c, "C").unwrap();
//! game.start_game().unwrap();
//!
//! game.make_declaration(a, 12).unwrap();
//! game.make_declaration(b, 16).unwrap();
//! let result = game.make_challenge(c).unwrap();
//!
//! assert_eq!(result.actual_sum, 15);
//! assert_eq!(result.loser, b);
//! assert_eq!(game.phase(), Phase::RoundEnd);
//! ```

pub mod core;
pub mod games;
pub mod host;
pub mod ledger;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ChannelId, ConfigError, DeclarationCeiling, ErrorKind, GameRng, GameRngState, MatchConfig,
    MatchError, Phase, Player, PlayerId, Seat, SnapshotError,
};

pub use crate::games::bluff_number::{
    ChallengeResult, Declaration, Declared, FinalResults, Joined, Match, MatchSummary, Round,
    RoundStarted, Scoreboard, Standing, TimedOut, TurnTicket, Verdict,
};

pub use crate::ledger::{LogEntry, RoundLedger, RoundOutcome, RoundRecord, SecretEntry};

pub use crate::rules::{Dealer, ScriptedDealer, SeededDealer};

pub use crate::host::{
    report_match, InMemoryStats, MatchRegistry, PlayerStats, RegistryError, StatsError,
    StatsReport, StatsStore,
};
