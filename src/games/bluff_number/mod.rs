//! Bluff Number.
//!
//! Each player is dealt a hidden number from 1 to 10. Starting from the
//! round's opener, players take turns claiming "the total of everyone's
//! numbers is at least X", each claim strictly higher than the last, or
//! challenge the standing claim:
//! - True total below the claim: the declarer loses a point
//! - Otherwise: the challenger loses a point
//!
//! A player who runs out of time loses a point. Three rounds make a match;
//! the highest score wins.

mod game;
mod outcome;
mod round;
mod snapshot;
mod standings;

pub use game::Match;
pub use outcome::{ChallengeResult, Declared, Joined, RoundStarted, TimedOut, Verdict};
pub use round::{Declaration, Round, TurnTicket};
pub use standings::{rank_players, FinalResults, MatchSummary, Scoreboard, Standing};
