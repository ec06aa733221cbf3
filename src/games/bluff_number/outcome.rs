//! Per-command success payloads.
//!
//! Each command returns exactly the fields it can produce. `Display`
//! renders the message a host shows to the channel.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Seat};

/// `add_player` succeeded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joined {
    pub player: PlayerId,
    pub label: String,
    pub seat: Seat,
    /// Roster size after the join.
    pub roster_size: usize,
    pub capacity: usize,
}

impl Joined {
    /// Whether this join filled the roster.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.roster_size == self.capacity
    }
}

impl std::fmt::Display for Joined {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} joined! ({}/{})", self.label, self.roster_size, self.capacity)
    }
}

/// A round was dealt and is waiting for its opener.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStarted {
    pub round_number: u32,
    pub max_rounds: u32,
    pub opener: PlayerId,
    pub opener_label: String,
}

impl std::fmt::Display for RoundStarted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Round {}/{} begins! {} declares first.",
            self.round_number, self.max_rounds, self.opener_label
        )
    }
}

/// `make_declaration` succeeded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declared {
    pub player: PlayerId,
    pub label: String,
    pub value: u32,
    /// Player now on turn.
    pub next: PlayerId,
    pub next_label: String,
}

impl std::fmt::Display for Declared {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} declares the total is at least {}!", self.label, self.value)
    }
}

/// Which side of a challenge was right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// True sum is below the claim; the declarer loses a point.
    DeclarerCaught,
    /// True sum meets the claim; the challenger loses a point.
    DeclarerVindicated,
}

/// `make_challenge` succeeded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeResult {
    pub verdict: Verdict,
    pub challenger: PlayerId,
    pub challenger_label: String,
    pub declarer: PlayerId,
    pub declarer_label: String,
    pub declared: u32,
    pub actual_sum: u32,
    /// Every secret in seat order.
    pub secrets: Vec<u32>,
    pub winner: PlayerId,
    pub loser: PlayerId,
}

impl std::fmt::Display for ChallengeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let breakdown = self
            .secrets
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" + ");
        writeln!(f, "Declared: total at least {}", self.declared)?;
        writeln!(f, "Actual total: {} ({})", self.actual_sum, breakdown)?;
        writeln!(f)?;
        match self.verdict {
            Verdict::DeclarerCaught => write!(
                f,
                "The total is below the claim, so {}'s challenge succeeds!\n{} loses 1 point.",
                self.challenger_label, self.declarer_label
            ),
            Verdict::DeclarerVindicated => write!(
                f,
                "The total meets the claim, so {}'s declaration was right!\n{} loses 1 point.",
                self.declarer_label, self.challenger_label
            ),
        }
    }
}

/// `on_timeout` forfeited the turn player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedOut {
    pub player: PlayerId,
    pub label: String,
}

impl std::fmt::Display for TimedOut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ran out of time!\n{} loses 1 point.", self.label, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_message() {
        let joined = Joined {
            player: PlayerId::new(1),
            label: "Alice".into(),
            seat: Seat::new(1),
            roster_size: 2,
            capacity: 3,
        };
        assert_eq!(joined.to_string(), "Alice joined! (2/3)");
        assert!(!joined.is_full());
    }

    #[test]
    fn test_challenge_message_caught() {
        let result = ChallengeResult {
            verdict: Verdict::DeclarerCaught,
            challenger: PlayerId::new(3),
            challenger_label: "C".into(),
            declarer: PlayerId::new(2),
            declarer_label: "B".into(),
            declared: 16,
            actual_sum: 15,
            secrets: vec![7, 3, 5],
            winner: PlayerId::new(3),
            loser: PlayerId::new(2),
        };
        assert_eq!(
            result.to_string(),
            "Declared: total at least 16\n\
             Actual total: 15 (7 + 3 + 5)\n\
             \n\
             The total is below the claim, so C's challenge succeeds!\n\
             B loses 1 point."
        );
    }

    #[test]
    fn test_timeout_message() {
        let timed_out = TimedOut { player: PlayerId::new(1), label: "A".into() };
        assert_eq!(timed_out.to_string(), "A ran out of time!\nA loses 1 point.");
    }
}
