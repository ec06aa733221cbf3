//! Round records: what was dealt, what was said, how it ended.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;

/// One player's secret for a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretEntry {
    pub player: PlayerId,
    pub label: String,
    pub value: u32,
}

/// A public action taken during a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogEntry {
    /// "The total is at least `value`."
    Declaration { label: String, value: u32 },
    /// Challenge of the standing declaration.
    Challenge { label: String },
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogEntry::Declaration { label, value } => write!(f, "{}: at least {}", label, value),
            LogEntry::Challenge { label } => write!(f, "{}: challenge!", label),
        }
    }
}

/// How a round was resolved. Every variant names the player who lost a point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// True sum was below the claim; the declarer loses.
    ChallengeSucceeded {
        declarer: PlayerId,
        declarer_label: String,
        declared: u32,
        actual_sum: u32,
    },
    /// True sum met the claim; the challenger loses.
    ChallengeFailed {
        challenger: PlayerId,
        challenger_label: String,
        declared: u32,
        actual_sum: u32,
    },
    /// Turn player ran out of time.
    TimedOut { player: PlayerId, label: String },
}

impl RoundOutcome {
    /// Player who was docked a point.
    #[must_use]
    pub fn loser(&self) -> PlayerId {
        match self {
            RoundOutcome::ChallengeSucceeded { declarer, .. } => *declarer,
            RoundOutcome::ChallengeFailed { challenger, .. } => *challenger,
            RoundOutcome::TimedOut { player, .. } => *player,
        }
    }

    /// Sum revealed at resolution. Timeouts reveal nothing.
    #[must_use]
    pub fn disclosed_sum(&self) -> Option<u32> {
        match self {
            RoundOutcome::ChallengeSucceeded { actual_sum, .. }
            | RoundOutcome::ChallengeFailed { actual_sum, .. } => Some(*actual_sum),
            RoundOutcome::TimedOut { .. } => None,
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::ChallengeSucceeded { declarer_label, .. } => {
                write!(f, "Challenge succeeded! {} -1 point", declarer_label)
            }
            RoundOutcome::ChallengeFailed { challenger_label, .. } => {
                write!(f, "Challenge failed! {} -1 point", challenger_label)
            }
            RoundOutcome::TimedOut { label, .. } => write!(f, "Timeout! {} -1 point", label),
        }
    }
}

/// In-progress log of the current round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundDraft {
    round_number: u32,
    secrets: Vec<SecretEntry>,
    entries: SmallVec<[LogEntry; 8]>,
}

impl RoundDraft {
    /// Start a draft with the secrets just dealt.
    pub fn new(round_number: u32, secrets: Vec<SecretEntry>) -> Self {
        Self {
            round_number,
            secrets,
            entries: SmallVec::new(),
        }
    }

    /// Append a public action.
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Actions so far.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Seal the draft into an immutable record.
    #[must_use]
    pub fn finish(self, outcome: RoundOutcome) -> RoundRecord {
        RoundRecord {
            round_number: self.round_number,
            secrets: self.secrets,
            entries: self.entries,
            outcome,
        }
    }
}

/// Immutable snapshot of a resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    round_number: u32,
    secrets: Vec<SecretEntry>,
    entries: SmallVec<[LogEntry; 8]>,
    outcome: RoundOutcome,
}

impl RoundRecord {
    /// 1-based round number.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Secrets dealt this round, in seat order.
    #[must_use]
    pub fn secrets(&self) -> &[SecretEntry] {
        &self.secrets
    }

    /// Declarations and the closing challenge, in order.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Resolution.
    #[must_use]
    pub fn outcome(&self) -> &RoundOutcome {
        &self.outcome
    }

    /// Sum of the dealt secrets.
    #[must_use]
    pub fn actual_sum(&self) -> u32 {
        self.secrets.iter().map(|s| s.value).sum()
    }

    /// `A:7 / B:3 / C:5`
    #[must_use]
    pub fn secrets_line(&self) -> String {
        self.secrets
            .iter()
            .map(|s| format!("{}:{}", s.label, s.value))
            .collect::<Vec<_>>()
            .join(" / ")
    }

    /// `A: at least 12 → B: at least 16 → C: challenge!`
    #[must_use]
    pub fn entries_line(&self) -> String {
        self.entries
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" → ")
    }
}

impl std::fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "--- Round {} ---", self.round_number)?;
        writeln!(f, "Numbers: {} (total: {})", self.secrets_line(), self.actual_sum())?;
        writeln!(f, "{}", self.entries_line())?;
        write!(f, "{}", self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secrets() -> Vec<SecretEntry> {
        [("A", 7), ("B", 3), ("C", 5)]
            .iter()
            .enumerate()
            .map(|(i, (label, value))| SecretEntry {
                player: PlayerId::new(i as u64 + 1),
                label: label.to_string(),
                value: *value,
            })
            .collect()
    }

    #[test]
    fn test_record_rendering() {
        let mut draft = RoundDraft::new(1, secrets());
        draft.push(LogEntry::Declaration { label: "A".into(), value: 12 });
        draft.push(LogEntry::Declaration { label: "B".into(), value: 16 });
        draft.push(LogEntry::Challenge { label: "C".into() });

        let record = draft.finish(RoundOutcome::ChallengeSucceeded {
            declarer: PlayerId::new(2),
            declarer_label: "B".into(),
            declared: 16,
            actual_sum: 15,
        });

        assert_eq!(record.actual_sum(), 15);
        assert_eq!(record.secrets_line(), "A:7 / B:3 / C:5");
        assert_eq!(
            record.entries_line(),
            "A: at least 12 → B: at least 16 → C: challenge!"
        );
        assert_eq!(
            record.to_string(),
            "--- Round 1 ---\n\
             Numbers: A:7 / B:3 / C:5 (total: 15)\n\
             A: at least 12 → B: at least 16 → C: challenge!\n\
             Challenge succeeded! B -1 point"
        );
    }

    #[test]
    fn test_outcome_loser_and_sum() {
        let failed = RoundOutcome::ChallengeFailed {
            challenger: PlayerId::new(2),
            challenger_label: "B".into(),
            declared: 12,
            actual_sum: 15,
        };
        assert_eq!(failed.loser(), PlayerId::new(2));
        assert_eq!(failed.disclosed_sum(), Some(15));

        let timeout = RoundOutcome::TimedOut { player: PlayerId::new(3), label: "C".into() };
        assert_eq!(timeout.loser(), PlayerId::new(3));
        assert_eq!(timeout.disclosed_sum(), None);
        assert_eq!(timeout.to_string(), "Timeout! C -1 point");
    }

    #[test]
    fn test_timeout_round_has_empty_entries_line() {
        let record = RoundDraft::new(2, secrets())
            .finish(RoundOutcome::TimedOut { player: PlayerId::new(1), label: "A".into() });
        assert!(record.entries().is_empty());
        assert_eq!(record.entries_line(), "");
    }
}
