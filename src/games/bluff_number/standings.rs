//! Read-only ranking projections: scoreboard, final results, match summary.
//!
//! Ranking is a stable sort on descending score, so ties keep roster
//! (join) order.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId};
use crate::ledger::RoundLedger;

const MEDALS: [&str; 3] = ["\u{1f947}", "\u{1f948}", "\u{1f949}"];

/// One ranked roster entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based position in the ranking. Tied scores still get distinct ranks.
    pub rank: usize,
    pub player: PlayerId,
    pub label: String,
    pub score: i32,
}

/// Rank a roster by descending score, ties in roster order.
pub fn rank_players<'a>(players: impl IntoIterator<Item = &'a Player>) -> Vec<Standing> {
    let mut sorted: Vec<&Player> = players.into_iter().collect();
    sorted.sort_by_key(|p| Reverse(p.score));
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, p)| Standing {
            rank: i + 1,
            player: p.id,
            label: p.label.clone(),
            score: p.score,
        })
        .collect()
}

fn medal_line(standing: &Standing) -> String {
    let marker = match MEDALS.get(standing.rank - 1) {
        Some(medal) => (*medal).to_string(),
        None => format!("{}.", standing.rank),
    };
    format!("{} {}: {} points", marker, standing.label, standing.score)
}

/// Current ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard(pub Vec<Standing>);

impl Scoreboard {
    /// Ranked entries.
    #[must_use]
    pub fn standings(&self) -> &[Standing] {
        &self.0
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<String> = self
            .0
            .iter()
            .map(|s| format!("{}. {}: {} points", s.rank, s.label, s.score))
            .collect();
        f.write_str(&lines.join("\n"))
    }
}

/// Podium-style final ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalResults(pub Vec<Standing>);

impl FinalResults {
    /// Top of the ranking.
    #[must_use]
    pub fn winner(&self) -> Option<&Standing> {
        self.0.first()
    }

    /// Ranked entries.
    #[must_use]
    pub fn standings(&self) -> &[Standing] {
        &self.0
    }
}

impl std::fmt::Display for FinalResults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(winner) = self.winner() {
            writeln!(f, "Winner: {}!", winner.label)?;
            writeln!(f)?;
        }
        let lines: Vec<String> = self.0.iter().map(medal_line).collect();
        f.write_str(&lines.join("\n"))
    }
}

/// Every resolved round plus the final ranking.
#[derive(Clone, Debug)]
pub struct MatchSummary<'a> {
    ledger: &'a RoundLedger,
    standings: Vec<Standing>,
}

impl<'a> MatchSummary<'a> {
    pub(crate) fn new(ledger: &'a RoundLedger, standings: Vec<Standing>) -> Self {
        Self { ledger, standings }
    }

    /// Rounds covered by the summary.
    #[must_use]
    pub fn ledger(&self) -> &RoundLedger {
        self.ledger
    }

    /// Final ranking.
    #[must_use]
    pub fn standings(&self) -> &[Standing] {
        &self.standings
    }
}

impl std::fmt::Display for MatchSummary<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for record in self.ledger {
            writeln!(f, "{}", record)?;
            writeln!(f)?;
        }
        write!(f, "--- Final Results ---")?;
        for standing in &self.standings {
            write!(f, "\n{}", medal_line(standing))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(scores: &[(&str, i32)]) -> Vec<Player> {
        scores
            .iter()
            .enumerate()
            .map(|(i, (label, score))| {
                let mut p = Player::new(PlayerId::new(i as u64), *label);
                p.score = *score;
                p
            })
            .collect()
    }

    #[test]
    fn test_rank_descending_stable() {
        let players = roster(&[("A", -1), ("B", 0), ("C", -1), ("D", 0)]);
        let ranked = rank_players(&players);
        let labels: Vec<_> = ranked.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["B", "D", "A", "C"]);
        let ranks: Vec<_> = ranked.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_scoreboard_display() {
        let board = Scoreboard(rank_players(&roster(&[("A", -1), ("B", 0)])));
        assert_eq!(board.to_string(), "1. B: 0 points\n2. A: -1 points");
    }

    #[test]
    fn test_final_results_display_beyond_podium() {
        let results = FinalResults(rank_players(&roster(&[
            ("A", 0),
            ("B", -1),
            ("C", -2),
            ("D", -3),
        ])));
        assert_eq!(results.winner().map(|s| s.label.as_str()), Some("A"));
        assert_eq!(
            results.to_string(),
            "Winner: A!\n\n\u{1f947} A: 0 points\n\u{1f948} B: -1 points\n\u{1f949} C: -2 points\n4. D: -3 points"
        );
    }

    #[test]
    fn test_empty_summary() {
        let ledger = RoundLedger::new();
        let summary = MatchSummary::new(&ledger, rank_players(&roster(&[("A", 0)])));
        assert_eq!(summary.to_string(), "--- Final Results ---\n\u{1f947} A: 0 points");
    }
}
