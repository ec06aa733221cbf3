//! Match engine.
//!
//! Every command validates first and mutates second, so a rejected command
//! leaves the match untouched. The engine holds no clock and no global
//! state; hosts own scheduling and serialize calls per match.

use std::time::Instant;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{ChannelId, MatchConfig, MatchError, Phase, Player, PlayerId, Seat};
use crate::ledger::{LogEntry, RoundDraft, RoundLedger, RoundOutcome, SecretEntry};
use crate::rules::{Dealer, SeededDealer};

use super::outcome::{ChallengeResult, Declared, Joined, RoundStarted, TimedOut, Verdict};
use super::round::{Round, TurnTicket};
use super::standings::{rank_players, FinalResults, MatchSummary, Scoreboard, Standing};

/// A single Bluff Number match.
///
/// Generic over the [`Dealer`] so tests and replays can pin secrets.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "D: Serialize", deserialize = "D: DeserializeOwned"))]
pub struct Match<D = SeededDealer> {
    pub(super) channel: ChannelId,
    pub(super) host: PlayerId,
    pub(super) config: MatchConfig,
    pub(super) roster: Vec<Player>,
    pub(super) phase: Phase,
    pub(super) round: Option<Round>,
    pub(super) round_number: u32,
    pub(super) ledger: RoundLedger,
    pub(super) dealer: D,
}

impl Match<SeededDealer> {
    /// Create a match dealing from a seeded RNG.
    #[must_use]
    pub fn seeded(channel: ChannelId, host: PlayerId, config: MatchConfig, seed: u64) -> Self {
        Self::new(channel, host, config, SeededDealer::new(seed))
    }
}

impl<D: Dealer> Match<D> {
    /// Create a match in the lobby with an empty roster.
    ///
    /// The host is recorded but not joined; hosts that auto-join the
    /// creator call [`add_player`](Self::add_player) themselves.
    ///
    /// # Panics
    ///
    /// If `config` fails [`MatchConfig::validate`].
    pub fn new(channel: ChannelId, host: PlayerId, config: MatchConfig, dealer: D) -> Self {
        if let Err(err) = config.validate() {
            panic!("Invalid match config: {}", err);
        }
        Self {
            channel,
            host,
            config,
            roster: Vec::new(),
            phase: Phase::Lobby,
            round: None,
            round_number: 0,
            ledger: RoundLedger::new(),
            dealer,
        }
    }

    // === Accessors ===

    /// Channel this match is bound to.
    #[must_use]
    pub fn channel(&self) -> ChannelId {
        self.channel
    }

    /// Player who created the match.
    #[must_use]
    pub fn host(&self) -> PlayerId {
        self.host
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Roster in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.roster
    }

    /// Look up a roster entry by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.roster.iter().find(|p| p.id == id)
    }

    /// Round in progress. `None` outside the `Turn` phase.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Rounds dealt so far (the current round's number while one is live).
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    #[must_use]
    pub fn ledger(&self) -> &RoundLedger {
        &self.ledger
    }

    #[must_use]
    pub fn dealer(&self) -> &D {
        &self.dealer
    }

    // === Lobby ===

    /// Add a player to the lobby. Join order fixes the seat.
    pub fn add_player(
        &mut self,
        id: PlayerId,
        label: impl Into<String>,
    ) -> Result<Joined, MatchError> {
        let label = label.into();
        self.check_join(id).inspect_err(|e| self.log_rejection("add_player", e))?;

        let seat = Seat::new(self.roster.len() as u8);
        self.roster.push(Player::new(id, label.clone()));
        debug!(channel = %self.channel, player = %id, seat = seat.0, "player joined");

        Ok(Joined {
            player: id,
            label,
            seat,
            roster_size: self.roster.len(),
            capacity: self.config.player_count,
        })
    }

    fn check_join(&self, id: PlayerId) -> Result<(), MatchError> {
        self.require_phase(Phase::Lobby)?;
        if self.player(id).is_some() {
            return Err(MatchError::AlreadyJoined(id));
        }
        if self.roster.len() >= self.config.player_count {
            return Err(MatchError::RosterFull {
                capacity: self.config.player_count,
            });
        }
        Ok(())
    }

    /// True iff in the lobby with exactly a full roster.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.phase == Phase::Lobby && self.roster.len() == self.config.player_count
    }

    /// Deal round 1 and enter `Turn`.
    pub fn start_game(&mut self) -> Result<RoundStarted, MatchError> {
        self.check_start().inspect_err(|e| self.log_rejection("start_game", e))?;

        info!(channel = %self.channel, players = self.roster.len(), "match started");
        self.round_number = 0;
        Ok(self.start_new_round())
    }

    fn check_start(&self) -> Result<(), MatchError> {
        self.require_phase(Phase::Lobby)?;
        if self.roster.len() != self.config.player_count {
            return Err(MatchError::RosterIncomplete {
                joined: self.roster.len(),
                required: self.config.player_count,
            });
        }
        Ok(())
    }

    fn start_new_round(&mut self) -> RoundStarted {
        self.round_number += 1;
        let secrets = self
            .dealer
            .deal(self.roster.len(), self.config.secret_range.clone());
        for (player, secret) in self.roster.iter_mut().zip(&secrets) {
            player.secret = Some(*secret);
        }

        let entries = self
            .roster
            .iter()
            .zip(&secrets)
            .map(|(p, &value)| SecretEntry {
                player: p.id,
                label: p.label.clone(),
                value,
            })
            .collect();

        let opener = Seat::opener(self.round_number, self.roster.len());
        self.round = Some(Round::new(
            self.round_number,
            opener,
            RoundDraft::new(self.round_number, entries),
        ));
        self.phase = Phase::Turn;

        let opening = &self.roster[opener.index()];
        debug!(
            channel = %self.channel,
            round = self.round_number,
            opener = opener.0,
            "round dealt"
        );
        RoundStarted {
            round_number: self.round_number,
            max_rounds: self.config.max_rounds,
            opener: opening.id,
            opener_label: opening.label.clone(),
        }
    }

    // === Turn queries ===

    /// Player on turn, while a round is live.
    #[must_use]
    pub fn current_turn_player(&self) -> Option<&Player> {
        self.round
            .as_ref()
            .map(|round| &self.roster[round.turn_seat().index()])
    }

    /// Smallest legal claim: the floor when nothing has been declared this
    /// round, otherwise one more than the standing claim.
    #[must_use]
    pub fn min_declaration(&self) -> u32 {
        match self.round.as_ref().and_then(Round::declaration) {
            Some(declaration) => declaration.value.saturating_add(1),
            None => self.config.declaration_floor,
        }
    }

    /// Largest legal claim.
    #[must_use]
    pub fn max_declaration(&self) -> u32 {
        self.config.max_declaration()
    }

    /// True iff at least one declaration stands this round.
    #[must_use]
    pub fn can_challenge(&self) -> bool {
        self.phase == Phase::Turn && self.round.as_ref().is_some_and(|r| r.turn_count() > 0)
    }

    /// Standing claim and the player who made it.
    #[must_use]
    pub fn standing_declaration(&self) -> Option<(u32, &Player)> {
        let declaration = self.round.as_ref()?.declaration()?;
        Some((declaration.value, &self.roster[declaration.seat.index()]))
    }

    /// A player's own secret for the current round.
    #[must_use]
    pub fn secret_for(&self, id: PlayerId) -> Option<u32> {
        self.player(id).and_then(|p| p.secret)
    }

    /// Ticket naming the current turn.
    #[must_use]
    pub fn turn_ticket(&self) -> Option<TurnTicket> {
        match self.phase {
            Phase::Turn => self.round.as_ref().map(Round::ticket),
            _ => None,
        }
    }

    /// When the host should fire `on_timeout` for a turn that began at
    /// `turn_started_at`.
    #[must_use]
    pub fn turn_deadline(&self, turn_started_at: Instant) -> Option<Instant> {
        match self.phase {
            Phase::Turn => Some(turn_started_at + self.config.turn_timeout),
            _ => None,
        }
    }

    // === Turn commands ===

    /// Raise the public claim.
    pub fn make_declaration(&mut self, id: PlayerId, value: u32) -> Result<Declared, MatchError> {
        let seat = self
            .check_declaration(id, value)
            .inspect_err(|e| self.log_rejection("make_declaration", e))?;

        let player_count = self.roster.len();
        let label = self.roster[seat.index()].label.clone();
        let round = self
            .round
            .as_mut()
            .ok_or(MatchError::phase(Phase::Turn, self.phase))?;
        round.record_declaration(value, player_count, label.clone());
        let next = &self.roster[round.turn_seat().index()];

        debug!(
            channel = %self.channel,
            round = self.round_number,
            seat = seat.0,
            value,
            "declaration accepted"
        );
        Ok(Declared {
            player: id,
            label,
            value,
            next: next.id,
            next_label: next.label.clone(),
        })
    }

    fn check_declaration(&self, id: PlayerId, value: u32) -> Result<Seat, MatchError> {
        let seat = self.check_turn_player(id)?;
        let min = self.min_declaration();
        if value < min {
            return Err(MatchError::BelowMinimum { min, got: value });
        }
        let max = self.max_declaration();
        if value > max {
            return Err(MatchError::AboveMaximum { max, got: value });
        }
        Ok(seat)
    }

    /// Challenge the standing claim and resolve the round.
    ///
    /// If the true sum is below the claim the declarer loses a point,
    /// otherwise the challenger does.
    pub fn make_challenge(&mut self, id: PlayerId) -> Result<ChallengeResult, MatchError> {
        let (challenger_seat, declared, declarer_seat) = self
            .check_challenge(id)
            .inspect_err(|e| self.log_rejection("make_challenge", e))?;

        let secrets: Vec<u32> = self.roster.iter().filter_map(|p| p.secret).collect();
        let actual_sum: u32 = secrets.iter().sum();
        let verdict = if actual_sum < declared {
            Verdict::DeclarerCaught
        } else {
            Verdict::DeclarerVindicated
        };
        let loser_seat = match verdict {
            Verdict::DeclarerCaught => declarer_seat,
            Verdict::DeclarerVindicated => challenger_seat,
        };
        self.roster[loser_seat.index()].score -= 1;

        let challenger = &self.roster[challenger_seat.index()];
        let declarer = &self.roster[declarer_seat.index()];
        let result = ChallengeResult {
            verdict,
            challenger: challenger.id,
            challenger_label: challenger.label.clone(),
            declarer: declarer.id,
            declarer_label: declarer.label.clone(),
            declared,
            actual_sum,
            secrets,
            winner: match verdict {
                Verdict::DeclarerCaught => challenger.id,
                Verdict::DeclarerVindicated => declarer.id,
            },
            loser: self.roster[loser_seat.index()].id,
        };
        let outcome = match verdict {
            Verdict::DeclarerCaught => RoundOutcome::ChallengeSucceeded {
                declarer: result.declarer,
                declarer_label: result.declarer_label.clone(),
                declared,
                actual_sum,
            },
            Verdict::DeclarerVindicated => RoundOutcome::ChallengeFailed {
                challenger: result.challenger,
                challenger_label: result.challenger_label.clone(),
                declared,
                actual_sum,
            },
        };
        let entry = LogEntry::Challenge {
            label: result.challenger_label.clone(),
        };

        info!(
            channel = %self.channel,
            round = self.round_number,
            declared,
            actual_sum,
            loser = %result.loser,
            "challenge resolved"
        );
        self.finish_round(Some(entry), outcome);
        Ok(result)
    }

    fn check_challenge(&self, id: PlayerId) -> Result<(Seat, u32, Seat), MatchError> {
        let seat = self.check_turn_player(id)?;
        let declaration = self
            .round
            .as_ref()
            .and_then(Round::declaration)
            .ok_or(MatchError::NoDeclarationYet)?;
        Ok((seat, declaration.value, declaration.seat))
    }

    /// Forfeit the turn player after the host's deadline elapsed.
    ///
    /// Docks the current turn player one point and ends the round. No
    /// declaration is required.
    pub fn on_timeout(&mut self) -> Result<TimedOut, MatchError> {
        let seat = self
            .check_live_round()
            .inspect_err(|e| self.log_rejection("on_timeout", e))?;
        Ok(self.forfeit(seat))
    }

    /// Like [`on_timeout`](Self::on_timeout), but only if `ticket` still
    /// names the current turn.
    pub fn on_timeout_for(&mut self, ticket: TurnTicket) -> Result<TimedOut, MatchError> {
        let seat = self
            .check_ticket(ticket)
            .inspect_err(|e| self.log_rejection("on_timeout_for", e))?;
        Ok(self.forfeit(seat))
    }

    fn check_ticket(&self, ticket: TurnTicket) -> Result<Seat, MatchError> {
        if self.turn_ticket() != Some(ticket) {
            return Err(MatchError::StaleTurn);
        }
        self.check_live_round()
    }

    fn forfeit(&mut self, seat: Seat) -> TimedOut {
        let player = &mut self.roster[seat.index()];
        player.score -= 1;
        let timed_out = TimedOut {
            player: player.id,
            label: player.label.clone(),
        };

        info!(
            channel = %self.channel,
            round = self.round_number,
            player = %timed_out.player,
            "turn timed out"
        );
        self.finish_round(
            None,
            RoundOutcome::TimedOut {
                player: timed_out.player,
                label: timed_out.label.clone(),
            },
        );
        timed_out
    }

    fn finish_round(&mut self, entry: Option<LogEntry>, outcome: RoundOutcome) {
        if let Some(mut round) = self.round.take() {
            if let Some(entry) = entry {
                round.draft_mut().push(entry);
            }
            self.ledger.append(round.into_draft().finish(outcome));
        }
        self.phase = Phase::RoundEnd;
    }

    // === Round transitions ===

    /// Deal the next round, or finish the match after the last one.
    ///
    /// Returns `true` if a new round was dealt, `false` if the match is over.
    pub fn advance_to_next_round_or_end(&mut self) -> Result<bool, MatchError> {
        self.require_phase(Phase::RoundEnd)
            .inspect_err(|e| self.log_rejection("advance_to_next_round_or_end", e))?;

        if self.round_number >= self.config.max_rounds {
            self.phase = Phase::GameOver;
            info!(
                channel = %self.channel,
                rounds = self.ledger.len(),
                winner = ?self.winner().map(|s| s.player),
                "match finished"
            );
            return Ok(false);
        }
        self.start_new_round();
        Ok(true)
    }

    // === Projections ===

    /// Roster ranked by descending score, ties in join order.
    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard(rank_players(&self.roster))
    }

    /// Podium-style ranking.
    #[must_use]
    pub fn final_results(&self) -> FinalResults {
        FinalResults(rank_players(&self.roster))
    }

    /// Every resolved round followed by the final ranking.
    #[must_use]
    pub fn match_summary(&self) -> MatchSummary<'_> {
        MatchSummary::new(&self.ledger, rank_players(&self.roster))
    }

    /// Top of the final ranking, once the match is over.
    #[must_use]
    pub fn winner(&self) -> Option<Standing> {
        if !self.phase.is_terminal() {
            return None;
        }
        rank_players(&self.roster).into_iter().next()
    }

    // === Validation ===

    fn require_phase(&self, expected: Phase) -> Result<(), MatchError> {
        if self.phase != expected {
            return Err(MatchError::phase(expected, self.phase));
        }
        Ok(())
    }

    fn check_live_round(&self) -> Result<Seat, MatchError> {
        self.require_phase(Phase::Turn)?;
        self.round
            .as_ref()
            .map(Round::turn_seat)
            .ok_or(MatchError::phase(Phase::Turn, self.phase))
    }

    fn check_turn_player(&self, id: PlayerId) -> Result<Seat, MatchError> {
        let seat = self.check_live_round()?;
        let expected = self.roster[seat.index()].id;
        if expected != id {
            return Err(MatchError::NotYourTurn { expected, got: id });
        }
        Ok(seat)
    }

    fn log_rejection(&self, command: &'static str, error: &MatchError) {
        debug!(channel = %self.channel, command, phase = %self.phase, %error, "command rejected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;
    use crate::rules::ScriptedDealer;

    const A: PlayerId = PlayerId::new(1);
    const B: PlayerId = PlayerId::new(2);
    const C: PlayerId = PlayerId::new(3);

    fn lobby(hands: Vec<Vec<u32>>) -> Match<ScriptedDealer> {
        let mut game = Match::new(
            ChannelId::new(100),
            A,
            MatchConfig::default(),
            ScriptedDealer::new(hands),
        );
        game.add_player(A, "A").unwrap();
        game.add_player(B, "B").unwrap();
        game.add_player(C, "C").unwrap();
        game
    }

    fn started(hands: Vec<Vec<u32>>) -> Match<ScriptedDealer> {
        let mut game = lobby(hands);
        game.start_game().unwrap();
        game
    }

    fn scores(game: &Match<ScriptedDealer>) -> Vec<i32> {
        game.players().iter().map(|p| p.score).collect()
    }

    #[test]
    fn test_join_until_full() {
        let mut game = Match::seeded(ChannelId::new(1), A, MatchConfig::default(), 42);
        assert_eq!(game.add_player(A, "A").unwrap().roster_size, 1);
        assert_eq!(game.add_player(B, "B").unwrap().roster_size, 2);
        assert!(!game.can_start());

        let joined = game.add_player(C, "C").unwrap();
        assert_eq!(joined.seat, Seat::new(2));
        assert!(joined.is_full());
        assert!(game.can_start());

        let err = game.add_player(PlayerId::new(4), "D").unwrap_err();
        assert_eq!(err, MatchError::RosterFull { capacity: 3 });
        assert_eq!(game.players().len(), 3);
    }

    #[test]
    #[should_panic(expected = "Invalid match config: player count must be 1-255, got 0")]
    fn test_new_rejects_unvalidated_config() {
        let config = MatchConfig { player_count: 0, ..MatchConfig::default() };
        let _ = Match::seeded(ChannelId::new(1), A, config, 42);
    }

    #[test]
    fn test_duplicate_join_rejected() {
        let mut game = Match::seeded(ChannelId::new(1), A, MatchConfig::default(), 42);
        game.add_player(A, "A").unwrap();
        assert_eq!(game.add_player(A, "A again").unwrap_err(), MatchError::AlreadyJoined(A));
        assert_eq!(game.players().len(), 1);
    }

    #[test]
    fn test_start_requires_full_roster() {
        let mut game = Match::seeded(ChannelId::new(1), A, MatchConfig::default(), 42);
        game.add_player(A, "A").unwrap();
        assert_eq!(
            game.start_game().unwrap_err(),
            MatchError::RosterIncomplete { joined: 1, required: 3 }
        );
        assert_eq!(game.phase(), Phase::Lobby);
    }

    #[test]
    fn test_join_after_start_rejected() {
        let mut game = started(vec![vec![7, 3, 5]]);
        let err = game.add_player(PlayerId::new(9), "Late").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPhase);
    }

    #[test]
    fn test_start_deals_round_one() {
        let mut game = lobby(vec![vec![7, 3, 5]]);
        let started = game.start_game().unwrap();

        assert_eq!(started.round_number, 1);
        assert_eq!(started.opener, A);
        assert_eq!(game.phase(), Phase::Turn);
        assert_eq!(game.secret_for(A), Some(7));
        assert_eq!(game.secret_for(B), Some(3));
        assert_eq!(game.secret_for(C), Some(5));
        assert_eq!(game.current_turn_player().map(|p| p.id), Some(A));
        assert_eq!(game.min_declaration(), 3);
        assert_eq!(game.max_declaration(), 30);
        assert!(!game.can_challenge());
    }

    #[test]
    fn test_declarations_escalate_and_rotate() {
        let mut game = started(vec![vec![7, 3, 5]]);

        let declared = game.make_declaration(A, 12).unwrap();
        assert_eq!(declared.next, B);
        assert_eq!(declared.to_string(), "A declares the total is at least 12!");
        assert_eq!(game.min_declaration(), 13);
        assert!(game.can_challenge());
        assert_eq!(game.standing_declaration().map(|(v, p)| (v, p.id)), Some((12, A)));

        assert_eq!(
            game.make_declaration(B, 12).unwrap_err(),
            MatchError::BelowMinimum { min: 13, got: 12 }
        );
        assert_eq!(
            game.make_declaration(B, 31).unwrap_err(),
            MatchError::AboveMaximum { max: 30, got: 31 }
        );
        game.make_declaration(B, 16).unwrap();
        game.make_declaration(C, 17).unwrap();
        assert_eq!(game.current_turn_player().map(|p| p.id), Some(A));
    }

    #[test]
    fn test_opening_below_floor_rejected() {
        let mut game = started(vec![vec![7, 3, 5]]);
        assert_eq!(
            game.make_declaration(A, 2).unwrap_err(),
            MatchError::BelowMinimum { min: 3, got: 2 }
        );
        assert_eq!(game.round().map(Round::turn_count), Some(0));
    }

    #[test]
    fn test_not_your_turn() {
        let mut game = started(vec![vec![7, 3, 5]]);
        assert_eq!(
            game.make_declaration(B, 5).unwrap_err(),
            MatchError::NotYourTurn { expected: A, got: B }
        );
        assert_eq!(
            game.make_challenge(C).unwrap_err(),
            MatchError::NotYourTurn { expected: A, got: C }
        );
    }

    #[test]
    fn test_challenge_without_declaration() {
        let mut game = started(vec![vec![7, 3, 5]]);
        assert_eq!(game.make_challenge(A).unwrap_err(), MatchError::NoDeclarationYet);
        assert_eq!(game.phase(), Phase::Turn);
    }

    #[test]
    fn test_challenge_catches_overclaim() {
        let mut game = started(vec![vec![7, 3, 5]]);
        game.make_declaration(A, 12).unwrap();
        game.make_declaration(B, 16).unwrap();

        let result = game.make_challenge(C).unwrap();
        assert_eq!(result.verdict, Verdict::DeclarerCaught);
        assert_eq!(result.actual_sum, 15);
        assert_eq!(result.loser, B);
        assert_eq!(result.winner, C);
        assert_eq!(scores(&game), vec![0, -1, 0]);
        assert_eq!(game.phase(), Phase::RoundEnd);
        assert_eq!(game.ledger().len(), 1);
    }

    #[test]
    fn test_challenge_vindicates_declarer() {
        let mut game = started(vec![vec![7, 3, 5]]);
        game.make_declaration(A, 12).unwrap();

        let result = game.make_challenge(B).unwrap();
        assert_eq!(result.verdict, Verdict::DeclarerVindicated);
        assert_eq!(result.loser, B);
        assert_eq!(result.winner, A);
        assert_eq!(scores(&game), vec![0, -1, 0]);
    }

    #[test]
    fn test_exact_claim_is_not_an_overclaim() {
        let mut game = started(vec![vec![7, 3, 5]]);
        game.make_declaration(A, 15).unwrap();
        let result = game.make_challenge(B).unwrap();
        assert_eq!(result.verdict, Verdict::DeclarerVindicated);
        assert_eq!(result.loser, B);
    }

    #[test]
    fn test_timeout_without_declaration() {
        let mut game = started(vec![vec![7, 3, 5]]);
        let timed_out = game.on_timeout().unwrap();
        assert_eq!(timed_out.player, A);
        assert_eq!(scores(&game), vec![-1, 0, 0]);
        assert_eq!(game.phase(), Phase::RoundEnd);
        assert_eq!(
            game.on_timeout().unwrap_err(),
            MatchError::phase(Phase::Turn, Phase::RoundEnd)
        );
    }

    #[test]
    fn test_stale_ticket_rejected() {
        let mut game = started(vec![vec![7, 3, 5]]);
        let ticket = game.turn_ticket().unwrap();
        game.make_declaration(A, 10).unwrap();

        assert_eq!(game.on_timeout_for(ticket).unwrap_err(), MatchError::StaleTurn);
        assert_eq!(scores(&game), vec![0, 0, 0]);

        let fresh = game.turn_ticket().unwrap();
        assert_eq!(game.on_timeout_for(fresh).unwrap().player, B);
    }

    #[test]
    fn test_rotation_across_rounds() {
        let mut game = started(vec![vec![1, 1, 1]]);
        game.on_timeout().unwrap();
        assert!(game.advance_to_next_round_or_end().unwrap());
        assert_eq!(game.current_turn_player().map(|p| p.id), Some(B));
        assert_eq!(game.min_declaration(), 3);
        assert!(!game.can_challenge());

        game.on_timeout().unwrap();
        assert!(game.advance_to_next_round_or_end().unwrap());
        assert_eq!(game.current_turn_player().map(|p| p.id), Some(C));
    }

    #[test]
    fn test_match_ends_after_max_rounds() {
        let mut game = started(vec![vec![1, 1, 1]]);
        for round in 1..=3 {
            assert_eq!(game.round_number(), round);
            game.on_timeout().unwrap();
            let more = game.advance_to_next_round_or_end().unwrap();
            assert_eq!(more, round < 3);
        }
        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.ledger().len(), 3);
        assert!(game.current_turn_player().is_none());

        for err in [
            game.make_declaration(A, 5).unwrap_err(),
            game.make_challenge(A).unwrap_err(),
            game.on_timeout().map(|_| ()).unwrap_err(),
            game.advance_to_next_round_or_end().map(|_| ()).unwrap_err(),
            game.start_game().map(|_| ()).unwrap_err(),
        ] {
            assert_eq!(err.kind(), ErrorKind::InvalidPhase);
        }
    }

    #[test]
    fn test_advance_only_from_round_end() {
        let mut game = started(vec![vec![1, 1, 1]]);
        assert_eq!(
            game.advance_to_next_round_or_end().unwrap_err(),
            MatchError::phase(Phase::RoundEnd, Phase::Turn)
        );
    }

    #[test]
    fn test_winner_only_when_finished() {
        let mut game = started(vec![vec![1, 1, 1]]);
        assert!(game.winner().is_none());
        for _ in 0..3 {
            game.on_timeout().unwrap();
            game.advance_to_next_round_or_end().unwrap();
        }
        // A, B, C each timed out once: all tied, A wins on join order.
        assert_eq!(game.winner().map(|s| s.player), Some(A));
    }

    #[test]
    fn test_turn_deadline() {
        let mut game = lobby(vec![vec![1, 1, 1]]);
        let now = Instant::now();
        assert!(game.turn_deadline(now).is_none());
        game.start_game().unwrap();
        assert_eq!(game.turn_deadline(now), Some(now + game.config().turn_timeout));
    }
}
