//! Round-scoped state.

use serde::{Deserialize, Serialize};

use crate::core::Seat;
use crate::ledger::{LogEntry, RoundDraft};

/// The standing claim and who made it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub value: u32,
    pub seat: Seat,
}

/// Identifies one turn of one round.
///
/// A host takes a ticket when it arms its turn timer and hands it back to
/// [`Match::on_timeout_for`](super::Match::on_timeout_for). If the turn moved
/// on in the meantime the ticket no longer matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnTicket {
    pub round_number: u32,
    pub turn_count: u32,
}

/// One cycle of dealing, declaring and resolving.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    round_number: u32,
    declaration: Option<Declaration>,
    turn_seat: Seat,
    turn_count: u32,
    draft: RoundDraft,
}

impl Round {
    pub(crate) fn new(round_number: u32, opener: Seat, draft: RoundDraft) -> Self {
        Self {
            round_number,
            declaration: None,
            turn_seat: opener,
            turn_count: 0,
            draft,
        }
    }

    /// 1-based round number.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Standing claim, if any.
    #[must_use]
    pub fn declaration(&self) -> Option<Declaration> {
        self.declaration
    }

    /// Seat on turn.
    #[must_use]
    pub fn turn_seat(&self) -> Seat {
        self.turn_seat
    }

    /// Declarations made so far this round.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Public log so far.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        self.draft.entries()
    }

    /// Ticket for the current turn.
    #[must_use]
    pub fn ticket(&self) -> TurnTicket {
        TurnTicket {
            round_number: self.round_number,
            turn_count: self.turn_count,
        }
    }

    pub(crate) fn record_declaration(
        &mut self,
        value: u32,
        player_count: usize,
        label: String,
    ) {
        self.declaration = Some(Declaration {
            value,
            seat: self.turn_seat,
        });
        self.turn_count += 1;
        self.turn_seat = self.turn_seat.next(player_count);
        self.draft.push(LogEntry::Declaration { label, value });
    }

    pub(crate) fn into_draft(self) -> RoundDraft {
        self.draft
    }

    pub(crate) fn draft_mut(&mut self) -> &mut RoundDraft {
        &mut self.draft
    }
}
