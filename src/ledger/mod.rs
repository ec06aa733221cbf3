//! Round ledger: append-only history of resolved rounds.
//!
//! The engine appends one [`RoundRecord`] when a round resolves. Nothing
//! is ever edited or removed; the ledger only feeds the end-of-match
//! summary.
//!
//! Backed by `im::Vector` so cloning a match (snapshots, hosts keeping a
//! copy for rendering) does not copy the history.

mod record;

pub use record::{LogEntry, RoundDraft, RoundOutcome, RoundRecord, SecretEntry};

use im::Vector;
use serde::{Deserialize, Deserializer, Serialize};

/// Resolved rounds in round-number order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundLedger {
    #[serde(deserialize_with = "records_from_vec")]
    records: Vector<RoundRecord>,
}

// `im` preallocates whatever length prefix it is handed; `Vec` caps it.
fn records_from_vec<'de, D>(deserializer: D) -> Result<Vector<RoundRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<RoundRecord>::deserialize(deserializer).map(Vector::from)
}

impl RoundLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, record: RoundRecord) {
        debug_assert!(
            self.records
                .last()
                .map_or(true, |last| last.round_number() < record.round_number()),
            "ledger records must be in round order"
        );
        self.records.push_back(record);
    }

    /// Number of resolved rounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no round has resolved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index` (0-based).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RoundRecord> {
        self.records.get(index)
    }

    /// Most recently resolved round.
    #[must_use]
    pub fn last(&self) -> Option<&RoundRecord> {
        self.records.last()
    }

    /// Iterate in round order.
    pub fn iter(&self) -> impl Iterator<Item = &RoundRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RoundLedger {
    type Item = &'a RoundRecord;
    type IntoIter = im::vector::Iter<'a, RoundRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
