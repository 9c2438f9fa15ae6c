use serde::{Deserialize, Serialize};

use crate::models::vote_record_models::VoteOption;

/// Aggregate counts derived from the persisted record set. Never stored;
/// recomputed for every results request.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyResult {
    pub casting: u64,
    pub nota: u64,
    pub total: u64,
    /// Rows whose stored option fell outside the closed set. Only present
    /// in the results body when non-zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded: Option<u64>,
}

impl TallyResult {
    pub fn bump(&mut self, option: VoteOption) {
        match option {
            VoteOption::Casting => self.casting += 1,
            VoteOption::Nota => self.nota += 1,
        }
        self.total += 1;
    }

    /// Counts a row that could not be bucketed. Such rows are kept out of
    /// `total` so the sum-of-buckets invariant holds.
    pub fn exclude_unrecognized(&mut self) {
        self.excluded = Some(self.excluded.unwrap_or(0) + 1);
    }
}
