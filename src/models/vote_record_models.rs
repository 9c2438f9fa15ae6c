use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::db::table_store::TableEntity;
use crate::db::vote_store::VOTES_PARTITION;

/// The closed set of ballot choices. Anything else is rejected at
/// validation time and never reaches storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteOption {
    Casting,
    Nota,
}

impl VoteOption {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "casting" => Some(Self::Casting),
            "nota" => Some(Self::Nota),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Casting => "casting",
            Self::Nota => "nota",
        }
    }
}

/// A validated submission that has not been persisted yet. Carries no id;
/// the store assigns one. `submitted_at` is `None` when the caller supplied
/// no usable timestamp, in which case the store stamps server time.
#[derive(Debug, Clone)]
pub struct VoteCandidate {
    pub participant_key: String,
    pub voter_name: String,
    pub voter_email: String,
    pub option: VoteOption,
    pub submitted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VoteRecord {
    pub id: Uuid,
    pub participant_key: String,
    pub voter_name: String,
    pub voter_email: String,
    pub option: VoteOption,
    pub submitted_at: DateTime<Utc>,
}

impl VoteRecord {
    /// Seals a candidate: fresh id, server timestamp unless the caller's
    /// one survived validation.
    pub fn from_candidate(candidate: VoteCandidate) -> Self {
        Self {
            id: Uuid::new_v4(),
            participant_key: candidate.participant_key,
            voter_name: candidate.voter_name,
            voter_email: candidate.voter_email,
            option: candidate.option,
            submitted_at: candidate.submitted_at.unwrap_or_else(Utc::now),
        }
    }

    pub fn to_entity(&self) -> TableEntity {
        TableEntity {
            partition_key: VOTES_PARTITION.to_string(),
            row_key: self.id.to_string(),
            voter_name: self.voter_name.clone(),
            voter_email: self.voter_email.clone(),
            vote: self.option.as_str().to_string(),
            timestamp: self.submitted_at.to_rfc3339(),
        }
    }
}
