use chrono::{DateTime, Duration, Utc};

use crate::controllers::vote_controllers::models::SubmitVoteRequest;
use crate::models::vote_record_models::{VoteCandidate, VoteOption};
use crate::utils::error::{AppError, AppResult};

/// Caller timestamps further in the future than this are treated as
/// implausible and replaced with server time.
const MAX_FUTURE_SKEW_MINUTES: i64 = 5;

/// Checks a raw submission and produces a persistable candidate. Pure: no
/// storage access, no clock writes beyond plausibility comparison.
pub fn validate_submission(payload: SubmitVoteRequest) -> AppResult<VoteCandidate> {
    let voter_name = required(payload.voter_name, "voterName")?;
    let voter_email = required(payload.voter_email, "voterEmail")?;
    let vote = required(payload.vote, "vote")?;

    let option = VoteOption::parse(&vote).ok_or(AppError::InvalidOption(vote))?;

    Ok(VoteCandidate {
        participant_key: participant_key(&voter_name, &voter_email),
        voter_name,
        voter_email,
        option,
        submitted_at: payload.timestamp.as_deref().and_then(plausible_timestamp),
    })
}

/// Normalized voter identity: both fields trimmed and lowercased, joined.
/// Uniqueness is enforced against this, never against the raw fields.
pub fn participant_key(name: &str, email: &str) -> String {
    format!(
        "{}|{}",
        name.trim().to_lowercase(),
        email.trim().to_lowercase()
    )
}

fn required(value: Option<String>, field: &'static str) -> AppResult<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(AppError::MissingField(field)),
    }
}

/// The caller's timestamp is advisory metadata only. Unparseable or
/// far-future values are dropped; the store then assigns server time.
fn plausible_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw).ok()?.with_timezone(&Utc);
    if parsed > Utc::now() + Duration::minutes(MAX_FUTURE_SKEW_MINUTES) {
        return None;
    }
    Some(parsed)
}
