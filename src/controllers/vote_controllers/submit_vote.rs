use axum::{extract::State, Json};
use tracing::info;

use crate::controllers::vote_controllers::models::{SubmitVoteRequest, SubmitVoteResponse};
use crate::state::AppState;
use crate::utils::error::AppResult;
use crate::utils::validate::validate_submission;

/// Received → Validated → Persisted → Acknowledged, with early exits at
/// each step. Validation and duplicate failures are permanent and never
/// retried here; storage failures bubble to the caller, who may retry the
/// whole submission safely because persistence is idempotent per
/// participant.
pub async fn submit_vote(
    State(state): State<AppState>,
    Json(payload): Json<SubmitVoteRequest>,
) -> AppResult<Json<SubmitVoteResponse>> {
    let candidate = validate_submission(payload)?;
    let record = state.votes.record(candidate).await?;

    info!(vote_id = %record.id, option = record.option.as_str(), "vote recorded");

    Ok(Json(SubmitVoteResponse {
        success: true,
        message: "Vote recorded successfully".to_string(),
        vote_id: record.id.to_string(),
    }))
}
