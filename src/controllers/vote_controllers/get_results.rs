use axum::{extract::State, Json};

use crate::models::tally_models::TallyResult;
use crate::state::AppState;
use crate::utils::error::AppResult;
use crate::utils::tally::compute_tally;

/// Read-only: recomputes the tally from the persisted record set on every
/// request. Runs fully concurrently with submissions.
pub async fn get_results(State(state): State<AppState>) -> AppResult<Json<TallyResult>> {
    let tally = compute_tally(&state.votes).await?;
    Ok(Json(tally))
}
