use futures::stream::StreamExt;
use tracing::warn;

use crate::db::vote_store::VoteStore;
use crate::models::tally_models::TallyResult;
use crate::models::vote_record_models::VoteOption;
use crate::utils::error::{AppError, AppResult};

/// Folds the persisted record set into per-option counts. The validator
/// keeps out-of-set options from ever being written, so an unrecognized
/// option here means the stored data and the code disagree: the row is
/// logged and excluded rather than silently bucketed or counted.
pub async fn compute_tally(votes: &VoteStore) -> AppResult<TallyResult> {
    let mut rows = votes.all_records().await?;
    let mut tally = TallyResult::default();

    while let Some(row) = rows.next().await {
        let row = row.map_err(AppError::from)?;
        match VoteOption::parse(&row.vote) {
            Some(option) => tally.bump(option),
            None => {
                warn!(
                    row_key = %row.row_key,
                    option = %row.vote,
                    "unrecognized vote option in storage, excluding from tally"
                );
                tally.exclude_unrecognized();
            }
        }
    }

    Ok(tally)
}
