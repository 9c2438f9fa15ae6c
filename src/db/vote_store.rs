use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::stream::StreamExt;
use tokio::time::timeout;

use crate::db::table_store::{ScanStream, StorageError, TableStore};
use crate::models::vote_record_models::{VoteCandidate, VoteRecord};
use crate::utils::error::{AppError, AppResult};
use crate::utils::locks::KeyedLocks;
use crate::utils::validate::participant_key;

pub const VOTES_PARTITION: &str = "votes";

/// Bound on any single storage interaction; past it the request fails as
/// transient instead of hanging.
const STORAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// The sole mutation path for vote records. Enforces one vote per
/// participant key: submissions for the same key are serialized through a
/// keyed lock, so two concurrent submissions cannot both pass the
/// existing-record check. The write itself is a single conditional put, so
/// a record is either fully absent or fully visible.
#[derive(Clone)]
pub struct VoteStore {
    store: Arc<dyn TableStore>,
    write_locks: KeyedLocks,
}

impl VoteStore {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self {
            store,
            write_locks: KeyedLocks::default(),
        }
    }

    /// Persists a candidate, assigning the id and (if needed) the server
    /// timestamp. Fails with `DuplicateVote` and performs no write when the
    /// participant already has a record.
    pub async fn record(&self, candidate: VoteCandidate) -> AppResult<VoteRecord> {
        let _guard = self.write_locks.acquire(&candidate.participant_key).await;

        if self.has_participant(&candidate.participant_key).await? {
            return Err(AppError::DuplicateVote);
        }

        let record = VoteRecord::from_candidate(candidate);
        match bounded(self.store.put(record.to_entity())).await? {
            // The row key is a fresh uuid; a collision here is not a
            // duplicate vote, it is the store contradicting itself.
            Err(StorageError::AlreadyExists) => Err(AppError::Internal(format!(
                "row key collision for vote {}",
                record.id
            ))),
            Err(err) => Err(err.into()),
            Ok(()) => Ok(record),
        }
    }

    /// All persisted vote rows, as a lazy stream. Calling again restarts
    /// the scan.
    pub async fn all_records(&self) -> AppResult<ScanStream> {
        bounded(self.store.scan(VOTES_PARTITION))
            .await?
            .map_err(AppError::from)
    }

    pub async fn ping(&self) -> bool {
        matches!(bounded(self.store.ping()).await, Ok(Ok(())))
    }

    async fn has_participant(&self, key: &str) -> AppResult<bool> {
        let check = async {
            let mut rows = self.store.scan(VOTES_PARTITION).await?;
            while let Some(row) = rows.next().await {
                let row = row?;
                if participant_key(&row.voter_name, &row.voter_email) == key {
                    return Ok(true);
                }
            }
            Ok::<bool, StorageError>(false)
        };
        bounded(check).await?.map_err(AppError::from)
    }
}

async fn bounded<T>(operation: impl Future<Output = T>) -> AppResult<T> {
    timeout(STORAGE_TIMEOUT, operation)
        .await
        .map_err(|_| AppError::StorageTimeout)
}
