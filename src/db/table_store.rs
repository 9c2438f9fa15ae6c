use async_trait::async_trait;
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One persisted row, backend-agnostic: a partition key, a row key unique
/// within the partition, and the vote attributes. The timestamp is kept as
/// an RFC 3339 string at this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableEntity {
    #[serde(rename = "_id")]
    pub row_key: String,
    pub partition_key: String,
    pub voter_name: String,
    pub voter_email: String,
    pub vote: String,
    pub timestamp: String,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("entity already exists")]
    AlreadyExists,
    #[error("storage request timed out")]
    Timeout,
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type ScanStream = BoxStream<'static, Result<TableEntity, StorageError>>;

/// Narrow durable-store contract the core depends on.
///
/// `put` is an atomic conditional insert: a write for a `(partition, row)`
/// pair that already exists fails with `AlreadyExists` and never
/// overwrites. `scan` yields a fresh lazy stream per call, so a caller can
/// restart the scan by calling again. No ordering is guaranteed between a
/// scan and concurrent puts beyond read-committed visibility.
#[async_trait]
pub trait TableStore: Send + Sync {
    async fn put(&self, entity: TableEntity) -> Result<(), StorageError>;

    async fn scan(&self, partition: &str) -> Result<ScanStream, StorageError>;

    async fn ping(&self) -> Result<(), StorageError>;
}
