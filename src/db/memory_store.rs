use std::collections::hash_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use tokio::sync::RwLock;

use crate::db::table_store::{ScanStream, StorageError, TableEntity, TableStore};

/// In-memory table store, used by the test suites in place of a real
/// backend. Scans snapshot the partition, so a stream started before a put
/// never observes it half-applied.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: RwLock<HashMap<(String, String), TableEntity>>,
}

#[async_trait]
impl TableStore for MemoryStore {
    async fn put(&self, entity: TableEntity) -> Result<(), StorageError> {
        let mut rows = self.rows.write().await;
        match rows.entry((entity.partition_key.clone(), entity.row_key.clone())) {
            Entry::Occupied(_) => Err(StorageError::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(entity);
                Ok(())
            }
        }
    }

    async fn scan(&self, partition: &str) -> Result<ScanStream, StorageError> {
        let rows = self.rows.read().await;
        let snapshot: Vec<TableEntity> = rows
            .values()
            .filter(|entity| entity.partition_key == partition)
            .cloned()
            .collect();
        Ok(stream::iter(snapshot.into_iter().map(Ok)).boxed())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
