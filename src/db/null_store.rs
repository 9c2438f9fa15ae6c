use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use crate::db::table_store::{ScanStream, StorageError, TableEntity, TableStore};

/// Storage variant used when no durable backend is configured: every write
/// is accepted and dropped, every scan is empty. Keeps the service contract
/// uniform instead of branching on "storage present" throughout the
/// handlers.
#[derive(Debug, Default)]
pub struct NullStore;

#[async_trait]
impl TableStore for NullStore {
    async fn put(&self, _entity: TableEntity) -> Result<(), StorageError> {
        Ok(())
    }

    async fn scan(&self, _partition: &str) -> Result<ScanStream, StorageError> {
        Ok(stream::empty().boxed())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
