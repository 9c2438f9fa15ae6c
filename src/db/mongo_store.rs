use async_trait::async_trait;
use futures::stream::StreamExt;
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::{Collection, Database};

use crate::db::table_store::{ScanStream, StorageError, TableEntity, TableStore};

/// Durable adapter backed by MongoDB. Rows live in a single collection with
/// the row key as `_id`, so the collection's unique-id constraint is the
/// conditional insert the port requires.
pub struct MongoStore {
    db: Database,
    collection: Collection<TableEntity>,
}

impl MongoStore {
    pub fn new(db: &Database) -> Self {
        Self {
            db: db.clone(),
            collection: db.collection("votes"),
        }
    }
}

#[async_trait]
impl TableStore for MongoStore {
    async fn put(&self, entity: TableEntity) -> Result<(), StorageError> {
        self.collection.insert_one(&entity).await.map_err(|err| {
            if is_duplicate_key(&err) {
                StorageError::AlreadyExists
            } else {
                StorageError::Unavailable(err.to_string())
            }
        })?;
        Ok(())
    }

    async fn scan(&self, partition: &str) -> Result<ScanStream, StorageError> {
        let cursor = self
            .collection
            .find(doc! { "partition_key": partition })
            .await
            .map_err(|err| StorageError::Unavailable(err.to_string()))?;

        Ok(cursor
            .map(|row| row.map_err(|err| StorageError::Unavailable(err.to_string())))
            .boxed())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|err| StorageError::Unavailable(err.to_string()))
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_err)) => write_err.code == 11000,
        _ => false,
    }
}
