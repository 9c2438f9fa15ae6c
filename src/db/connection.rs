use std::env;
use std::sync::Arc;

use dotenvy::dotenv;
use mongodb::{options::ClientOptions, Client};
use tracing::{info, warn};

use crate::db::mongo_store::MongoStore;
use crate::db::null_store::NullStore;
use crate::db::table_store::TableStore;
use crate::utils::error::{AppError, AppResult};

/// Which adapter is behind the storage port. `/health` reports it, and
/// `Null` is what "storage unconfigured" looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Mongo,
    Memory,
    Null,
}

impl StorageBackend {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mongo => "mongodb",
            Self::Memory => "memory",
            Self::Null => "null",
        }
    }

    /// Whether records actually survive anywhere. The null store accepts
    /// writes but holds nothing.
    pub fn is_durable(&self) -> bool {
        !matches!(self, Self::Null)
    }
}

pub async fn init_storage() -> AppResult<(Arc<dyn TableStore>, StorageBackend)> {
    dotenv().ok();

    let Ok(mongo_uri) = env::var("MONGO_URI") else {
        warn!("MONGO_URI not set, running without durable storage");
        return Ok((Arc::new(NullStore), StorageBackend::Null));
    };

    let db_name = env::var("DB_NAME").unwrap_or_else(|_| {
        info!("DB_NAME not set, using default: voting");
        "voting".to_string()
    });

    let mut client_options = ClientOptions::parse(&mongo_uri)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to parse MongoDB URI: {}", e)))?;

    client_options.app_name = Some("VotingApp".to_string());

    let client = Client::with_options(client_options)
        .map_err(|e| AppError::Internal(format!("Failed to initialize MongoDB client: {}", e)))?;

    info!("Connected to MongoDB, database: {}", db_name);

    let store = MongoStore::new(&client.database(&db_name));
    Ok((Arc::new(store), StorageBackend::Mongo))
}
