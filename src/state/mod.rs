use std::sync::Arc;

use crate::db::connection::StorageBackend;
use crate::db::table_store::TableStore;
use crate::db::vote_store::VoteStore;

#[derive(Clone)]
pub struct AppState {
    pub votes: VoteStore,
    pub backend: StorageBackend,
}

impl AppState {
    pub fn new(store: Arc<dyn TableStore>, backend: StorageBackend) -> Self {
        Self {
            votes: VoteStore::new(store),
            backend,
        }
    }
}
