use std::collections::HashMap;
use std::sync::{Arc, Weak};

use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry entries whose locks are no longer held get pruned once the map
/// grows past this.
const PRUNE_AT: usize = 64;

/// A registry of async mutexes, one per string key. Acquiring the same key
/// serializes; distinct keys never contend. The registry only keeps weak
/// handles, so a lock lives exactly as long as someone holds or awaits it.
#[derive(Clone, Default)]
pub struct KeyedLocks {
    inner: Arc<Mutex<HashMap<String, Weak<Mutex<()>>>>>,
}

impl KeyedLocks {
    pub async fn acquire(&self, key: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut registry = self.inner.lock().await;
            if registry.len() > PRUNE_AT {
                registry.retain(|_, slot| slot.strong_count() > 0);
            }
            match registry.get(key).and_then(Weak::upgrade) {
                Some(lock) => lock,
                None => {
                    let lock = Arc::new(Mutex::new(()));
                    registry.insert(key.to_string(), Arc::downgrade(&lock));
                    lock
                }
            }
        };
        lock.lock_owned().await
    }
}
