//! Fire-and-forget persistence writes.
//!
//! Timer transitions never wait on storage. Mutations hand the serialized
//! payload to a background writer task and move on; a failed write is logged
//! and not retried - the next successful mutation re-persists the latest
//! full state.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::Store;

/// Handle to the background writer task. Cheap to clone; every holder feeds
/// the same writer.
#[derive(Debug, Clone)]
pub struct Persister {
    tx: mpsc::UnboundedSender<(String, String)>,
}

impl Persister {
    /// Spawn the writer task on the current tokio runtime.
    pub fn spawn(store: Arc<dyn Store>) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<(String, String)>();
        tokio::spawn(async move {
            while let Some((key, value)) = rx.recv().await {
                if let Err(err) = store.set(&key, &value) {
                    warn!(%key, %err, "persistence write failed; in-memory state stays authoritative");
                }
            }
        });
        Self { tx }
    }

    /// A persister with no writer behind it. Writes are dropped silently;
    /// used in tests and in synchronous one-shot contexts that persist
    /// explicitly on exit instead.
    pub fn disconnected() -> Self {
        let (tx, _) = mpsc::unbounded_channel();
        Self { tx }
    }

    /// Queue a write. Never blocks, never fails the caller.
    pub fn write(&self, key: &str, value: String) {
        if self.tx.send((key.to_string(), value)).is_err() {
            debug!(key, "persister closed; dropping write");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[tokio::test]
    async fn queued_writes_reach_the_store() {
        let store = Arc::new(MemoryStore::new());
        let persister = Persister::spawn(store.clone() as Arc<dyn Store>);
        persister.write("settings", "{}".to_string());
        // Yield until the writer task has drained the queue.
        for _ in 0..100 {
            tokio::task::yield_now().await;
            if store.get("settings").unwrap().is_some() {
                break;
            }
        }
        assert_eq!(store.get("settings").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn disconnected_persister_drops_writes_quietly() {
        let persister = Persister::disconnected();
        persister.write("sessions", "[]".to_string());
    }
}
