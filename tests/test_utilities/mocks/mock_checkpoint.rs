use ghsa_stix::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock CheckpointStore backed by shared memory so tests can inspect the
/// recorded value after the use case consumes the store
pub struct MockCheckpointStore {
    value: Arc<Mutex<Option<i64>>>,
}

impl MockCheckpointStore {
    pub fn new() -> Self {
        Self {
            value: Arc::new(Mutex::new(None)),
        }
    }

    /// Shared handle to the stored value.
    pub fn handle(&self) -> Arc<Mutex<Option<i64>>> {
        self.value.clone()
    }
}

impl Default for MockCheckpointStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckpointStore for MockCheckpointStore {
    fn last_run(&self) -> Result<Option<i64>> {
        Ok(*self.value.lock().unwrap())
    }

    fn record(&self, timestamp: i64) -> Result<()> {
        *self.value.lock().unwrap() = Some(timestamp);
        Ok(())
    }
}
