use crate::ports::outbound::CheckpointStore;
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// FileCheckpointStore adapter persisting the last-successful-run timestamp
/// as a single integer in a file
///
/// Writes go through a temporary file in the same directory followed by an
/// atomic rename, so a crash mid-write never leaves a torn checkpoint.
pub struct FileCheckpointStore {
    path: PathBuf,
}

impl FileCheckpointStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CheckpointStore for FileCheckpointStore {
    fn last_run(&self) -> Result<Option<i64>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read checkpoint: {}", self.path.display()))?;
        let timestamp = content.trim().parse::<i64>().with_context(|| {
            format!("Checkpoint is not an integer: {}", self.path.display())
        })?;
        Ok(Some(timestamp))
    }

    fn record(&self, timestamp: i64) -> Result<()> {
        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut temp = match dir {
            Some(dir) => tempfile::NamedTempFile::new_in(dir),
            None => tempfile::NamedTempFile::new(),
        }
        .context("Failed to create checkpoint temp file")?;

        writeln!(temp, "{}", timestamp).context("Failed to write checkpoint")?;
        temp.persist(&self.path)
            .with_context(|| format!("Failed to persist checkpoint: {}", self.path.display()))?;
        Ok(())
    }
}

/// NullCheckpointStore for modes that must not persist run state
/// (e.g. writing a bundle to a local file instead of publishing it)
pub struct NullCheckpointStore;

impl CheckpointStore for NullCheckpointStore {
    fn last_run(&self) -> Result<Option<i64>> {
        Ok(None)
    }

    fn record(&self, _timestamp: i64) -> Result<()> {
        Ok(())
    }
}
