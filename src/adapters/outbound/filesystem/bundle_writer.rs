use crate::ports::outbound::{BundlePublisher, WorkId};
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;

/// FileBundleSink adapter writing the assembled bundle to a local file
/// instead of a publication sink
///
/// Useful for inspecting a run's output offline. The work protocol is
/// honored with a synthetic local token; no checkpoint should be recorded
/// in this mode (pair with `NullCheckpointStore`).
pub struct FileBundleSink {
    path: PathBuf,
}

impl FileBundleSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl BundlePublisher for FileBundleSink {
    async fn initiate_work(&self, _run_label: &str) -> Result<WorkId> {
        Ok(WorkId("local-file".to_string()))
    }

    async fn send_bundle(&self, _work: &WorkId, payload: &str) -> Result<()> {
        fs::write(&self.path, payload)
            .with_context(|| format!("Failed to write bundle to {}", self.path.display()))
    }

    async fn complete_work(&self, _work: &WorkId, _message: &str) -> Result<()> {
        Ok(())
    }
}

/// StdoutBundleSink adapter printing the assembled bundle to stdout
pub struct StdoutBundleSink;

impl StdoutBundleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutBundleSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BundlePublisher for StdoutBundleSink {
    async fn initiate_work(&self, _run_label: &str) -> Result<WorkId> {
        Ok(WorkId("local-stdout".to_string()))
    }

    async fn send_bundle(&self, _work: &WorkId, payload: &str) -> Result<()> {
        println!("{}", payload);
        Ok(())
    }

    async fn complete_work(&self, _work: &WorkId, _message: &str) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_sink_writes_payload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bundle.json");
        let sink = FileBundleSink::new(path.clone());

        let work = sink.initiate_work("test run").await.unwrap();
        sink.send_bundle(&work, "{\"type\":\"bundle\"}").await.unwrap();
        sink.complete_work(&work, "done").await.unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "{\"type\":\"bundle\"}");
    }

    #[tokio::test]
    async fn test_file_sink_unwritable_path_is_error() {
        let dir = TempDir::new().unwrap();
        let sink = FileBundleSink::new(dir.path().join("missing").join("bundle.json"));
        let work = sink.initiate_work("test run").await.unwrap();
        assert!(sink.send_bundle(&work, "{}").await.is_err());
    }
}
