use crate::shared::Result;
use async_trait::async_trait;

/// Acknowledgment token for one unit of publication work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkId(pub String);

impl WorkId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// BundlePublisher port for the downstream publication sink.
///
/// Publication is request/response, never fire-and-forget: a work item is
/// initiated with a human-readable run label, the serialized bundle is sent
/// for that work, and the work is marked processed with a status message.
///
/// All failures surface as `ConnectorError::Transport`; the caller must not
/// record a checkpoint when any step fails.
#[async_trait]
pub trait BundlePublisher {
    /// Registers a unit of work with the sink and returns its token.
    async fn initiate_work(&self, run_label: &str) -> Result<WorkId>;

    /// Transmits the serialized bundle for the given work item.
    async fn send_bundle(&self, work: &WorkId, payload: &str) -> Result<()>;

    /// Marks the work item processed with a status message.
    async fn complete_work(&self, work: &WorkId, message: &str) -> Result<()>;
}

#[async_trait]
impl BundlePublisher for Box<dyn BundlePublisher + Send + Sync> {
    async fn initiate_work(&self, run_label: &str) -> Result<WorkId> {
        (**self).initiate_work(run_label).await
    }

    async fn send_bundle(&self, work: &WorkId, payload: &str) -> Result<()> {
        (**self).send_bundle(work, payload).await
    }

    async fn complete_work(&self, work: &WorkId, message: &str) -> Result<()> {
        (**self).complete_work(work, message).await
    }
}
