/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the connector core uses to reach
/// its external collaborators: the advisory feed, the supplementary
/// artifact store, the publication sink, the checkpoint state, and the
/// console.
pub mod advisory_feed;
pub mod artifact_store;
pub mod checkpoint;
pub mod publisher;
pub mod run_reporter;

pub use advisory_feed::{AdvisoryFeed, FeedRow};
pub use artifact_store::ArtifactStore;
pub use checkpoint::CheckpointStore;
pub use publisher::{BundlePublisher, WorkId};
pub use run_reporter::RunReporter;
