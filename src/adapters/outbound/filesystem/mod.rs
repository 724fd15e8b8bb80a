/// Filesystem adapters for the feed, artifact store, checkpoint state,
/// and local bundle output
mod artifact_store;
mod bundle_writer;
mod checkpoint;
mod csv_feed;

pub use artifact_store::JsonArtifactStore;
pub use bundle_writer::{FileBundleSink, StdoutBundleSink};
pub use checkpoint::{FileCheckpointStore, NullCheckpointStore};
pub use csv_feed::CsvAdvisoryFeed;
