//! ghsa-stix - STIX bundle generation for GitHub Security Advisory exports
//!
//! This library converts batches of advisory rows into a deduplicated STIX
//! 2.1 object graph and publishes it to an OpenCTI-style graph store,
//! following hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`advisory`): Advisory records, the vendor vocabulary,
//!   STIX objects, and the pure graph-construction services
//! - **Application Layer** (`application`): The publish-advisories use case
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Scheduler** (`scheduler`): Fixed-interval, exclusive run loop
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use ghsa_stix::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let feed = CsvAdvisoryFeed::new(PathBuf::from("data/GitHub.csv"));
//! let artifacts = JsonArtifactStore::new(PathBuf::from("data/github-data"));
//! let publisher = StdoutBundleSink::new();
//! let checkpoint = NullCheckpointStore;
//! let reporter = StderrRunReporter::new();
//! let vocabulary =
//!     VendorVocabulary::load(&PathBuf::from("data/huawei-open-source-software.csv"))?;
//!
//! // Create use case
//! let use_case = PublishAdvisoriesUseCase::new(
//!     feed,
//!     artifacts,
//!     publisher,
//!     checkpoint,
//!     reporter,
//!     vocabulary,
//!     SourceProfile::github(),
//! );
//!
//! // Execute one run
//! let report = use_case.execute(RunRequest::starting_now()).await?;
//! eprintln!("published {} report(s)", report.reports);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod advisory;
pub mod application;
pub mod ports;
pub mod scheduler;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrRunReporter;
    pub use crate::adapters::outbound::filesystem::{
        CsvAdvisoryFeed, FileBundleSink, FileCheckpointStore, JsonArtifactStore,
        NullCheckpointStore, StdoutBundleSink,
    };
    pub use crate::adapters::outbound::network::OpenCtiPublisher;
    pub use crate::advisory::domain::{
        AdvisoryRecord, Bundle, Identity, RawAdvisory, Report, Software, StixId, StixObject,
        VendorVocabulary,
    };
    pub use crate::advisory::services::{
        BundleAssembler, BundleGraph, GraphBuilder, IdentityResolver, NodeKind, SoftwareTag,
        SoftwareTagger, TaggedAdvisory,
    };
    pub use crate::application::dto::{RunReport, RunRequest, SourceProfile};
    pub use crate::application::use_cases::PublishAdvisoriesUseCase;
    pub use crate::ports::outbound::{
        AdvisoryFeed, ArtifactStore, BundlePublisher, CheckpointStore, FeedRow, RunReporter,
        WorkId,
    };
    pub use crate::scheduler::{Cycle, Scheduler};
    pub use crate::shared::error::ConnectorError;
    pub use crate::shared::Result;
}
