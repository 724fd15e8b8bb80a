use crate::advisory::domain::{RawAdvisory, VendorVocabulary};
use crate::advisory::services::{BundleAssembler, GraphBuilder, SoftwareTagger, TaggedAdvisory};
use crate::application::dto::{RunReport, RunRequest, SourceProfile};
use crate::ports::outbound::{
    AdvisoryFeed, ArtifactStore, BundlePublisher, CheckpointStore, RunReporter,
};
use crate::shared::error::ConnectorError;
use crate::shared::Result;

/// PublishAdvisoriesUseCase - Core use case for one connector run
///
/// Orchestrates the full pipeline: load rows, parse and validate (counting
/// skips), tag, build the graph, assemble the bundle, publish it, and
/// record the checkpoint. Infrastructure is injected through generic ports.
///
/// # Type Parameters
/// * `F` - AdvisoryFeed implementation
/// * `A` - ArtifactStore implementation
/// * `P` - BundlePublisher implementation
/// * `C` - CheckpointStore implementation
/// * `R` - RunReporter implementation
pub struct PublishAdvisoriesUseCase<F, A, P, C, R> {
    feed: F,
    artifacts: A,
    publisher: P,
    checkpoint: C,
    reporter: R,
    vocabulary: VendorVocabulary,
    profile: SourceProfile,
}

impl<F, A, P, C, R> PublishAdvisoriesUseCase<F, A, P, C, R>
where
    F: AdvisoryFeed,
    A: ArtifactStore,
    P: BundlePublisher,
    C: CheckpointStore,
    R: RunReporter,
{
    /// Creates a new use case with injected dependencies.
    pub fn new(
        feed: F,
        artifacts: A,
        publisher: P,
        checkpoint: C,
        reporter: R,
        vocabulary: VendorVocabulary,
        profile: SourceProfile,
    ) -> Self {
        Self {
            feed,
            artifacts,
            publisher,
            checkpoint,
            reporter,
            vocabulary,
            profile,
        }
    }

    /// Executes one full run.
    ///
    /// A row rejected at the parser boundary is skipped and counted; every
    /// other failure aborts the run. The checkpoint is recorded only after
    /// the sink has acknowledged the bundle, so a failed run is retried by
    /// the next scheduled cycle with a superset of the unpublished data.
    pub async fn execute(&self, request: RunRequest) -> Result<RunReport> {
        let (batch, rows, skipped) = self.load_and_annotate()?;

        let graph = GraphBuilder::new(
            &self.profile.author_name,
            &self.profile.source_name,
            &self.profile.vendor_label,
        )
        .build(&batch);

        self.reporter.report(&format!(
            "🧩 Graph built: {} report(s), {} software node(s)",
            graph.reports.len(),
            graph.software.len()
        ));

        // Assembly must succeed before the sink is touched: no partial
        // bundle is ever sent.
        let bundle = BundleAssembler::new().assemble(&graph)?;
        let payload = bundle.to_json()?;

        let run_label = format!(
            "{} run @ {}",
            self.profile.connector_name,
            request.started_at.format("%Y-%m-%d %H:%M:%S")
        );
        let work = self.publisher.initiate_work(&run_label).await?;
        self.publisher.send_bundle(&work, &payload).await?;

        let timestamp = request.started_at.timestamp();
        self.checkpoint.record(timestamp)?;

        let message = "Last_run stored, next run in: 1 days";
        self.publisher.complete_work(&work, message).await?;

        self.reporter.report_completion(&format!(
            "✅ Run complete: {} report(s) published, {} row(s) skipped, last_run stored as {}",
            graph.reports.len(),
            skipped,
            timestamp
        ));

        Ok(RunReport {
            rows,
            reports: graph.reports.len(),
            software: graph.software.len(),
            skipped,
            work,
            checkpoint: timestamp,
        })
    }

    /// Loads the batch, validates each row, and annotates the survivors
    /// with software tags.
    ///
    /// Returns (batch, total row count, skip count).
    fn load_and_annotate(&self) -> Result<(Vec<TaggedAdvisory>, usize, usize)> {
        self.reporter.report("📖 Loading advisory feed...");
        let rows = self.feed.read_rows()?;
        self.reporter
            .report(&format!("✅ Loaded {} advisory row(s)", rows.len()));

        let tagger = SoftwareTagger::new(&self.vocabulary);
        let mut batch = Vec::with_capacity(rows.len());
        let mut skipped = 0usize;

        for row in &rows {
            let raw = match RawAdvisory::from_fields(row.row, &row.fields) {
                Ok(raw) => raw,
                Err(error @ ConnectorError::MalformedRecord { .. }) => {
                    skipped += 1;
                    self.reporter
                        .report_error(&format!("⚠️  Warning: {}. Row skipped.", error));
                    continue;
                }
                Err(error) => return Err(error.into()),
            };

            let snippet = self.artifacts.snippet(&raw.advisory_id)?;
            batch.push(tagger.annotate(raw.into_record(snippet)));
        }

        if skipped > 0 {
            self.reporter.report_error(&format!(
                "⚠️  Warning: {} of {} row(s) were malformed and skipped",
                skipped,
                rows.len()
            ));
        }

        Ok((batch, rows.len(), skipped))
    }
}
