mod adapters;
mod advisory;
mod application;
mod cli;
mod config;
mod ports;
mod scheduler;
mod shared;

use adapters::outbound::console::StderrRunReporter;
use adapters::outbound::filesystem::{
    CsvAdvisoryFeed, FileBundleSink, FileCheckpointStore, JsonArtifactStore, NullCheckpointStore,
    StdoutBundleSink,
};
use adapters::outbound::network::OpenCtiPublisher;
use advisory::domain::VendorVocabulary;
use application::dto::RunRequest;
use application::use_cases::PublishAdvisoriesUseCase;
use async_trait::async_trait;
use cli::Args;
use ports::outbound::{
    AdvisoryFeed, ArtifactStore, BundlePublisher, CheckpointStore, RunReporter,
};
use scheduler::{Cycle, Scheduler};
use shared::error::ExitCode;
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

/// Backoff before exiting on a daemon-mode failure, so an external
/// supervisor's restart loop cannot spin hot.
const SUPERVISOR_PAUSE: Duration = Duration::from_secs(10);

fn main() {
    let args = Args::parse_args();
    let daemon_mode = args.output.is_none() && !args.once;

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        if daemon_mode {
            std::thread::sleep(SUPERVISOR_PAUSE);
        }
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

#[tokio::main]
async fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => config::load_config_from_path(Path::new(path))?,
        None => config::discover_config(Path::new("."))?.unwrap_or_default(),
    };

    // Process-wide vocabulary: loaded once, never reloaded mid-run
    let vocabulary = VendorVocabulary::shared(&config.vocabulary_path())?.clone();
    let profile = config.profile();

    let feed = CsvAdvisoryFeed::new(config.feed_path());
    let artifacts = JsonArtifactStore::new(config.artifact_dir());
    let reporter = StderrRunReporter::new();

    // Local output mode: one run, bundle written locally, no checkpoint
    if let Some(output) = &args.output {
        let publisher: Box<dyn BundlePublisher + Send + Sync> = if output.as_str() == "-" {
            Box::new(StdoutBundleSink::new())
        } else {
            Box::new(FileBundleSink::new(PathBuf::from(output)))
        };

        let use_case = PublishAdvisoriesUseCase::new(
            feed,
            artifacts,
            publisher,
            NullCheckpointStore,
            reporter,
            vocabulary,
            profile,
        );
        use_case.execute(RunRequest::starting_now()).await?;
        return Ok(());
    }

    let sink = config.opencti_settings()?;
    let publisher = OpenCtiPublisher::new(&sink.url, &sink.token, &sink.connector_id)?;
    let checkpoint = FileCheckpointStore::new(config.checkpoint_path());

    if let Some(last_run) = checkpoint.last_run()? {
        reporter.report(&format!("⏱️  Last successful run: {}", last_run));
    }

    let use_case = PublishAdvisoriesUseCase::new(
        feed,
        artifacts,
        publisher,
        checkpoint,
        reporter,
        vocabulary,
        profile,
    );

    if args.once {
        use_case.execute(RunRequest::starting_now()).await?;
        return Ok(());
    }

    let connector = Connector { use_case };
    Scheduler::new(config.interval())
        .run(&connector, shutdown_signal())
        .await
}

/// The daemon's schedulable unit: one full publish run.
struct Connector<F, A, P, C, R> {
    use_case: PublishAdvisoriesUseCase<F, A, P, C, R>,
}

#[async_trait]
impl<F, A, P, C, R> Cycle for Connector<F, A, P, C, R>
where
    F: AdvisoryFeed + Send + Sync,
    A: ArtifactStore + Send + Sync,
    P: BundlePublisher + Send + Sync,
    C: CheckpointStore + Send + Sync,
    R: RunReporter + Send + Sync,
{
    async fn run_once(&self) -> Result<()> {
        self.use_case
            .execute(RunRequest::starting_now())
            .await
            .map(|_| ())
    }
}

/// Resolves on ctrl-c; the scheduler only observes it between runs.
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
