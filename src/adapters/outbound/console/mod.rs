/// Console adapters for operator-facing output
mod run_reporter;

pub use run_reporter::StderrRunReporter;
