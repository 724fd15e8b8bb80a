/// RunReporter port for human-readable run progress
///
/// This port abstracts progress reporting (e.g., to stderr)
/// to provide operator feedback during a connector run.
pub trait RunReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of a run
    fn report_completion(&self, message: &str);
}
