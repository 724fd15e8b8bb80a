use crate::shared::Result;

/// CheckpointStore port for the persisted last-successful-run timestamp.
///
/// The checkpoint is read (optionally) at startup and overwritten only
/// after the publication sink has acknowledged the bundle, so a failed run
/// leaves the previous checkpoint in place.
pub trait CheckpointStore {
    /// Unix timestamp of the last successful run, if any.
    fn last_run(&self) -> Result<Option<i64>>;

    /// Records a successful run.
    fn record(&self, timestamp: i64) -> Result<()>;
}
