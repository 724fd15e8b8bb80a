use crate::ports::outbound::WorkId;

/// RunReport - Result summary of one connector run
///
/// Partial success (some rows skipped, the rest published) is still a
/// successful run; the skip count is carried here so it can be surfaced in
/// the completion log.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Rows delivered by the feed, including skipped ones
    pub rows: usize,
    /// Report nodes in the published bundle
    pub reports: usize,
    /// Distinct software nodes in the published bundle
    pub software: usize,
    /// Rows rejected at the parser boundary
    pub skipped: usize,
    /// Acknowledgment token returned by the publication sink
    pub work: WorkId,
    /// Checkpoint value recorded for this run
    pub checkpoint: i64,
}
