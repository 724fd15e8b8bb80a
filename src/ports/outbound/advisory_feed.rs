use crate::shared::Result;

/// One advisory row as delivered by the feed: a positional field tuple plus
/// its 1-based data row number for error reporting.
#[derive(Debug, Clone)]
pub struct FeedRow {
    pub row: usize,
    pub fields: Vec<String>,
}

/// AdvisoryFeed port for pulling the current batch of advisory rows.
///
/// The adapter owns the file-format details; the core receives
/// already-delimited field tuples with the header row removed.
pub trait AdvisoryFeed {
    /// Reads the full batch for this run.
    ///
    /// # Errors
    /// Returns an error if the feed source is missing, unreadable, or does
    /// not satisfy the versioned column contract (fatal for the batch).
    fn read_rows(&self) -> Result<Vec<FeedRow>>;
}
