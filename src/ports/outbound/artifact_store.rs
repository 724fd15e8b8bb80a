use crate::shared::Result;

/// ArtifactStore port for the optional per-advisory supplementary artifact.
///
/// Each artifact is keyed by the advisory identifier and exposes a code
/// snippet that is appended, fenced, to the advisory's composed
/// description.
pub trait ArtifactStore {
    /// Returns the code snippet for the given advisory, or `None` if the
    /// store holds no artifact for it (not an error).
    ///
    /// # Errors
    /// Returns an error if an artifact exists but cannot be read or parsed.
    fn snippet(&self, advisory_id: &str) -> Result<Option<String>>;
}
