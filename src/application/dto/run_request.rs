use chrono::{DateTime, Utc};

/// RunRequest - Internal request DTO for one connector run
///
/// The run's start instant is captured by the caller so the use case stays
/// deterministic: the run label and the checkpoint value are both derived
/// from it, never from a clock read mid-run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub started_at: DateTime<Utc>,
}

impl RunRequest {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self { started_at }
    }

    /// A request stamped with the current time.
    pub fn starting_now() -> Self {
        Self::new(Utc::now())
    }
}
