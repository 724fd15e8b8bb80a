use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the connector process.
///
/// These codes allow supervision systems to distinguish between
/// different kinds of termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the run (or the last run before shutdown) completed
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (configuration, transport, I/O, graph integrity)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Connector error taxonomy.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
///
/// The four variants carry distinct recovery semantics:
/// - `Configuration` aborts the run before any processing
/// - `MalformedRecord` is a per-row condition; the row is skipped and counted
/// - `GraphIntegrity` aborts the publication step of the current run
/// - `Transport` fails the run without updating the checkpoint, so the next
///   scheduled run retries with a superset of the unpublished data
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("Configuration error: {reason}\n\n💡 Hint: Check the config file and the paths it points to")]
    Configuration { reason: String },

    #[error("Vocabulary unavailable: {path}\nDetails: {details}\n\n💡 Hint: Tagging cannot proceed without a known-good vendor vocabulary")]
    Vocabulary { path: PathBuf, details: String },

    #[error("Malformed advisory row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    #[error("Graph integrity violation: {reason}")]
    GraphIntegrity { reason: String },

    #[error("Transport error: {reason}\n\n💡 Hint: The checkpoint was not updated; the next scheduled run will retry")]
    Transport { reason: String },
}

impl ConnectorError {
    /// True for errors that must never result in a checkpoint update.
    pub fn fails_publication(&self) -> bool {
        matches!(
            self,
            ConnectorError::GraphIntegrity { .. } | ConnectorError::Transport { .. }
        )
    }
}
