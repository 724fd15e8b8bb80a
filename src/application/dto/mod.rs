/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod run_report;
mod run_request;
mod source_profile;

pub use run_report::RunReport;
pub use run_request::RunRequest;
pub use source_profile::SourceProfile;
