/// Use cases module containing application business logic orchestration
mod publish_advisories;

pub use publish_advisories::PublishAdvisoriesUseCase;
