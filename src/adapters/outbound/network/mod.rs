/// Network adapters for the downstream publication sink
mod opencti;

pub use opencti::OpenCtiPublisher;
