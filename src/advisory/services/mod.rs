pub mod assembler;
pub mod graph;
pub mod identity;
pub mod tagger;

pub use assembler::BundleAssembler;
pub use graph::{BundleGraph, GraphBuilder};
pub use identity::{IdentityResolver, NodeKind};
pub use tagger::{SoftwareTag, SoftwareTagger, TaggedAdvisory};
