pub mod record;
pub mod stix;
pub mod vocabulary;

pub use record::{AdvisoryRecord, RawAdvisory, FEED_FIELD_COUNT};
pub use stix::{Bundle, ExternalReference, Identity, Report, Software, StixId, StixObject};
pub use vocabulary::VendorVocabulary;
