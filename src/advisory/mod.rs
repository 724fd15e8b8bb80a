//! Advisory normalization and graph construction.
//!
//! Domain models (`domain`) and the pure services (`services`) that turn a
//! batch of advisory records into a deduplicated STIX object graph.

pub mod domain;
pub mod services;
