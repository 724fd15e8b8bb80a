use crate::advisory::domain::{Bundle, StixObject};
use crate::advisory::services::graph::BundleGraph;
use crate::shared::error::ConnectorError;
use crate::shared::Result;
use std::collections::HashSet;

/// Packages a [`BundleGraph`] into the serializable bundle container.
///
/// Serialized object order is fixed for determinism: the author first, then
/// software nodes in first-reference order, then reports in input order.
pub struct BundleAssembler;

impl BundleAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Assembles the bundle, verifying referential integrity first.
    ///
    /// Every in-bundle reference (identity, software, report) held by a
    /// report must resolve to an object present in the container.
    /// Vulnerability references address pre-existing nodes in the downstream
    /// store and are exempt from the check.
    ///
    /// # Errors
    /// Returns `ConnectorError::GraphIntegrity` on a dangling reference.
    /// This is fatal for the run's publication step: no partial bundle is
    /// ever produced.
    pub fn assemble(&self, graph: &BundleGraph) -> Result<Bundle> {
        let mut objects: Vec<StixObject> =
            Vec::with_capacity(1 + graph.software.len() + graph.reports.len());
        objects.push(StixObject::Identity(graph.author.clone()));
        objects.extend(graph.software.iter().cloned().map(StixObject::Software));
        objects.extend(graph.reports.iter().cloned().map(StixObject::Report));

        let bundled_ids: HashSet<&str> = objects.iter().map(|o| o.id().as_str()).collect();

        for report in &graph.reports {
            if !bundled_ids.contains(report.created_by_ref.as_str()) {
                return Err(dangling(&report.name, report.created_by_ref.as_str()).into());
            }
            for reference in &report.object_refs {
                let in_bundle_kind =
                    matches!(reference.object_type(), "identity" | "software" | "report");
                if in_bundle_kind && !bundled_ids.contains(reference.as_str()) {
                    return Err(dangling(&report.name, reference.as_str()).into());
                }
            }
        }

        Ok(Bundle::new(objects))
    }
}

impl Default for BundleAssembler {
    fn default() -> Self {
        Self::new()
    }
}

fn dangling(report_name: &str, reference: &str) -> ConnectorError {
    ConnectorError::GraphIntegrity {
        reason: format!(
            "report {} references {}, which is not part of the bundle",
            report_name, reference
        ),
    }
}
