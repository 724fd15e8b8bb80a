use crate::advisory::domain::{ExternalReference, Identity, Report, Software};
use crate::advisory::services::identity::{IdentityResolver, NodeKind};
use crate::advisory::services::tagger::TaggedAdvisory;
use serde_json::Map;
use std::collections::HashSet;

/// The in-memory object graph produced for one batch: one author, the
/// distinct software nodes in first-reference order, and one report per
/// advisory in input order.
#[derive(Debug, Clone)]
pub struct BundleGraph {
    pub author: Identity,
    pub software: Vec<Software>,
    pub reports: Vec<Report>,
}

/// Assembles the full object graph for a batch of tagged advisories.
pub struct GraphBuilder {
    author_name: String,
    source_name: String,
    vendor_label: String,
}

impl GraphBuilder {
    pub fn new(author_name: &str, source_name: &str, vendor_label: &str) -> Self {
        Self {
            author_name: author_name.to_string(),
            source_name: source_name.to_string(),
            vendor_label: vendor_label.to_string(),
        }
    }

    /// Builds the graph in deterministic order.
    ///
    /// Every report's reference list starts with the author, followed by one
    /// vulnerability reference per correlated CVE in listed order (duplicates
    /// within one advisory are kept), followed by the tagged software node.
    /// Software nodes are deduplicated by product name across the batch;
    /// a repeated advisory identifier keeps only its first occurrence so the
    /// graph never carries two reports with the same identifier.
    pub fn build(&self, batch: &[TaggedAdvisory]) -> BundleGraph {
        let author = Identity {
            object_type: Identity::TYPE.to_string(),
            id: IdentityResolver::resolve(NodeKind::Author, &self.author_name),
            name: self.author_name.clone(),
            identity_class: "organization".to_string(),
            extra: Map::new(),
        };

        let mut software: Vec<Software> = Vec::new();
        let mut seen_products: HashSet<String> = HashSet::new();
        let mut reports: Vec<Report> = Vec::new();
        let mut seen_reports: HashSet<String> = HashSet::new();

        for tagged in batch {
            let record = &tagged.record;
            let report_id = IdentityResolver::resolve(NodeKind::Report, &record.report_name());
            if !seen_reports.insert(report_id.as_str().to_string()) {
                continue;
            }

            let mut object_refs = vec![author.id.clone()];

            for cve_id in &record.cve_ids {
                object_refs.push(IdentityResolver::resolve(NodeKind::Vulnerability, cve_id));
            }

            let mut labels = Vec::new();
            if let Some(tag) = &tagged.tag {
                let software_id = IdentityResolver::resolve(NodeKind::Software, &tag.product);
                if seen_products.insert(tag.product.clone()) {
                    software.push(Software {
                        object_type: Software::TYPE.to_string(),
                        id: software_id.clone(),
                        name: tag.product.clone(),
                        extra: Map::new(),
                    });
                }
                object_refs.push(software_id);
                labels.push(self.vendor_label.clone());
            }

            reports.push(Report {
                object_type: Report::TYPE.to_string(),
                id: report_id,
                name: record.report_name(),
                description: record.description.clone(),
                published: record.published.clone(),
                modified: record.modified.clone(),
                created_by_ref: author.id.clone(),
                external_references: vec![ExternalReference {
                    source_name: self.source_name.clone(),
                    url: record.reference_url.clone(),
                }],
                object_refs,
                labels,
                extra: Map::new(),
            });
        }

        BundleGraph {
            author,
            software,
            reports,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::domain::{RawAdvisory, VendorVocabulary};
    use crate::advisory::services::tagger::SoftwareTagger;

    fn builder() -> GraphBuilder {
        GraphBuilder::new("Github", "Github", "HUAWEI")
    }

    fn tagged(id: &str, cve: &str, details: &str, vocabulary: &VendorVocabulary) -> TaggedAdvisory {
        let fields: Vec<String> = vec![
            id,
            "https://github.com/advisories/x",
            "2023-05-02T12:00:00Z",
            "2023-05-01T12:00:00Z",
            cve,
            "HIGH",
            "CWE-79",
            "",
            "summary",
            "https://example.com/ref",
            details,
            "affected",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        let record = RawAdvisory::from_fields(1, &fields).unwrap().into_record(None);
        SoftwareTagger::new(vocabulary).annotate(record)
    }

    #[test]
    fn test_author_is_first_reference_of_every_report() {
        let vocabulary = VendorVocabulary::from_products(["zlib"]);
        let batch = vec![
            tagged("GHSA-1111-1111-1111", "", "zlib bug", &vocabulary),
            tagged("GHSA-2222-2222-2222", "", "other bug", &vocabulary),
        ];
        let graph = builder().build(&batch);
        for report in &graph.reports {
            assert_eq!(report.object_refs[0], graph.author.id);
            assert_eq!(report.created_by_ref, graph.author.id);
        }
    }

    #[test]
    fn test_software_nodes_are_deduplicated() {
        let vocabulary = VendorVocabulary::from_products(["zlib"]);
        let batch = vec![
            tagged("GHSA-1111-1111-1111", "", "zlib inflate bug", &vocabulary),
            tagged("GHSA-2222-2222-2222", "", "zlib deflate bug", &vocabulary),
            tagged("GHSA-3333-3333-3333", "", "again zlib", &vocabulary),
        ];
        let graph = builder().build(&batch);
        assert_eq!(graph.software.len(), 1);
        assert_eq!(graph.software[0].name, "zlib");
        let software_id = &graph.software[0].id;
        for report in &graph.reports {
            assert!(report.object_refs.contains(software_id));
        }
    }

    #[test]
    fn test_vulnerability_references_in_order_with_duplicates() {
        let vocabulary = VendorVocabulary::from_products(Vec::<String>::new());
        let batch = vec![tagged(
            "GHSA-1111-1111-1111",
            "CVE-2021-1 CVE-2021-2 CVE-2021-1",
            "no tag here",
            &vocabulary,
        )];
        let graph = builder().build(&batch);
        let refs = &graph.reports[0].object_refs;
        // author + three vulnerability references, duplicates kept
        assert_eq!(refs.len(), 4);
        assert_eq!(
            refs[1],
            IdentityResolver::resolve(NodeKind::Vulnerability, "CVE-2021-1")
        );
        assert_eq!(
            refs[2],
            IdentityResolver::resolve(NodeKind::Vulnerability, "CVE-2021-2")
        );
        assert_eq!(refs[3], refs[1]);
    }

    #[test]
    fn test_labels_only_when_tagged() {
        let vocabulary = VendorVocabulary::from_products(["zlib"]);
        let batch = vec![
            tagged("GHSA-1111-1111-1111", "", "zlib bug", &vocabulary),
            tagged("GHSA-2222-2222-2222", "", "unrelated", &vocabulary),
        ];
        let graph = builder().build(&batch);
        assert_eq!(graph.reports[0].labels, vec!["HUAWEI"]);
        assert!(graph.reports[1].labels.is_empty());
    }

    #[test]
    fn test_reports_preserve_input_order() {
        let vocabulary = VendorVocabulary::from_products(Vec::<String>::new());
        let batch = vec![
            tagged("GHSA-2222-2222-2222", "", "b", &vocabulary),
            tagged("GHSA-1111-1111-1111", "", "a", &vocabulary),
        ];
        let graph = builder().build(&batch);
        assert_eq!(graph.reports[0].name, "GITHUB:GHSA-2222-2222-2222");
        assert_eq!(graph.reports[1].name, "GITHUB:GHSA-1111-1111-1111");
    }

    #[test]
    fn test_repeated_advisory_keeps_first_occurrence() {
        let vocabulary = VendorVocabulary::from_products(Vec::<String>::new());
        let batch = vec![
            tagged("GHSA-1111-1111-1111", "CVE-2021-1", "first", &vocabulary),
            tagged("GHSA-1111-1111-1111", "CVE-2021-2", "second", &vocabulary),
        ];
        let graph = builder().build(&batch);
        assert_eq!(graph.reports.len(), 1);
        assert!(graph.reports[0].description.contains("first"));
    }

    #[test]
    fn test_external_reference_carries_reference_url() {
        let vocabulary = VendorVocabulary::from_products(Vec::<String>::new());
        let batch = vec![tagged("GHSA-1111-1111-1111", "", "x", &vocabulary)];
        let graph = builder().build(&batch);
        let reference = &graph.reports[0].external_references[0];
        assert_eq!(reference.source_name, "Github");
        assert_eq!(reference.url, "https://example.com/ref");
    }
}
