/// SourceProfile - Names that characterize the advisory source
///
/// These flow into the graph: the author identity node, the external
/// reference source name, the vendor label attached to tagged reports, and
/// the connector name used in run labels.
#[derive(Debug, Clone)]
pub struct SourceProfile {
    pub connector_name: String,
    pub author_name: String,
    pub source_name: String,
    pub vendor_label: String,
}

impl SourceProfile {
    /// Profile for the GitHub Security Advisory feed.
    pub fn github() -> Self {
        Self {
            connector_name: "github".to_string(),
            author_name: "Github".to_string(),
            source_name: "Github".to_string(),
            vendor_label: "HUAWEI".to_string(),
        }
    }
}

impl Default for SourceProfile {
    fn default() -> Self {
        Self::github()
    }
}
