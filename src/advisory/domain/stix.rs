use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A STIX object identifier of the form `<type>--<uuid>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StixId(String);

impl StixId {
    pub fn new(object_type: &str, uuid: uuid::Uuid) -> Self {
        Self(format!("{}--{}", object_type, uuid))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `<type>` prefix of the identifier, or the whole string if it has
    /// no `--` separator.
    pub fn object_type(&self) -> &str {
        self.0.split("--").next().unwrap_or(&self.0)
    }
}

impl fmt::Display for StixId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// External reference attached to a report (source name + URL).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalReference {
    pub source_name: String,
    pub url: String,
}

/// The author identity node, one per data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "type")]
    pub object_type: String,
    pub id: StixId,
    pub name: String,
    pub identity_class: String,
    /// Custom properties tolerated on ingest (lenient schema)
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl Identity {
    pub const TYPE: &'static str = "identity";
}

/// A vendor software product node, one per distinct tagged product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Software {
    #[serde(rename = "type")]
    pub object_type: String,
    pub id: StixId,
    pub name: String,
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl Software {
    pub const TYPE: &'static str = "software";
}

/// A report node, one per advisory.
///
/// `object_refs` is the report's reference list: the author first, then one
/// vulnerability reference per correlated CVE in listed order, then the
/// tagged software node if any. Vulnerability references address nodes that
/// already exist downstream and are never materialized in the bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "type")]
    pub object_type: String,
    pub id: StixId,
    pub name: String,
    pub description: String,
    pub published: String,
    pub modified: String,
    pub created_by_ref: StixId,
    pub external_references: Vec<ExternalReference>,
    pub object_refs: Vec<StixId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl Report {
    pub const TYPE: &'static str = "report";
}

/// Any object that can appear in a bundle.
///
/// Untagged: each variant is recognized by its field set, with the report
/// first because it has the richest required shape. The serialized `type`
/// property lives on the structs themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StixObject {
    Report(Report),
    Identity(Identity),
    Software(Software),
}

impl StixObject {
    pub fn id(&self) -> &StixId {
        match self {
            StixObject::Identity(identity) => &identity.id,
            StixObject::Software(software) => &software.id,
            StixObject::Report(report) => &report.id,
        }
    }
}

/// The top-level serializable container for one run.
///
/// Constructed fresh each run and discarded after transmission; it carries
/// no state across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(rename = "type")]
    pub object_type: String,
    pub id: StixId,
    pub objects: Vec<StixObject>,
}

impl Bundle {
    pub fn new(objects: Vec<StixObject>) -> Self {
        Self {
            object_type: "bundle".to_string(),
            id: StixId::new("bundle", uuid::Uuid::new_v4()),
            objects,
        }
    }

    /// Serializes the bundle to its JSON wire form.
    pub fn to_json(&self) -> crate::shared::Result<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    /// Parses a bundle from its JSON wire form. Custom fields on known
    /// object types are tolerated and preserved.
    pub fn from_json(payload: &str) -> crate::shared::Result<Self> {
        serde_json::from_str(payload).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_fixture() -> Identity {
        Identity {
            object_type: Identity::TYPE.to_string(),
            id: StixId::new("identity", uuid::Uuid::new_v4()),
            name: "Github".to_string(),
            identity_class: "organization".to_string(),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_stix_id_format_and_type() {
        let id = StixId::new("report", uuid::Uuid::nil());
        assert_eq!(
            id.as_str(),
            "report--00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(id.object_type(), "report");
    }

    #[test]
    fn test_bundle_serializes_with_type_properties() {
        let bundle = Bundle::new(vec![StixObject::Identity(identity_fixture())]);
        let json = bundle.to_json().unwrap();
        assert!(json.contains("\"type\": \"bundle\""));
        assert!(json.contains("\"type\": \"identity\""));
        assert!(json.contains("\"identity_class\": \"organization\""));
    }

    #[test]
    fn test_bundle_round_trip() {
        let bundle = Bundle::new(vec![StixObject::Identity(identity_fixture())]);
        let parsed = Bundle::from_json(&bundle.to_json().unwrap()).unwrap();
        assert_eq!(parsed, bundle);
    }

    #[test]
    fn test_custom_fields_are_tolerated() {
        let json = r#"{
            "type": "bundle",
            "id": "bundle--11111111-2222-3333-4444-555555555555",
            "objects": [
                {
                    "type": "software",
                    "id": "software--00000000-0000-0000-0000-000000000000",
                    "name": "zlib",
                    "x_vendor_rank": 3
                }
            ]
        }"#;
        let bundle = Bundle::from_json(json).unwrap();
        let StixObject::Software(software) = &bundle.objects[0] else {
            panic!("expected software object");
        };
        assert_eq!(software.name, "zlib");
        assert_eq!(software.extra["x_vendor_rank"], 3);

        // Custom fields survive re-serialization
        let json_again = bundle.to_json().unwrap();
        assert!(json_again.contains("x_vendor_rank"));
    }

    #[test]
    fn test_object_variants_are_recognized_by_shape() {
        let json = r#"{
            "type": "bundle",
            "id": "bundle--11111111-2222-3333-4444-555555555555",
            "objects": [
                {
                    "type": "identity",
                    "id": "identity--00000000-0000-0000-0000-000000000001",
                    "name": "Github",
                    "identity_class": "organization"
                },
                {
                    "type": "software",
                    "id": "software--00000000-0000-0000-0000-000000000002",
                    "name": "zlib"
                }
            ]
        }"#;
        let bundle = Bundle::from_json(json).unwrap();
        assert!(matches!(bundle.objects[0], StixObject::Identity(_)));
        assert!(matches!(bundle.objects[1], StixObject::Software(_)));
    }

    #[test]
    fn test_empty_labels_omitted() {
        let report = Report {
            object_type: Report::TYPE.to_string(),
            id: StixId::new("report", uuid::Uuid::nil()),
            name: "GITHUB:GHSA-x".to_string(),
            description: "d".to_string(),
            published: "2023-01-01T00:00:00Z".to_string(),
            modified: "2023-01-02T00:00:00Z".to_string(),
            created_by_ref: StixId::new("identity", uuid::Uuid::nil()),
            external_references: vec![],
            object_refs: vec![],
            labels: vec![],
            extra: Map::new(),
        };
        let json = serde_json::to_string(&StixObject::Report(report)).unwrap();
        assert!(!json.contains("labels"));
    }
}
