use crate::shared::error::ConnectorError;

/// Number of columns in the versioned advisory feed contract.
///
/// Column order: advisory-ID, database URL, modified, published, CVE ids
/// (space-delimited), severity label, CWE ids, CVSS base metrics, summary,
/// reference URL, details (narrative), affected components.
pub const FEED_FIELD_COUNT: usize = 12;

/// One advisory row exactly as delivered by the feed, before normalization.
///
/// This is the parser/validator boundary: a row that does not satisfy the
/// feed contract never becomes an [`AdvisoryRecord`]. A wrong column count
/// invalidates the whole batch; a missing advisory identifier invalidates
/// only the row (skip-and-continue).
#[derive(Debug, Clone)]
pub struct RawAdvisory {
    pub advisory_id: String,
    pub database_url: String,
    pub modified: String,
    pub published: String,
    pub cve_ids: String,
    pub severity: String,
    pub cwe_ids: String,
    pub base_metrics: String,
    pub summary: String,
    pub reference_url: String,
    pub details: String,
    pub affected: String,
}

impl RawAdvisory {
    /// Validates a positional field tuple against the feed contract.
    ///
    /// # Arguments
    /// * `row` - 1-based data row number, used in error messages
    /// * `fields` - The row's fields in feed column order
    ///
    /// # Errors
    /// - `ConnectorError::Configuration` if the column count is wrong
    ///   (fatal for the batch)
    /// - `ConnectorError::MalformedRecord` if the advisory identifier is
    ///   empty (skip-and-continue)
    pub fn from_fields(row: usize, fields: &[String]) -> Result<Self, ConnectorError> {
        if fields.len() != FEED_FIELD_COUNT {
            return Err(ConnectorError::Configuration {
                reason: format!(
                    "feed row {} has {} columns, expected {}",
                    row,
                    fields.len(),
                    FEED_FIELD_COUNT
                ),
            });
        }

        let advisory_id = fields[0].trim();
        if advisory_id.is_empty() {
            return Err(ConnectorError::MalformedRecord {
                row,
                reason: "advisory identifier is empty".to_string(),
            });
        }

        Ok(Self {
            advisory_id: advisory_id.to_string(),
            database_url: fields[1].clone(),
            modified: fields[2].clone(),
            published: fields[3].clone(),
            cve_ids: fields[4].clone(),
            severity: fields[5].clone(),
            cwe_ids: fields[6].clone(),
            base_metrics: fields[7].clone(),
            summary: fields[8].clone(),
            reference_url: fields[9].clone(),
            details: fields[10].clone(),
            affected: fields[11].clone(),
        })
    }

    /// Consumes the raw row into a normalized record, appending the optional
    /// supplementary code artifact to the composed description.
    pub fn into_record(self, snippet: Option<String>) -> AdvisoryRecord {
        AdvisoryRecord::new(self, snippet)
    }
}

/// Normalized in-memory representation of one advisory.
///
/// Constructed once per input row per run and immutable afterwards.
/// Empty-string optional fields are normalized to `None` so downstream code
/// never has to treat an empty string as meaningful content.
#[derive(Debug, Clone)]
pub struct AdvisoryRecord {
    /// Vendor-assigned, globally unique advisory identifier (e.g. a GHSA id)
    pub id: String,
    pub database_url: String,
    pub modified: String,
    pub published: String,
    /// Correlated external vulnerability identifiers, in listed order
    pub cve_ids: Vec<String>,
    pub severity: Option<String>,
    pub cwe_ids: Option<String>,
    pub base_metrics: Option<String>,
    pub summary: Option<String>,
    pub reference_url: String,
    /// Free-text narrative used for vendor-product tagging
    pub details: Option<String>,
    pub affected: Option<String>,
    /// Long-form description composed from the fields above plus, if
    /// present, the fenced supplementary code artifact
    pub description: String,
}

impl AdvisoryRecord {
    fn new(raw: RawAdvisory, snippet: Option<String>) -> Self {
        let description = compose_description(&raw, snippet.as_deref());
        Self {
            id: raw.advisory_id,
            database_url: raw.database_url,
            modified: raw.modified,
            published: raw.published,
            cve_ids: raw.cve_ids.split_whitespace().map(String::from).collect(),
            severity: normalize(raw.severity),
            cwe_ids: normalize(raw.cwe_ids),
            base_metrics: normalize(raw.base_metrics),
            summary: normalize(raw.summary),
            reference_url: raw.reference_url,
            details: normalize(raw.details),
            affected: normalize(raw.affected),
            description,
        }
    }

    /// Display name of the report derived from this advisory.
    pub fn report_name(&self) -> String {
        format!("GITHUB:{}", self.id)
    }
}

/// Empty strings become an explicit absent marker.
fn normalize(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Composes the long-form description from the captioned advisory fields.
///
/// The supplementary artifact, when present, is appended inside a fenced
/// code block so markdown renderers keep it out of the prose.
fn compose_description(raw: &RawAdvisory, snippet: Option<&str>) -> String {
    let mut description = format!(
        "summary: {}\n\ndetails: {}\n\nadvisory_database_url: {}\n\nCVSS_severity: {}\n\ncwe_ids: {}\n\nCVSS_base_metrics: {}\n\naffected: {}",
        raw.summary,
        raw.details,
        raw.database_url,
        raw.severity,
        raw.cwe_ids,
        raw.base_metrics,
        raw.affected,
    );

    if let Some(code) = snippet {
        description.push_str(&format!("\n\n```\n{}\n```", code));
    }

    description
}
