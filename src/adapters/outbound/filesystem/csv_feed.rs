use crate::advisory::domain::FEED_FIELD_COUNT;
use crate::ports::outbound::{AdvisoryFeed, FeedRow};
use crate::shared::error::ConnectorError;
use crate::shared::{security, Result};
use std::path::PathBuf;

/// CsvAdvisoryFeed adapter reading the advisory batch from a CSV export
///
/// The first line is a header and is skipped. Every data row must satisfy
/// the versioned column contract; a row with the wrong column count fails
/// the whole batch at load time.
pub struct CsvAdvisoryFeed {
    path: PathBuf,
}

impl CsvAdvisoryFeed {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl AdvisoryFeed for CsvAdvisoryFeed {
    fn read_rows(&self) -> Result<Vec<FeedRow>> {
        if !self.path.exists() {
            return Err(ConnectorError::Configuration {
                reason: format!("advisory feed not found: {}", self.path.display()),
            }
            .into());
        }
        security::validate_regular_file(&self.path, "advisory feed")?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| ConnectorError::Configuration {
                reason: format!("failed to open advisory feed {}: {}", self.path.display(), e),
            })?;

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let row = index + 1;
            let record = result.map_err(|e| ConnectorError::Configuration {
                reason: format!("failed to parse advisory feed row {}: {}", row, e),
            })?;

            let fields: Vec<String> = record.iter().map(str::to_string).collect();
            if fields.len() != FEED_FIELD_COUNT {
                return Err(ConnectorError::Configuration {
                    reason: format!(
                        "feed row {} has {} columns, expected {}",
                        row,
                        fields.len(),
                        FEED_FIELD_COUNT
                    ),
                }
                .into());
            }

            rows.push(FeedRow { row, fields });
        }

        Ok(rows)
    }
}
