use ghsa_stix::prelude::*;

/// Mock AdvisoryFeed serving in-memory rows
pub struct MockAdvisoryFeed {
    pub rows: Vec<Vec<String>>,
    pub should_fail: bool,
}

impl MockAdvisoryFeed {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            rows: Vec::new(),
            should_fail: true,
        }
    }
}

impl AdvisoryFeed for MockAdvisoryFeed {
    fn read_rows(&self) -> Result<Vec<FeedRow>> {
        if self.should_fail {
            anyhow::bail!("Mock feed read failure");
        }
        Ok(self
            .rows
            .iter()
            .enumerate()
            .map(|(index, fields)| FeedRow {
                row: index + 1,
                fields: fields.clone(),
            })
            .collect())
    }
}
