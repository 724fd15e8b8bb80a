use ghsa_stix::prelude::*;
use std::collections::HashMap;

/// Mock ArtifactStore serving snippets from a map
pub struct MockArtifactStore {
    pub artifacts: HashMap<String, String>,
}

impl MockArtifactStore {
    pub fn new(artifacts: HashMap<String, String>) -> Self {
        Self { artifacts }
    }

    pub fn empty() -> Self {
        Self {
            artifacts: HashMap::new(),
        }
    }
}

impl ArtifactStore for MockArtifactStore {
    fn snippet(&self, advisory_id: &str) -> Result<Option<String>> {
        Ok(self.artifacts.get(advisory_id).cloned())
    }
}
