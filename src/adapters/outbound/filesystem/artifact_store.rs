use crate::ports::outbound::ArtifactStore;
use crate::shared::{security, Result};
use anyhow::Context;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Supplementary artifact file schema: at least a `code` field, other
/// fields tolerated.
#[derive(Debug, Deserialize)]
struct ArtifactFile {
    code: String,
    #[serde(flatten)]
    #[allow(dead_code)]
    extra: Map<String, Value>,
}

/// JsonArtifactStore adapter reading per-advisory artifacts from a
/// directory of `<advisory-id>.json` files
///
/// An absent file means the advisory simply has no supplementary artifact;
/// a present but unreadable or malformed file is an error.
pub struct JsonArtifactStore {
    dir: PathBuf,
}

impl JsonArtifactStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl ArtifactStore for JsonArtifactStore {
    fn snippet(&self, advisory_id: &str) -> Result<Option<String>> {
        // The identifier becomes a file name; refuse anything that could
        // escape the artifact directory
        if !is_safe_key(advisory_id) {
            anyhow::bail!(
                "Security: advisory identifier '{}' contains path characters and cannot be used as an artifact key",
                advisory_id
            );
        }

        let path = self.dir.join(format!("{}.json", advisory_id));
        if !path.exists() {
            return Ok(None);
        }

        let content = security::safe_read_to_string(&path, "supplementary artifact")?;
        let artifact: ArtifactFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse supplementary artifact: {}", path.display()))?;

        Ok(Some(artifact.code))
    }
}

/// Identifier characters safe to embed in a file name.
fn is_safe_key(key: &str) -> bool {
    !key.is_empty()
        && !key.contains("..")
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_snippet_present() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("GHSA-1111-1111-1111.json"),
            r#"{"code": "let x = 1;", "language": "rust"}"#,
        )
        .unwrap();

        let store = JsonArtifactStore::new(dir.path().to_path_buf());
        let snippet = store.snippet("GHSA-1111-1111-1111").unwrap();
        assert_eq!(snippet.as_deref(), Some("let x = 1;"));
    }

    #[test]
    fn test_snippet_absent_is_none() {
        let dir = TempDir::new().unwrap();
        let store = JsonArtifactStore::new(dir.path().to_path_buf());
        assert_eq!(store.snippet("GHSA-2222-2222-2222").unwrap(), None);
    }

    #[test]
    fn test_malformed_artifact_is_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("GHSA-3333-3333-3333.json"), "{not json").unwrap();

        let store = JsonArtifactStore::new(dir.path().to_path_buf());
        assert!(store.snippet("GHSA-3333-3333-3333").is_err());
    }

    #[test]
    fn test_missing_code_field_is_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("GHSA-4444-4444-4444.json"), r#"{"note": "x"}"#).unwrap();

        let store = JsonArtifactStore::new(dir.path().to_path_buf());
        assert!(store.snippet("GHSA-4444-4444-4444").is_err());
    }

    #[test]
    fn test_path_traversal_key_is_rejected() {
        let dir = TempDir::new().unwrap();
        let store = JsonArtifactStore::new(dir.path().to_path_buf());
        assert!(store.snippet("../etc/passwd").is_err());
        assert!(store.snippet("a/b").is_err());
        assert!(store.snippet("").is_err());
    }
}
