use crate::shared::error::ConnectorError;
use crate::shared::security;
use crate::shared::Result;
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

/// Immutable set of known vendor software product names.
///
/// Loaded once per process lifetime and cached for the remaining lifetime
/// (see [`VendorVocabulary::shared`]); never reloaded mid-run even if the
/// underlying file changes. Membership queries are exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct VendorVocabulary {
    products: HashSet<String>,
}

static SHARED_VOCABULARY: OnceLock<VendorVocabulary> = OnceLock::new();

impl VendorVocabulary {
    /// Builds a vocabulary from an in-memory product list.
    ///
    /// Intended for tests and for callers that already hold the product set.
    pub fn from_products<I, S>(products: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            products: products.into_iter().map(Into::into).collect(),
        }
    }

    /// Loads the vocabulary from a CSV file: first column, header row skipped.
    ///
    /// # Errors
    /// Returns `ConnectorError::Vocabulary` if the file is missing, unreadable,
    /// malformed, or yields no product names. Tagging must not proceed without
    /// a known-good vocabulary, so this is fatal for the run.
    pub fn load(path: &Path) -> Result<Self> {
        let vocabulary_error = |details: String| ConnectorError::Vocabulary {
            path: path.to_path_buf(),
            details,
        };

        security::validate_regular_file(path, "vendor vocabulary")
            .map_err(|e| vocabulary_error(e.to_string()))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|e| vocabulary_error(e.to_string()))?;

        let mut products = HashSet::new();
        for result in reader.records() {
            let record = result.map_err(|e| vocabulary_error(e.to_string()))?;
            if let Some(name) = record.get(0) {
                let name = name.trim();
                if !name.is_empty() {
                    products.insert(name.to_string());
                }
            }
        }

        if products.is_empty() {
            return Err(vocabulary_error("vocabulary contains no product names".to_string()).into());
        }

        Ok(Self { products })
    }

    /// Process-wide vocabulary, loaded lazily on first use.
    ///
    /// Initialization is race-free: concurrent first callers may each load
    /// the file, but exactly one result is published and all callers observe
    /// the same instance afterwards.
    pub fn shared(path: &Path) -> Result<&'static VendorVocabulary> {
        if let Some(vocabulary) = SHARED_VOCABULARY.get() {
            return Ok(vocabulary);
        }
        let loaded = Self::load(path)?;
        Ok(SHARED_VOCABULARY.get_or_init(|| loaded))
    }

    /// Exact, case-sensitive membership query.
    pub fn contains(&self, token: &str) -> bool {
        self.products.contains(token)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
