//! Configuration file support for ghsa-stix.
//!
//! Provides YAML-based configuration through `config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::application::dto::SourceProfile;
use crate::shared::error::ConnectorError;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "config.yml";

/// Environment variable consulted when the config file omits the sink token.
const TOKEN_ENV_VAR: &str = "OPENCTI_TOKEN";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub feed_path: Option<String>,
    pub artifact_dir: Option<String>,
    pub vocabulary_path: Option<String>,
    pub checkpoint_path: Option<String>,
    pub interval_days: Option<u64>,
    pub connector_name: Option<String>,
    pub author_name: Option<String>,
    pub source_name: Option<String>,
    pub vendor_label: Option<String>,
    pub opencti: Option<OpenCtiSection>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Publication sink connection settings as written in the config file.
#[derive(Debug, Deserialize)]
pub struct OpenCtiSection {
    pub url: String,
    pub token: Option<String>,
    pub connector_id: String,
}

/// Fully resolved sink settings, token included.
#[derive(Debug, Clone)]
pub struct OpenCtiSettings {
    pub url: String,
    pub token: String,
    pub connector_id: String,
}

impl ConfigFile {
    pub fn feed_path(&self) -> PathBuf {
        PathBuf::from(self.feed_path.as_deref().unwrap_or("data/GitHub.csv"))
    }

    pub fn artifact_dir(&self) -> PathBuf {
        PathBuf::from(self.artifact_dir.as_deref().unwrap_or("data/github-data"))
    }

    pub fn vocabulary_path(&self) -> PathBuf {
        PathBuf::from(
            self.vocabulary_path
                .as_deref()
                .unwrap_or("data/huawei-open-source-software.csv"),
        )
    }

    pub fn checkpoint_path(&self) -> PathBuf {
        PathBuf::from(self.checkpoint_path.as_deref().unwrap_or("data/last_run"))
    }

    /// The scheduling interval between runs. Defaults to one day.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_days.unwrap_or(1) * 24 * 60 * 60)
    }

    pub fn profile(&self) -> SourceProfile {
        let defaults = SourceProfile::github();
        SourceProfile {
            connector_name: self
                .connector_name
                .clone()
                .unwrap_or(defaults.connector_name),
            author_name: self.author_name.clone().unwrap_or(defaults.author_name),
            source_name: self.source_name.clone().unwrap_or(defaults.source_name),
            vendor_label: self.vendor_label.clone().unwrap_or(defaults.vendor_label),
        }
    }

    /// Resolves the sink settings for publishing mode.
    ///
    /// # Errors
    /// Returns `ConnectorError::Configuration` when the `opencti` section is
    /// missing or no token is available in the file or the environment.
    pub fn opencti_settings(&self) -> Result<OpenCtiSettings> {
        let Some(section) = &self.opencti else {
            return Err(ConnectorError::Configuration {
                reason: "publishing requires an 'opencti' section (url, token, connector_id); use --output to write the bundle locally instead".to_string(),
            }
            .into());
        };

        let token = match &section.token {
            Some(token) if !token.trim().is_empty() => token.clone(),
            _ => std::env::var(TOKEN_ENV_VAR).map_err(|_| ConnectorError::Configuration {
                reason: format!(
                    "no sink token configured: set opencti.token or the {} environment variable",
                    TOKEN_ENV_VAR
                ),
            })?,
        };

        Ok(OpenCtiSettings {
            url: section.url.clone(),
            token,
            connector_id: section.connector_id.clone(),
        })
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.interval_days == Some(0) {
        bail!(
            "Invalid config: interval_days must be at least 1.\n\n\
             💡 Hint: The connector runs at most once per day per interval unit."
        );
    }

    if let Some(section) = &config.opencti {
        if section.url.trim().is_empty() {
            bail!("Invalid config: opencti.url must not be empty.");
        }
        if section.connector_id.trim().is_empty() {
            bail!("Invalid config: opencti.connector_id must not be empty.");
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
