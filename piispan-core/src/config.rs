//! Configuration management for `piispan-core`.
//!
//! An [`ExtractionConfig`] describes one model configuration: its label
//! vocabulary in id order, the PII classification of each entity type, and
//! how special tokens are recognised in the offset stream. Configs are YAML;
//! a default is embedded in the crate and user files are merged over it.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::bank::PiiTable;
use crate::labels::LabelMap;
use crate::spans::SpecialTokenPolicy;

/// Represents the top-level configuration structure for piispan.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Label strings ordered by id. May be empty in a user override file.
    pub labels: Vec<String>,
    /// Entity type to PII flag.
    pub pii: PiiTable,
    /// Special-token convention of the upstream tokenizer.
    pub special_tokens: Option<SpecialTokenPolicy>,
}

impl ExtractionConfig {
    /// Loads a configuration from a YAML file.
    ///
    /// A non-empty label list is validated here; an override file that only
    /// carries `pii` entries is accepted as-is.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading label configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ExtractionConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        if !config.labels.is_empty() {
            config
                .label_map()
                .with_context(|| format!("Invalid labels in config file {}", path.display()))?;
        }
        info!(
            "Loaded {} labels and {} PII entries from file {}.",
            config.labels.len(),
            config.pii.len(),
            path.display()
        );

        Ok(config)
    }

    /// Loads the embedded default configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default label configuration from embedded string...");
        let default_yaml = include_str!("../config/default_labels.yaml");
        let config: ExtractionConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default label configuration")?;

        debug!("Loaded {} default labels.", config.labels.len());
        Ok(config)
    }

    /// Builds the id-to-label table for this configuration.
    pub fn label_map(&self) -> Result<LabelMap> {
        Ok(LabelMap::from_labels(&self.labels)?)
    }

    pub fn special_token_policy(&self) -> SpecialTokenPolicy {
        self.special_tokens.unwrap_or_default()
    }
}

/// Merges a user configuration over the defaults.
///
/// A non-empty user label list replaces the default one wholesale, since ids
/// are positional. PII entries are merged key by key.
pub fn merge_config(
    default_config: ExtractionConfig,
    user_config: Option<ExtractionConfig>,
) -> ExtractionConfig {
    let Some(user_cfg) = user_config else {
        debug!("No user config provided; using defaults.");
        return default_config;
    };

    let mut merged = default_config;

    if !user_cfg.labels.is_empty() {
        debug!(
            "Replacing {} default labels with {} user labels.",
            merged.labels.len(),
            user_cfg.labels.len()
        );
        merged.labels = user_cfg.labels;
    }

    debug!("Merging {} user PII entries.", user_cfg.pii.len());
    merged.pii.extend(user_cfg.pii);

    if let Some(policy) = user_cfg.special_tokens {
        debug!("Overriding special-token policy with user value: {:?}", policy);
        merged.special_tokens = Some(policy);
    }

    merged
}
