//! Subcommand implementations.

pub mod check;
pub mod extract;

use anyhow::{Context, Result};
use std::path::Path;

use piispan_core::{merge_config, ExtractionConfig, ExtractionEngine};

/// Builds an engine from the embedded defaults, merged with a user file if given.
pub fn build_engine(config_path: Option<&Path>) -> Result<ExtractionEngine> {
    let default_config = ExtractionConfig::load_default()?;
    let user_config = config_path
        .map(ExtractionConfig::load_from_file)
        .transpose()
        .context("Failed to load user label configuration")?;
    ExtractionEngine::new(merge_config(default_config, user_config))
}
