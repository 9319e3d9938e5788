//! Batch extraction: JSONL classifier predictions in, JSON entity report out.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use piispan_core::{ExtractionEngine, ExtractionReport, Utterance};

use crate::ui::{info_msg, warn_msg};

/// Options for [`run_extract`].
pub struct ExtractOptions {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Parses one utterance per non-blank line.
pub fn read_utterances<R: Read>(reader: R, source: &str) -> Result<Vec<Utterance>> {
    let mut utterances = Vec::new();
    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {} of {}", idx + 1, source))?;
        if line.trim().is_empty() {
            continue;
        }
        let utterance: Utterance = serde_json::from_str(&line)
            .with_context(|| format!("Failed to parse line {} of {}", idx + 1, source))?;
        utterances.push(utterance);
    }
    debug!("Read {} utterances from {}.", utterances.len(), source);
    Ok(utterances)
}

/// Serializes the report as pretty JSON, creating parent directories as needed.
pub fn write_report(report: &ExtractionReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    let json =
        serde_json::to_string_pretty(report).context("Failed to serialize extraction report")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    Ok(())
}

/// Runs extraction over the input file and writes the report.
///
/// Returns the number of utterances in the report.
pub fn run_extract(engine: &ExtractionEngine, opts: ExtractOptions) -> Result<usize> {
    info!("Starting extraction from {}.", opts.input.display());

    let file = fs::File::open(&opts.input)
        .with_context(|| format!("Failed to open input file: {}", opts.input.display()))?;
    let utterances = read_utterances(file, &opts.input.display().to_string())?;
    if utterances.is_empty() {
        warn_msg(format!("No utterances found in {}.", opts.input.display()));
    }

    let report = engine.extract_batch(&utterances);
    let entity_count: usize = report.values().map(Vec::len).sum();
    debug!("Extracted {} entities across {} utterances.", entity_count, report.len());

    write_report(&report, &opts.output)?;
    info_msg(format!(
        "Wrote predictions for {} utterances to {}",
        report.len(),
        opts.output.display()
    ));

    info!("Extraction completed.");
    Ok(report.len())
}
