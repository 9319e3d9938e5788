//! Single-span inspection: how a text is normalized and whether it validates.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use piispan_core::{EntityType, ExtractionEngine};

/// The printable result of a check.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CheckReport {
    pub label: EntityType,
    pub normalized: Option<String>,
    pub accepted: bool,
    pub pii: bool,
}

pub fn check_span(engine: &ExtractionEngine, label: &str, text: &str) -> CheckReport {
    let entity_type = EntityType::from(label);
    let bank = engine.bank();
    let verdict = bank.inspect(&entity_type, text);
    CheckReport {
        pii: bank.pii_table().is_pii(&entity_type),
        label: entity_type,
        normalized: verdict.normalized,
        accepted: verdict.accepted,
    }
}

pub fn print_check<W: Write>(writer: &mut W, report: &CheckReport, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *writer, report)?;
        writeln!(writer)?;
        return Ok(());
    }

    writeln!(writer, "label: {}", report.label)?;
    match &report.normalized {
        Some(normalized) => writeln!(writer, "normalized: {}", normalized)?,
        None => writeln!(writer, "normalized: (pass-through)")?,
    }
    writeln!(writer, "accepted: {}", report.accepted)?;
    writeln!(writer, "pii: {}", report.pii)?;
    Ok(())
}
