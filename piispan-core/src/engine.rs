// piispan-core/src/engine.rs
//! The extraction engine: span reconstruction followed by the validator bank.
//!
//! An [`ExtractionEngine`] is built once per model configuration and then
//! applied to any number of utterances. It holds only immutable tables, so a
//! shared reference can be used from many threads at once.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use indexmap::IndexMap;

use crate::bank::ValidatorBank;
use crate::config::ExtractionConfig;
use crate::entity::{RawSpan, ValidatedEntity};
use crate::labels::{LabelId, LabelMap};
use crate::spans::{reconstruct_with, SpecialTokenPolicy, TokenOffset};

/// One utterance with the token classifier's predictions.
///
/// This is also the shape of a single line of the JSONL batch input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    pub id: String,
    pub text: String,
    pub offsets: Vec<TokenOffset>,
    pub label_ids: Vec<LabelId>,
}

/// Per-utterance entity lists keyed by utterance id, in input order.
pub type ExtractionReport = IndexMap<String, Vec<ValidatedEntity>>;

#[derive(Debug, Clone)]
pub struct ExtractionEngine {
    labels: LabelMap,
    policy: SpecialTokenPolicy,
    bank: ValidatorBank,
}

impl ExtractionEngine {
    pub fn new(config: ExtractionConfig) -> Result<Self> {
        let labels = config
            .label_map()
            .context("Failed to build label map for ExtractionEngine")?;
        let policy = config.special_token_policy();
        info!(
            "Extraction engine ready: {} labels, {} PII entries, special tokens {:?}.",
            labels.len(),
            config.pii.len(),
            policy
        );

        Ok(Self {
            labels,
            policy,
            bank: ValidatorBank::new(config.pii),
        })
    }

    pub fn labels(&self) -> &LabelMap {
        &self.labels
    }

    pub fn bank(&self) -> &ValidatorBank {
        &self.bank
    }

    /// Reconstructs the raw, unvalidated spans for an utterance.
    pub fn raw_spans(&self, utterance: &Utterance) -> Vec<RawSpan> {
        reconstruct_with(&utterance.offsets, &utterance.label_ids, &self.labels, &self.policy)
    }

    /// Extracts the validated entities of one utterance.
    pub fn extract(&self, utterance: &Utterance) -> Vec<ValidatedEntity> {
        let spans = self.raw_spans(utterance);
        let entities = self.bank.filter_spans(&spans, &utterance.text);
        debug!(
            "Utterance '{}': {} candidate spans, {} kept.",
            utterance.id,
            spans.len(),
            entities.len()
        );
        entities
    }

    /// Extracts every utterance.
    ///
    /// A repeated id keeps its first position and the last utterance's entities.
    pub fn extract_batch<'a, I>(&self, utterances: I) -> ExtractionReport
    where
        I: IntoIterator<Item = &'a Utterance>,
    {
        utterances
            .into_iter()
            .map(|utterance| (utterance.id.clone(), self.extract(utterance)))
            .collect()
    }
}

/// One-shot extraction for callers that do not keep an engine around.
pub fn headless_extract(
    config: ExtractionConfig,
    utterances: &[Utterance],
) -> Result<ExtractionReport> {
    let engine = ExtractionEngine::new(config)?;
    Ok(engine.extract_batch(utterances))
}
