//! The entity validator bank.
//!
//! Takes reconstructed spans plus the utterance text, keeps the spans whose
//! text passes their type's validator, and tags each kept span with its PII
//! flag. Types without a validator are kept unconditionally so that new model
//! labels are never silently lost.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::entity::{EntityType, RawSpan, ValidatedEntity};
use crate::pii_log::log_span_decision_debug;
use crate::validators::validator_for;

/// Static mapping from entity-type string to its PII classification.
///
/// Types missing from the table are not PII.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PiiTable(BTreeMap<String, bool>);

impl PiiTable {
    pub fn new(entries: BTreeMap<String, bool>) -> Self {
        Self(entries)
    }

    pub fn is_pii(&self, entity_type: &EntityType) -> bool {
        self.0.get(entity_type.as_str()).copied().unwrap_or(false)
    }

    /// Adds or replaces entries from `other`.
    pub fn extend(&mut self, other: PiiTable) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for PiiTable {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// The outcome of validating one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// The normalized form the rule was applied to; `None` for pass-through types.
    pub normalized: Option<String>,
    pub accepted: bool,
}

/// Returns the substring at half-open *character* offsets, clamped to the text.
pub fn char_slice(text: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let byte_at = |n: usize| text.char_indices().nth(n).map_or(text.len(), |(idx, _)| idx);
    &text[byte_at(start)..byte_at(end)]
}

#[derive(Debug, Clone, Default)]
pub struct ValidatorBank {
    pii: PiiTable,
}

impl ValidatorBank {
    pub fn new(pii: PiiTable) -> Self {
        Self { pii }
    }

    pub fn pii_table(&self) -> &PiiTable {
        &self.pii
    }

    /// Runs the validator for `entity_type` over `candidate` and reports both
    /// the normalized form and the verdict.
    pub fn inspect(&self, entity_type: &EntityType, candidate: &str) -> Verdict {
        match validator_for(entity_type) {
            Some(validator) => {
                let normalized = (validator.normalize)(candidate);
                let accepted = (validator.accept)(&normalized);
                Verdict { normalized: Some(normalized), accepted }
            }
            None => Verdict { normalized: None, accepted: true },
        }
    }

    /// Keeps the spans whose text validates, in input order.
    pub fn filter_spans(&self, spans: &[RawSpan], text: &str) -> Vec<ValidatedEntity> {
        spans
            .iter()
            .filter_map(|span| {
                let candidate = char_slice(text, span.start, span.end);
                let verdict = self.inspect(&span.entity_type, candidate);
                log_span_decision_debug(
                    module_path!(),
                    &span.entity_type,
                    candidate,
                    verdict.normalized.as_deref(),
                    verdict.accepted,
                );

                verdict.accepted.then(|| ValidatedEntity {
                    start: span.start,
                    end: span.end,
                    label: span.entity_type.clone(),
                    pii: self.pii.is_pii(&span.entity_type),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "my name is john smith and number is nine one one two three four five six seven eight";

    fn bank() -> ValidatorBank {
        ValidatorBank::new(PiiTable::from_iter([
            ("PHONE", true),
            ("PERSON_NAME", true),
            ("CITY", false),
        ]))
    }

    fn span_of(text: &str, needle: &str, entity_type: &str) -> RawSpan {
        let byte_start = text.find(needle).unwrap();
        let start = text[..byte_start].chars().count();
        RawSpan::new(start, start + needle.chars().count(), entity_type)
    }

    #[test]
    fn keeps_valid_spans_with_pii_flag() {
        let spans = vec![
            span_of(TEXT, "john smith", "PERSON_NAME"),
            span_of(TEXT, "nine one one two three four five six seven eight", "PHONE"),
        ];
        let kept = bank().filter_spans(&spans, TEXT);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|e| e.pii));
        assert_eq!(kept[0].label, EntityType::PersonName);
    }

    #[test]
    fn drops_invalid_spans() {
        let spans = vec![
            span_of(TEXT, "my name", "PERSON_NAME"),
            span_of(TEXT, "nine one one", "PHONE"),
        ];
        assert!(bank().filter_spans(&spans, TEXT).is_empty());
    }

    #[test]
    fn unknown_types_pass_through() {
        let spans = vec![span_of(TEXT, "and number", "CITY"), span_of(TEXT, "is", "WEATHER")];
        let kept = bank().filter_spans(&spans, TEXT);
        assert_eq!(kept.len(), 2);
        assert!(!kept[0].pii);
        // Missing from the table entirely.
        assert!(!kept[1].pii);
        assert_eq!(kept[1].label.as_str(), "WEATHER");
    }

    #[test]
    fn inspect_reports_normalized_form() {
        let verdict = bank().inspect(&EntityType::Email, "john at h o t m a i l dot com");
        assert_eq!(verdict.normalized.as_deref(), Some("john@hotmail.com"));
        assert!(verdict.accepted);

        let passthrough = bank().inspect(&EntityType::from("CITY"), "anything");
        assert_eq!(passthrough, Verdict { normalized: None, accepted: true });
    }

    #[test]
    fn char_slice_uses_character_offsets() {
        let text = "naïve josé smith";
        assert_eq!(char_slice(text, 6, 10), "josé");
        assert_eq!(char_slice(text, 11, 100), "smith");
        assert_eq!(char_slice(text, 50, 60), "");
        assert_eq!(char_slice(text, 4, 4), "");
    }

    #[test]
    fn refiltering_is_idempotent() {
        let spans = vec![
            span_of(TEXT, "john smith", "PERSON_NAME"),
            span_of(TEXT, "my name", "PERSON_NAME"),
            span_of(TEXT, "nine one one two three four five six seven eight", "PHONE"),
            span_of(TEXT, "and", "CITY"),
        ];
        let bank = bank();
        let once = bank.filter_spans(&spans, TEXT);
        let raw_again: Vec<RawSpan> = once.iter().map(ValidatedEntity::to_raw).collect();
        let twice = bank.filter_spans(&raw_again, TEXT);
        assert_eq!(once, twice);
        assert_eq!(once.len(), 3);
    }
}
