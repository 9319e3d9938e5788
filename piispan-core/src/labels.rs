//! BIO labels and the model-specific id-to-label table.
//!
//! The table is a property of one model configuration, so it is always passed
//! explicitly into the reconstructor rather than living in a global.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use std::collections::HashMap;

use crate::entity::EntityType;
use crate::errors::PiispanError;

/// The raw label id emitted by the token classifier.
pub type LabelId = u32;

/// A single parsed BIO label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// `O`: the token is outside any entity.
    Outside,
    /// `B-<TYPE>`: first token of an entity.
    Begin(EntityType),
    /// `I-<TYPE>`: continuation token.
    Inside(EntityType),
    /// No `B-`/`I-` prefix. The reconstructor skips these tokens without touching the open span.
    Malformed(String),
}

static OUTSIDE: Label = Label::Outside;

impl Label {
    pub fn parse(raw: &str) -> Self {
        if raw == "O" {
            return Label::Outside;
        }
        match raw.split_once('-') {
            Some(("B", ty)) => Label::Begin(EntityType::from(ty)),
            Some(("I", ty)) => Label::Inside(EntityType::from(ty)),
            _ => Label::Malformed(raw.to_string()),
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Label::Malformed(_))
    }
}

/// Maps label ids to parsed labels. Ids not in the table resolve to `O`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMap {
    labels: Vec<Label>,
}

impl LabelMap {
    /// Builds the table from label strings ordered by id (`labels[i]` is id `i`).
    ///
    /// Rejects an empty list, a list without `O`, and duplicate strings.
    /// Malformed strings are kept and logged; they act as skip-tokens.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Result<Self, PiispanError> {
        if labels.is_empty() {
            return Err(PiispanError::InvalidLabelConfig("label list is empty".to_string()));
        }

        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut parsed = Vec::with_capacity(labels.len());
        for (id, raw) in labels.iter().enumerate() {
            let raw = raw.as_ref();
            if let Some(first) = seen.insert(raw, id) {
                return Err(PiispanError::DuplicateLabel(raw.to_string(), first, id));
            }
            let label = Label::parse(raw);
            if label.is_malformed() {
                warn!(
                    "Label '{}' (id {}) has no B-/I- prefix; tokens with it will be skipped.",
                    raw, id
                );
            }
            parsed.push(label);
        }

        if !seen.contains_key("O") {
            return Err(PiispanError::InvalidLabelConfig("label list has no 'O' label".to_string()));
        }

        debug!("Built label map with {} labels.", parsed.len());
        Ok(Self { labels: parsed })
    }

    /// Looks up a label id; unknown ids are treated as `O`.
    pub fn resolve(&self, id: LabelId) -> &Label {
        self.labels.get(id as usize).unwrap_or(&OUTSIDE)
    }

    /// The id assigned to a label string, if present. Handy for building test inputs.
    pub fn id_of(&self, raw: &str) -> Option<LabelId> {
        let wanted = Label::parse(raw);
        self.labels
            .iter()
            .position(|label| *label == wanted)
            .map(|idx| idx as LabelId)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bio_prefixes() {
        assert_eq!(Label::parse("O"), Label::Outside);
        assert_eq!(Label::parse("B-PHONE"), Label::Begin(EntityType::Phone));
        assert_eq!(Label::parse("I-CITY"), Label::Inside(EntityType::Other("CITY".into())));
        // Only the first '-' separates prefix from type.
        assert_eq!(Label::parse("B-X-Y"), Label::Begin(EntityType::Other("X-Y".into())));
    }

    #[test]
    fn empty_type_is_still_a_label() {
        assert_eq!(Label::parse("B-"), Label::Begin(EntityType::Other(String::new())));
        assert_eq!(Label::parse("I-"), Label::Inside(EntityType::Other(String::new())));
        assert!(Label::parse("-PHONE").is_malformed());
    }

    #[test]
    fn malformed_labels() {
        assert!(Label::parse("PHONE").is_malformed());
        assert!(Label::parse("E-PHONE").is_malformed());
        assert!(Label::parse("o").is_malformed());
    }

    #[test]
    fn unknown_ids_resolve_to_outside() {
        let map = LabelMap::from_labels(&["O", "B-DATE", "I-DATE"]).unwrap();
        assert_eq!(map.resolve(1), &Label::Begin(EntityType::Date));
        assert_eq!(map.resolve(42), &Label::Outside);
        assert_eq!(map.id_of("I-DATE"), Some(2));
    }

    #[test]
    fn rejects_bad_label_lists() {
        let empty: [&str; 0] = [];
        assert!(matches!(LabelMap::from_labels(&empty), Err(PiispanError::InvalidLabelConfig(_))));
        assert!(matches!(
            LabelMap::from_labels(&["O", "B-DATE", "B-DATE"]),
            Err(PiispanError::DuplicateLabel(_, 1, 2))
        ));
        assert!(LabelMap::from_labels(&["B-DATE", "I-DATE"]).is_err());
    }
}
