//! Entity types and the span records that flow between reconstruction and validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The entity types the validator bank knows how to check.
///
/// Anything the model emits beyond these lands in `Other` and is passed through
/// unvalidated, keeping its original spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityType {
    CreditCard,
    Phone,
    Email,
    PersonName,
    Date,
    Other(String),
}

impl EntityType {
    pub fn as_str(&self) -> &str {
        match self {
            EntityType::CreditCard => "CREDIT_CARD",
            EntityType::Phone => "PHONE",
            EntityType::Email => "EMAIL",
            EntityType::PersonName => "PERSON_NAME",
            EntityType::Date => "DATE",
            EntityType::Other(name) => name,
        }
    }
}

impl From<&str> for EntityType {
    fn from(name: &str) -> Self {
        match name {
            "CREDIT_CARD" => EntityType::CreditCard,
            "PHONE" => EntityType::Phone,
            "EMAIL" => EntityType::Email,
            "PERSON_NAME" => EntityType::PersonName,
            "DATE" => EntityType::Date,
            other => EntityType::Other(other.to_string()),
        }
    }
}

impl From<String> for EntityType {
    fn from(name: String) -> Self {
        match EntityType::from(name.as_str()) {
            EntityType::Other(_) => EntityType::Other(name),
            known => known,
        }
    }
}

impl From<EntityType> for String {
    fn from(entity_type: EntityType) -> Self {
        match entity_type {
            EntityType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate entity as reconstructed from BIO tags, before validation.
///
/// `start` and `end` are half-open character offsets into the utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSpan {
    pub start: usize,
    pub end: usize,
    pub entity_type: EntityType,
}

impl RawSpan {
    pub fn new(start: usize, end: usize, entity_type: impl Into<EntityType>) -> Self {
        Self { start, end, entity_type: entity_type.into() }
    }
}

/// A span that passed its type's validator, ready for the output report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedEntity {
    pub start: usize,
    pub end: usize,
    pub label: EntityType,
    pub pii: bool,
}

impl ValidatedEntity {
    /// Drops the PII flag, yielding the span this entity was built from.
    pub fn to_raw(&self) -> RawSpan {
        RawSpan {
            start: self.start,
            end: self.end,
            entity_type: self.label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_round_trip_through_strings() {
        for name in ["CREDIT_CARD", "PHONE", "EMAIL", "PERSON_NAME", "DATE"] {
            let parsed = EntityType::from(name);
            assert!(!matches!(parsed, EntityType::Other(_)));
            assert_eq!(parsed.to_string(), name);
        }
    }

    #[test]
    fn unknown_types_keep_their_spelling() {
        let city = EntityType::from("CITY");
        assert_eq!(city, EntityType::Other("CITY".to_string()));
        assert_eq!(String::from(city), "CITY");
        // Matching is case-sensitive.
        assert_eq!(EntityType::from("phone"), EntityType::Other("phone".to_string()));
    }

    #[test]
    fn validated_entity_serializes_with_report_keys() {
        let entity = ValidatedEntity { start: 3, end: 9, label: EntityType::Phone, pii: true };
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json, serde_json::json!({"start": 3, "end": 9, "label": "PHONE", "pii": true}));
    }
}
