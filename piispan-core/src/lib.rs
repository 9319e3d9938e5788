// piispan-core/src/lib.rs
//! # piispan Core Library
//!
//! `piispan-core` turns the per-token output of a BIO token classifier into
//! validated, character-level PII entities for spoken-language transcripts.
//!
//! Extraction is two pure stages:
//!
//! 1. **Span reconstruction** ([`spans`]): a single pass over token offsets and
//!    predicted label ids that rebuilds character spans, repairing orphaned
//!    `I-` tags and skipping special tokens.
//! 2. **Validation** ([`bank`], [`validators`], [`normalize`]): each span's text
//!    is normalized from its spoken form ("double oh seven", "john at g mail dot
//!    com") and checked against its type's acceptance rule. Spans that fail are
//!    dropped; types without a validator pass through.
//!
//! The library performs no model inference and no tokenization. It is stateless
//! apart from immutable lookup tables, and every engine type is `Send + Sync`.
//!
//! ## Modules
//!
//! * `config`: `ExtractionConfig`, loaded from YAML and merged over embedded defaults.
//! * `labels`: BIO label parsing and the explicit id-to-label table.
//! * `entity`: Entity types and the span records passed between stages.
//! * `spans`: The span reconstructor and the special-token filter seam.
//! * `normalize`: Spoken-form normalizers.
//! * `validators`: Per-type acceptance rules.
//! * `bank`: The validator bank and the PII classification table.
//! * `engine`: `ExtractionEngine`, composing both stages.
//! * `pii_log`: Debug logging that never prints span text unless explicitly allowed.
//!
//! ## Usage Example
//!
//! ```rust
//! use piispan_core::{ExtractionConfig, ExtractionEngine, TokenOffset, Utterance};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let engine = ExtractionEngine::new(ExtractionConfig::load_default()?)?;
//!     let labels = engine.labels();
//!
//!     let utterance = Utterance {
//!         id: "utt_0001".to_string(),
//!         text: "i am john smith".to_string(),
//!         offsets: vec![
//!             TokenOffset::new(0, 0),
//!             TokenOffset::new(0, 1),
//!             TokenOffset::new(2, 4),
//!             TokenOffset::new(5, 9),
//!             TokenOffset::new(10, 15),
//!             TokenOffset::new(0, 0),
//!         ],
//!         label_ids: vec![
//!             0,
//!             labels.id_of("O").unwrap(),
//!             labels.id_of("O").unwrap(),
//!             labels.id_of("B-PERSON_NAME").unwrap(),
//!             labels.id_of("I-PERSON_NAME").unwrap(),
//!             0,
//!         ],
//!     };
//!
//!     let entities = engine.extract(&utterance);
//!     assert_eq!(entities.len(), 1);
//!     assert_eq!((entities[0].start, entities[0].end), (5, 15));
//!     assert!(entities[0].pii);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Extraction itself never fails. Configuration loading returns `anyhow::Result`,
//! and [`PiispanError`] covers label-table validation.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod bank;
pub mod config;
pub mod engine;
pub mod entity;
pub mod errors;
pub mod labels;
pub mod normalize;
pub mod pii_log;
pub mod spans;
pub mod validators;

/// Re-exports the configuration types.
pub use config::{merge_config, ExtractionConfig};

/// Re-exports the custom error type for clear error reporting.
pub use errors::PiispanError;

/// Re-exports the engine and its batch input/output types.
pub use engine::{headless_extract, ExtractionEngine, ExtractionReport, Utterance};

pub use entity::{EntityType, RawSpan, ValidatedEntity};
pub use labels::{Label, LabelId, LabelMap};
pub use spans::{reconstruct, reconstruct_with, SpecialTokenPolicy, TextSpanFilter, TokenOffset};
pub use bank::{char_slice, PiiTable, ValidatorBank, Verdict};

/// Re-exports the composed `is_valid_*` checks and the normalizers under their
/// conventional names.
pub use validators::{
    is_valid_credit_card, is_valid_date, is_valid_email, is_valid_person_name, is_valid_phone,
    validator_for, Validator,
};
pub use normalize::{normalize_credit_card, normalize_email_candidate, normalize_phone};
