//! Span reconstruction: turns per-token BIO predictions into character spans.
//!
//! The reconstructor makes a single left-to-right pass over the tokens while
//! holding at most one open span. It never fails; inconsistent tag sequences
//! are repaired in place:
//!
//! * an `I-` tag with no open span (or an open span of another type) opens a
//!   new span, as if it were `B-`;
//! * malformed labels are skipped without closing or extending anything;
//! * special tokens are skipped entirely, so a span may bridge over them.
//!
//! Which tokens count as special is decided by a [`TextSpanFilter`] supplied by
//! the tokenizer side. The default is the `(0, 0)` offset sentinel.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::entity::RawSpan;
use crate::labels::{Label, LabelId, LabelMap};

/// A token's half-open character range in the original utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct TokenOffset {
    pub start: usize,
    pub end: usize,
}

impl TokenOffset {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<(usize, usize)> for TokenOffset {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

impl From<TokenOffset> for (usize, usize) {
    fn from(offset: TokenOffset) -> Self {
        (offset.start, offset.end)
    }
}

/// Decides whether a token offset refers to real utterance text.
///
/// Tokens for which this returns `false` (padding, `[CLS]`, `[SEP]`, ...) carry
/// no label information and are skipped by the reconstructor.
pub trait TextSpanFilter {
    fn is_text_span(&self, offset: &TokenOffset) -> bool;
}

impl<F> TextSpanFilter for F
where
    F: Fn(&TokenOffset) -> bool,
{
    fn is_text_span(&self, offset: &TokenOffset) -> bool {
        self(offset)
    }
}

/// Built-in conventions for recognising special tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialTokenPolicy {
    /// Only the exact `(0, 0)` pair is special.
    #[default]
    ZeroSentinel,
    /// Every empty or inverted range is special.
    EmptyRange,
    /// No token is special.
    #[serde(rename = "none")]
    KeepAll,
}

impl TextSpanFilter for SpecialTokenPolicy {
    fn is_text_span(&self, offset: &TokenOffset) -> bool {
        match self {
            SpecialTokenPolicy::ZeroSentinel => !(offset.start == 0 && offset.end == 0),
            SpecialTokenPolicy::EmptyRange => offset.start < offset.end,
            SpecialTokenPolicy::KeepAll => true,
        }
    }
}

/// Reconstructs spans using the `(0, 0)` special-token sentinel.
pub fn reconstruct(
    offsets: &[TokenOffset],
    label_ids: &[LabelId],
    labels: &LabelMap,
) -> Vec<RawSpan> {
    reconstruct_with(offsets, label_ids, labels, &SpecialTokenPolicy::ZeroSentinel)
}

/// Reconstructs spans from parallel offset and label-id sequences.
///
/// If the two sequences differ in length only their common prefix is used.
pub fn reconstruct_with<F>(
    offsets: &[TokenOffset],
    label_ids: &[LabelId],
    labels: &LabelMap,
    filter: &F,
) -> Vec<RawSpan>
where
    F: TextSpanFilter + ?Sized,
{
    if offsets.len() != label_ids.len() {
        warn!(
            "Offset count ({}) and label count ({}) differ; using the first {} tokens.",
            offsets.len(),
            label_ids.len(),
            offsets.len().min(label_ids.len())
        );
    }

    let mut spans = Vec::new();
    let mut current: Option<RawSpan> = None;

    for (offset, &id) in offsets.iter().zip(label_ids) {
        if !filter.is_text_span(offset) {
            continue;
        }

        match labels.resolve(id) {
            Label::Outside => {
                spans.extend(current.take());
            }
            Label::Begin(entity_type) => {
                spans.extend(current.take());
                current = Some(RawSpan::new(offset.start, offset.end, entity_type.clone()));
            }
            Label::Inside(entity_type) => {
                if let Some(open) = current
                    .as_mut()
                    .filter(|open| open.entity_type == *entity_type)
                {
                    open.end = offset.end;
                } else {
                    // Orphaned or type-switching I- tag: start over at this token.
                    spans.extend(current.take());
                    current = Some(RawSpan::new(offset.start, offset.end, entity_type.clone()));
                }
            }
            Label::Malformed(raw) => {
                trace!("Skipping token {:?} with malformed label '{}'.", offset, raw);
            }
        }
    }
    spans.extend(current);

    debug!(
        "Reconstructed {} spans from {} tokens.",
        spans.len(),
        offsets.len().min(label_ids.len())
    );
    spans
}
