// piispan-core/src/pii_log.rs
//! PII-safe debug logging for span candidates.
//!
//! Span text is by definition sensitive. Debug output shows it only when
//! `PIISPAN_ALLOW_DEBUG_PII=true` is set in the environment.

use log::debug;

use lazy_static::lazy_static;

use crate::entity::EntityType;

lazy_static! {
    /// A static boolean that is initialized once to determine if PII is allowed in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("PIISPAN_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let len = s.chars().count();
    if len <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", len)
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_span_decision_debug(
    module_path: &str,
    entity_type: &EntityType,
    candidate: &str,
    normalized: Option<&str>,
    kept: bool,
) {
    debug!(
        "{} {} span {}: Candidate='{}', Normalized='{}'",
        module_path,
        entity_type,
        if kept { "kept" } else { "dropped" },
        get_loggable_content(candidate),
        normalized.map(get_loggable_content).unwrap_or_else(|| "<pass-through>".to_string())
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("abc"), "[REDACTED]".to_string());
    }

    #[test]
    fn test_redact_sensitive_counts_chars_not_bytes() {
        assert_eq!(redact_sensitive("ñññññññññ"), "[REDACTED: 9 chars]".to_string());
    }
}
