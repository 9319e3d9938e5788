// File: piispan-core/src/validators.rs
//! Acceptance rules for each validated entity type.
//!
//! Every type pairs a normalizer from [`crate::normalize`] with an acceptance
//! predicate over the normalized string. The `is_valid_*` helpers compose the
//! two for callers holding raw span text. [`validator_for`] is the total
//! mapping from [`EntityType`] to its pair; `Other` types have none and are
//! passed through by the bank.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

use piispan_lexicon::{
    is_city_hint, is_month, is_name_forbidden, is_spoken_number_word, MonthScanner,
};

use crate::entity::EntityType;
use crate::normalize::{
    normalize_credit_card, normalize_date, normalize_email_candidate, normalize_person_name,
    normalize_phone,
};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,5}$").expect("email pattern is valid")
});

static MONTH_SCANNER: Lazy<MonthScanner> = Lazy::new(MonthScanner::new);

/// Card numbers run from 13 (older Visa) to 19 digits.
pub const CREDIT_CARD_DIGITS: std::ops::RangeInclusive<usize> = 13..=19;

/// Local and international phone numbers without the card-length overlap.
pub const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 7..=12;

/// Digit-bearing date candidates longer than this are treated as noise.
pub const MAX_NUMERIC_DATE_CHARS: usize = 40;

/// A normalizer and the acceptance rule applied to its output.
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    pub normalize: fn(&str) -> String,
    pub accept: fn(&str) -> bool,
}

impl Validator {
    pub fn check(&self, candidate: &str) -> bool {
        (self.accept)(&(self.normalize)(candidate))
    }
}

/// Returns the validator for an entity type, or `None` for pass-through types.
pub fn validator_for(entity_type: &EntityType) -> Option<Validator> {
    let validator = match entity_type {
        EntityType::CreditCard => Validator {
            normalize: normalize_credit_card,
            accept: accept_credit_card,
        },
        EntityType::Phone => Validator { normalize: normalize_phone, accept: accept_phone },
        EntityType::Email => Validator {
            normalize: normalize_email_candidate,
            accept: accept_email,
        },
        EntityType::PersonName => Validator {
            normalize: normalize_person_name,
            accept: accept_person_name,
        },
        EntityType::Date => Validator { normalize: normalize_date, accept: accept_date },
        EntityType::Other(_) => return None,
    };
    Some(validator)
}

/// Accepts a normalized card digit string of plausible length.
///
/// No Luhn check.
pub fn accept_credit_card(digits: &str) -> bool {
    CREDIT_CARD_DIGITS.contains(&digits.chars().count())
}

pub fn is_valid_credit_card(candidate: &str) -> bool {
    accept_credit_card(&normalize_credit_card(candidate))
}

/// Accepts a normalized phone digit string.
///
/// Anything card-length (13 or more digits) is rejected before the range check.
pub fn accept_phone(digits: &str) -> bool {
    let count = digits.chars().count();
    if count >= *CREDIT_CARD_DIGITS.start() {
        return false;
    }
    PHONE_DIGITS.contains(&count)
}

pub fn is_valid_phone(candidate: &str) -> bool {
    accept_phone(&normalize_phone(candidate))
}

pub fn accept_email(normalized: &str) -> bool {
    EMAIL_REGEX.is_match(normalized)
}

pub fn is_valid_email(candidate: &str) -> bool {
    accept_email(&normalize_email_candidate(candidate))
}

/// Accepts a normalized (trimmed, lowercase) person-name candidate.
///
/// # Arguments
///
/// * `name` - The candidate, already passed through [`normalize_person_name`].
///
/// # Returns
///
/// `true` only for one or two purely alphabetic words of at least two
/// characters each, none of which is filler, a number word, a city or a month,
/// and with no email markers anywhere.
pub fn accept_person_name(name: &str) -> bool {
    let tokens: Vec<&str> = name.split_whitespace().collect();

    if !(1..=2).contains(&tokens.len()) {
        return false;
    }
    if name.chars().any(char::is_numeric) {
        return false;
    }
    if tokens.iter().any(|t| t.chars().count() < 2) {
        return false;
    }
    if tokens.iter().any(|t| is_name_forbidden(t) || is_spoken_number_word(t)) {
        return false;
    }
    if tokens.iter().any(|t| is_city_hint(t) || is_month(t)) {
        return false;
    }
    if name.contains("dot") || name.contains('@') {
        return false;
    }

    tokens.iter().all(|t| t.chars().all(char::is_alphabetic))
}

pub fn is_valid_person_name(candidate: &str) -> bool {
    accept_person_name(&normalize_person_name(candidate))
}

/// Accepts a lowercase date candidate that has a digit and is short, or that
/// mentions a month anywhere (including inside a longer word).
pub fn accept_date(lowered: &str) -> bool {
    let has_digit = lowered.chars().any(char::is_numeric);
    if has_digit && lowered.chars().count() <= MAX_NUMERIC_DATE_CHARS {
        return true;
    }
    MONTH_SCANNER.contains_month(lowered)
}

pub fn is_valid_date(candidate: &str) -> bool {
    accept_date(&normalize_date(candidate))
}
