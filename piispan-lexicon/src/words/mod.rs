//! Closed word lists used to reject spurious person-name spans.

use crate::digits::{spoken_digit, Multiplier};

/// Conversational filler and domain words that never appear inside a real name.
pub const NAME_FORBIDDEN: [&str; 22] = [
    "haan", "so", "my", "naam", "is", "and", "main", "rehte", "in", "uh", "actually", "old",
    "card", "number", "maybe", "please", "send", "email", "phone", "today", "tomorrow", "from",
];

/// City names the model tends to tag as names.
pub const CITY_HINTS: [&str; 16] = [
    "delhi", "mumbai", "pune", "surat", "lucknow", "kolkata", "bangalore", "hyderabad",
    "indore", "jaipur", "coimbatore", "kochi", "nagpur", "gurgaon", "ahmedabad", "trivandrum",
];

pub fn is_name_forbidden(word: &str) -> bool {
    NAME_FORBIDDEN.contains(&word)
}

pub fn is_city_hint(word: &str) -> bool {
    CITY_HINTS.contains(&word)
}

/// True for spoken digits and for the multiplier words.
pub fn is_spoken_number_word(word: &str) -> bool {
    spoken_digit(word).is_some() || Multiplier::from_word(word).is_some()
}
