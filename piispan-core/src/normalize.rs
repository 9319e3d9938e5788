//! Text normalization for spoken-form entity candidates.
//!
//! Transcripts spell numbers and addresses out loud: "four two double one",
//! "john at g mail dot com". Each function here maps such a candidate to the
//! canonical string its validator checks. None of them fail; words that carry
//! no information for the target type are dropped.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

use piispan_lexicon::{spoken_digit, Multiplier};

static DOT_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:dot|dott)\b").expect("dot-word pattern is valid"));

static AT_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bat\b").expect("at-word pattern is valid"));

/// Keeps only numeric characters, in any script.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_numeric()).collect()
}

fn is_digit_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_numeric)
}

fn push_repeated(out: &mut String, digit: char, times: usize) {
    out.extend(std::iter::repeat(digit).take(times));
}

/// Normalizes a spoken credit-card candidate to its digit string.
///
/// A multiplier always consumes the word after it, even when that word is not
/// a spoken digit (in which case both are dropped). Numeric tokens are kept
/// whole; tokens mixing digits and punctuation are dropped.
pub fn normalize_credit_card(candidate: &str) -> String {
    let lowered = candidate.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    let mut out = String::with_capacity(tokens.len() * 2);

    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];

        if let Some(multiplier) = Multiplier::from_word(token) {
            if let Some(next) = tokens.get(i + 1) {
                if let Some(digit) = spoken_digit(next) {
                    push_repeated(&mut out, digit, multiplier.count());
                }
                i += 2;
                continue;
            }
        }

        if let Some(digit) = spoken_digit(token) {
            out.push(digit);
        } else if is_digit_token(token) {
            out.push_str(token);
        }
        i += 1;
    }

    digits_only(&out)
}

/// Normalizes a spoken phone-number candidate to its digit string.
///
/// Unlike [`normalize_credit_card`], a multiplier only consumes the next word
/// when that word is a spoken digit; otherwise the multiplier alone is skipped
/// and the next word is read normally.
pub fn normalize_phone(candidate: &str) -> String {
    let lowered = candidate.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    let mut out = String::with_capacity(tokens.len() * 2);

    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];

        if let Some(multiplier) = Multiplier::from_word(token) {
            if let Some(digit) = tokens.get(i + 1).and_then(|next| spoken_digit(next)) {
                push_repeated(&mut out, digit, multiplier.count());
                i += 2;
                continue;
            }
        }

        if let Some(digit) = spoken_digit(token) {
            out.push(digit);
        } else if is_digit_token(token) {
            out.push_str(token);
        } else if token == "oh" || token == "o" {
            out.push('0');
        }
        i += 1;
    }

    digits_only(&out)
}

/// Joins runs of two or more single-letter words: `"h o t m a i l"` becomes `"hotmail"`.
///
/// Words are re-joined with single spaces, so any other whitespace is collapsed too.
pub fn collapse_spaced_letters(s: &str) -> String {
    let is_letter = |token: &str| {
        let mut chars = token.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic())
    };

    let tokens: Vec<&str> = s.split_whitespace().collect();
    let mut words: Vec<String> = Vec::with_capacity(tokens.len());

    let mut i = 0;
    while i < tokens.len() {
        let run_len = tokens[i..].iter().take_while(|t| is_letter(**t)).count();
        if run_len >= 2 {
            words.push(tokens[i..i + run_len].concat());
            i += run_len;
        } else {
            words.push(tokens[i].to_string());
            i += 1;
        }
    }

    words.join(" ")
}

/// Normalizes a spoken email candidate: `"john at g mail dot com"` becomes `"john@gmail.com"`.
pub fn normalize_email_candidate(candidate: &str) -> String {
    let lowered = candidate.trim().to_lowercase();
    let collapsed = collapse_spaced_letters(&lowered);
    let dotted = DOT_WORD.replace_all(&collapsed, ".");
    let at = AT_WORD.replace_all(&dotted, "@");
    at.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Lowercases and trims a person-name candidate.
pub fn normalize_person_name(candidate: &str) -> String {
    candidate.trim().to_lowercase()
}

/// Lowercases a date candidate. Whitespace is kept since the length check counts it.
pub fn normalize_date(candidate: &str) -> String {
    candidate.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_card_multipliers_and_words() {
        assert_eq!(normalize_credit_card("one double two three"), "1223");
        assert_eq!(normalize_credit_card("triple nine Oh"), "9990");
        assert_eq!(normalize_credit_card("4242 4242 four two"), "4242424242");
    }

    #[test]
    fn credit_card_multiplier_swallows_non_digit() {
        // "double" eats "and", "five" is read normally.
        assert_eq!(normalize_credit_card("one double and five"), "15");
        // A trailing multiplier has nothing to consume.
        assert_eq!(normalize_credit_card("one double"), "1");
    }

    #[test]
    fn credit_card_drops_punctuated_tokens() {
        assert_eq!(normalize_credit_card("4242-4242 one"), "1");
    }

    #[test]
    fn phone_multiplier_needs_a_digit_word() {
        assert_eq!(normalize_phone("nine double oh seven"), "9007");
        // "double" is skipped but "hello" is not swallowed; it just yields nothing.
        assert_eq!(normalize_phone("double hello five"), "5");
        assert_eq!(normalize_phone("o one"), "01");
    }

    #[test]
    fn phone_ten_digits() {
        let digits = normalize_phone("nine one one two three four five six seven eight");
        assert_eq!(digits, "9112345678");
    }

    #[test]
    fn non_ascii_digits_are_kept() {
        assert_eq!(normalize_phone("٩٨٧٦٥٤٣٢١٠"), "٩٨٧٦٥٤٣٢١٠");
        assert_eq!(digits_only("+91 ٩٨-76"), "91٩٨76");
    }

    #[test]
    fn collapse_letters_keeps_following_word_separate() {
        assert_eq!(collapse_spaced_letters("h o t m a i l dot com"), "hotmail dot com");
        assert_eq!(collapse_spaced_letters("a b"), "ab");
        assert_eq!(collapse_spaced_letters("a word b"), "a word b");
    }

    #[test]
    fn email_spoken_forms() {
        assert_eq!(normalize_email_candidate("h o t m a i l dot com"), "hotmail.com");
        assert_eq!(normalize_email_candidate("john at h o t m a i l dot com"), "john@hotmail.com");
        assert_eq!(
            normalize_email_candidate("  Priya dott Sharma AT Gmail DOT com "),
            "priya.sharma@gmail.com"
        );
    }

    #[test]
    fn email_words_inside_longer_words_are_left_alone() {
        assert_eq!(normalize_email_candidate("dotty at cat dot in"), "dotty@cat.in");
    }
}
