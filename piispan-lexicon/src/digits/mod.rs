//! Spoken digit words and repetition multipliers.
//!
//! Transcribed speech renders card and phone numbers as words ("four two oh")
//! and repeats ("double seven"). These helpers map a single lowercase word to
//! its digit or multiplier so the normalizers can stay table-free.

/// Every word form that maps to a digit, in lexicon order.
pub const SPOKEN_DIGIT_WORDS: [&str; 12] = [
    "zero", "oh", "o", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Maps a lowercase spoken digit word to its ASCII digit.
///
/// `"oh"` and `"o"` both read as zero.
pub fn spoken_digit(word: &str) -> Option<char> {
    let digit = match word {
        "zero" | "oh" | "o" => '0',
        "one" => '1',
        "two" => '2',
        "three" => '3',
        "four" => '4',
        "five" => '5',
        "six" => '6',
        "seven" => '7',
        "eight" => '8',
        "nine" => '9',
        _ => return None,
    };
    Some(digit)
}

/// A word that repeats the spoken digit following it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplier {
    Double,
    Triple,
}

impl Multiplier {
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "double" => Some(Multiplier::Double),
            "triple" => Some(Multiplier::Triple),
            _ => None,
        }
    }

    /// How many times the following digit is emitted.
    pub fn count(self) -> usize {
        match self {
            Multiplier::Double => 2,
            Multiplier::Triple => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_lexicon_word_resolves() {
        for word in SPOKEN_DIGIT_WORDS {
            assert!(spoken_digit(word).is_some(), "{word} should be a digit word");
        }
    }

    #[test]
    fn oh_and_o_are_zero() {
        assert_eq!(spoken_digit("oh"), Some('0'));
        assert_eq!(spoken_digit("o"), Some('0'));
        assert_eq!(spoken_digit("zero"), Some('0'));
        assert_eq!(spoken_digit("nine"), Some('9'));
        assert_eq!(spoken_digit("ten"), None);
        assert_eq!(spoken_digit("Nine"), None);
    }

    #[test]
    fn multiplier_counts() {
        assert_eq!(Multiplier::from_word("double").map(Multiplier::count), Some(2));
        assert_eq!(Multiplier::from_word("triple").map(Multiplier::count), Some(3));
        assert_eq!(Multiplier::from_word("quadruple"), None);
    }
}
