use daachorse::DoubleArrayAhoCorasick;
extern crate alloc;
use core::fmt;

/// English month tokens, abbreviated then full. "may" is listed once.
pub const MONTHS: [&str; 23] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    "january", "february", "march", "april", "june", "july", "august", "september", "october",
    "november", "december",
];

/// Exact token match against [`MONTHS`].
pub fn is_month(word: &str) -> bool {
    MONTHS.contains(&word)
}

/// Finds month tokens anywhere inside a lowercase string, including inside
/// longer words ("mayday" contains "may").
pub struct MonthScanner {
    automaton: DoubleArrayAhoCorasick<usize>,
}

impl fmt::Debug for MonthScanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonthScanner")
         .field("automaton", &"<DoubleArrayAhoCorasick>")
         .field("patterns", &MONTHS.len())
         .finish()
    }
}

impl MonthScanner {
    pub fn new() -> Self {
        let automaton = DoubleArrayAhoCorasick::new(MONTHS)
            .expect("Failed to build Aho-Corasick automaton for month scanning");

        Self { automaton }
    }

    /// Returns true if any month token occurs as a substring of `text`.
    pub fn contains_month(&self, text: &str) -> bool {
        self.automaton.find_iter(text.as_bytes()).next().is_some()
    }
}

impl Default for MonthScanner {
    fn default() -> Self {
        Self::new()
    }
}
