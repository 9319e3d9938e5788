#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod digits;
pub mod words;
pub mod months;

pub use digits::{spoken_digit, Multiplier};
pub use months::{is_month, MonthScanner, MONTHS};
pub use words::{is_city_hint, is_name_forbidden, is_spoken_number_word, CITY_HINTS, NAME_FORBIDDEN};
