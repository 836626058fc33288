//! Parsing, validation and formatting of Swedish personal identity numbers
//! (*personnummer*).
//!
//! ```
//! use chrono::NaiveDate;
//! use pernr::{Context, FormatOptions, Gender, parse_with};
//!
//! let ctx = Context { reference_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap() };
//! let pnr = parse_with("010101-4389", &ctx).unwrap();
//!
//! assert_eq!(pnr.birth_date().year(), 2001);
//! assert_eq!(pnr.gender(), Gender::Female);
//! assert!(pnr.is_valid());
//! assert_eq!(pnr.format_with(&ctx, &FormatOptions { full_year: true }), "20010101-4389");
//! ```

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;

#[cfg(test)]
mod tests;

pub use api::{Context, FormatOptions, Pernr, parse, parse_with};
pub use engine::{BirthDate, Region};
pub use error::ParseError;

/// Label returned by [`Gender::as_str`] for [`Gender::Male`].
pub const MALE: &str = "male";
/// Label returned by [`Gender::as_str`] for [`Gender::Female`].
pub const FEMALE: &str = "female";

/// Legal gender as encoded by the third serial digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Classify from the serial: the third digit is odd for men, even for women.
    pub(crate) fn from_serial(serial: &str) -> Gender {
        match serial.as_bytes().get(2) {
            Some(d) if (d - b'0') % 2 == 1 => Gender::Male,
            _ => Gender::Female,
        }
    }

    /// [`MALE`] or [`FEMALE`].
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => MALE,
            Gender::Female => FEMALE,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
