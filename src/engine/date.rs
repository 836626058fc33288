//! Birth date resolution and century inference.

use chrono::{Datelike, NaiveDate};

use crate::error::ParseError;

/// Birth date exactly as encoded in the number.
///
/// Only month > 12 and day > 31 are rejected, so values such as 30 February
/// survive unchanged; use [`BirthDate::to_naive_date`] for a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthDate {
    // Field order matters: the derived `Ord` compares year, month, day.
    year: i32,
    month: u32,
    day: u32,
}

impl BirthDate {
    pub(crate) fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Full year, century included.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of year, 1-based.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of month, 1-based; never checked against the month's length.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// The matching calendar date, or `None` if the encoded date does not exist.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    fn shifted_years(self, years: i32) -> Self {
        Self { year: self.year + years, ..self }
    }
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Turn the extracted `YYMMDD` (plus optional century and delimiter) into a
/// [`BirthDate`].
///
/// Without a century the candidate year takes the reference date's century,
/// moves back 100 years if that lands after `reference`, and moves back a
/// further 100 years when the delimiter is `+` (aged 100 or more).
pub(crate) fn resolve(
    century: Option<&str>,
    date: &str,
    delimiter: Option<char>,
    reference: NaiveDate,
) -> Result<BirthDate, ParseError> {
    let invalid = || ParseError::InvalidBirthDate { date: date.to_string() };

    let yy = two_digits(date, 0).ok_or_else(invalid)?;
    let month = two_digits(date, 2).ok_or_else(invalid)?;
    let day = two_digits(date, 4).ok_or_else(invalid)?;

    if month > 12 || day > 31 {
        return Err(invalid());
    }

    if let Some(century) = century {
        let century: i32 = century.parse().map_err(|_| invalid())?;
        return Ok(BirthDate::new(century * 100 + yy as i32, month, day));
    }

    let this_century = reference.year().div_euclid(100);
    let mut birth = BirthDate::new(this_century * 100 + yy as i32, month, day);

    // The whole reference day counts as "now", so only later days are future.
    if birth > BirthDate::from(reference) {
        tracing::debug!(candidate = %birth, %reference, "candidate birth date is in the future; moving back a century");
        birth = birth.shifted_years(-100);
    }

    if delimiter == Some('+') {
        tracing::debug!(candidate = %birth, "'+' delimiter; moving back a century");
        birth = birth.shifted_years(-100);
    }

    Ok(birth)
}

fn two_digits(s: &str, at: usize) -> Option<u32> {
    s.get(at..at + 2)?.parse().ok()
}
