use chrono::{Datelike, NaiveDate};

use super::BirthDate;

/// `+` once the holder is (or would be) 100 years old in the reference year, `-` otherwise.
fn delimiter(birth_year: i32, reference: NaiveDate) -> char {
    if reference.year() - birth_year >= 100 { '+' } else { '-' }
}

/// Render `YYMMDD` or, with `full_year`, `YYYYMMDD`, then delimiter and serial.
pub(crate) fn format(birth_date: &BirthDate, serial: &str, reference: NaiveDate, full_year: bool) -> String {
    let year = if full_year {
        format!("{:04}", birth_date.year())
    } else {
        format!("{:02}", birth_date.year().rem_euclid(100))
    };

    format!(
        "{year}{:02}{:02}{}{serial}",
        birth_date.month(),
        birth_date.day(),
        delimiter(birth_date.year(), reference)
    )
}
