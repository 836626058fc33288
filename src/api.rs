use crate::engine::{self, BirthDate, Region};
use crate::{Gender, ParseError};
use chrono::{Local, NaiveDate};
use std::str::FromStr;

/// Parsing context.
///
/// Holds the "today" used to infer a missing century and to pick the `-`/`+`
/// delimiter when formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// Reference date; the whole day counts as "now".
    pub reference_date: NaiveDate,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            // Pinned so unit tests do not depend on the clock.
            Self { reference_date: NaiveDate::from_ymd_opt(2013, 2, 12).unwrap_or_default() }
        } else {
            Self { reference_date: Local::now().date_naive() }
        }
    }
}

/// Options for [`Pernr::format`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Render a four-digit year (`YYYYMMDD-NNNN`) instead of `YYMMDD-NNNN`.
    pub full_year: bool,
}

/// A parsed personal identity number.
///
/// Region and gender are derived once when parsing; the value never changes
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pernr {
    birth_date: BirthDate,
    serial: String,
    region: Option<Region>,
    gender: Gender,
}

impl Pernr {
    /// Birth date as encoded in the number, not normalised to the calendar.
    pub fn birth_date(&self) -> BirthDate {
        self.birth_date
    }

    /// The four serial digits, leading zeros kept.
    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// Birth county; always `None` for people born 1990 or later.
    pub fn region(&self) -> Option<Region> {
        self.region
    }

    /// Gender from the parity of the third serial digit.
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Whether the last digit matches the checksum. A failing checksum is not a parse error.
    pub fn is_valid(&self) -> bool {
        engine::is_valid(&self.birth_date, &self.serial)
    }

    /// Format against today's date, see [`Pernr::format_with`].
    pub fn format(&self, options: &FormatOptions) -> String {
        self.format_with(&Context::default(), options)
    }

    /// Format as `YYMMDD-NNNN` (or `YYYYMMDD-NNNN` with [`FormatOptions::full_year`]).
    ///
    /// The delimiter is recomputed from `context`: `+` when the holder turns
    /// 100 or more in the reference year, `-` otherwise. The delimiter of the
    /// original input is not remembered.
    pub fn format_with(&self, context: &Context, options: &FormatOptions) -> String {
        engine::format(&self.birth_date, &self.serial, context.reference_date, options.full_year)
    }
}

impl std::fmt::Display for Pernr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(&FormatOptions::default()))
    }
}

impl FromStr for Pernr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parse `text` with a default [`Context`] (today's date).
///
/// # Example
/// ```
/// let pnr = pernr::parse("19100101-0101").unwrap();
/// assert_eq!(pnr.birth_date().year(), 1910);
/// assert!(pernr::parse("011x3544e095").is_err());
/// ```
pub fn parse(text: &str) -> Result<Pernr, ParseError> {
    parse_with(text, &Context::default())
}

/// Parse `text`, inferring a missing century relative to `context`.
///
/// Use this when you want deterministic parsing by supplying a reference date.
pub fn parse_with(text: &str, context: &Context) -> Result<Pernr, ParseError> {
    let extracted = engine::extract(text)?;
    let birth_date =
        engine::resolve(extracted.century, extracted.date, extracted.delimiter, context.reference_date)?;
    let serial = extracted.serial.to_string();

    Ok(Pernr {
        region: engine::lookup_region(&serial, birth_date.year()),
        gender: Gender::from_serial(&serial),
        birth_date,
        serial,
    })
}
