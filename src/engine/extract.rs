//! Locating the identity number inside free-form text.

use crate::error::ParseError;

/// The raw groups of the first `[CC]YYMMDD[-+]NNNN` match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Extracted<'a> {
    pub century: Option<&'a str>,
    /// Always six ASCII digits.
    pub date: &'a str,
    pub delimiter: Option<char>,
    /// Always four ASCII digits.
    pub serial: &'a str,
}

/// Find the leftmost identity-number shaped substring of `input`.
///
/// Digits are ASCII only; `\d` would also admit other Unicode decimal digits.
pub(crate) fn extract(input: &str) -> Result<Extracted<'_>, ParseError> {
    let malformed = || ParseError::Malformed { input: input.to_string() };

    let caps = regex!(r"([0-9]{2})?([0-9]{6})([-+])?([0-9]{4})").captures(input).ok_or_else(malformed)?;
    let date = caps.get(2).ok_or_else(malformed)?.as_str();
    let serial = caps.get(4).ok_or_else(malformed)?.as_str();

    let extracted = Extracted {
        century: caps.get(1).map(|m| m.as_str()),
        date,
        delimiter: caps.get(3).and_then(|m| m.as_str().chars().next()),
        serial,
    };

    tracing::trace!(?extracted, "extracted identity number groups");
    Ok(extracted)
}
